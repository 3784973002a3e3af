//! The "Duplicate Shape Keys With MMD Names" operator.

pub mod plan;

use anyhow::{Result, bail};

use crate::{core::NameMapping, host::ShapeKeyHost};
pub use plan::{DEFAULT_SEPARATOR_NAME, Outcome, Plan, PlanStep, SeparatorStep, SlotStep, Step};

/// Result of running the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub plan: Plan,
    /// Keys added to the model, separator included.
    pub created: usize,
}

#[derive(Debug, Clone)]
pub struct DuplicateOperator {
    pub separator_name: String,
}

impl Default for DuplicateOperator {
    fn default() -> Self {
        Self {
            separator_name: DEFAULT_SEPARATOR_NAME.to_string(),
        }
    }
}

impl DuplicateOperator {
    pub const ID: &'static str = "mesh.duplicate_mmd_shapekeys";
    pub const LABEL: &'static str = "Duplicate Shape Keys With MMD Names";

    pub fn new(separator_name: impl Into<String>) -> Self {
        Self {
            separator_name: separator_name.into(),
        }
    }

    /// The operator needs an active object with a shape-key collection.
    pub fn poll(host: &dyn ShapeKeyHost) -> bool {
        host.active_object().is_some() && host.has_shape_keys()
    }

    pub fn plan(&self, mapping: &NameMapping, host: &dyn ShapeKeyHost) -> Plan {
        Plan::build(mapping, host, &self.separator_name)
    }

    /// The steps `execute` would take, run against a copy of `host`.
    pub fn preview<H: ShapeKeyHost + Clone>(
        &self,
        mapping: &NameMapping,
        host: &H,
    ) -> Result<Plan> {
        let mut scratch = host.clone();
        Ok(self.execute(mapping, &mut scratch)?.plan)
    }

    /// Copy every resolvable slot under its target name.
    ///
    /// Each slot is resolved when its turn comes, so a source may be a key
    /// created earlier in the same pass. The returned plan holds the steps as
    /// executed. Running twice adds a second set of copies.
    pub fn execute(
        &self,
        mapping: &NameMapping,
        host: &mut dyn ShapeKeyHost,
    ) -> Result<DuplicateReport> {
        if !Self::poll(host) {
            bail!("No active object with shape keys");
        }

        let mut steps = Vec::new();
        let mut created = 0;
        for step in self.plan(mapping, host).steps {
            let step = match step {
                PlanStep::Slot(planned) => match SlotStep::resolve(planned.slot, mapping, host) {
                    Some(current) => PlanStep::Slot(current),
                    None => continue,
                },
                separator => separator,
            };
            created += step.apply(host)?;
            steps.push(step);
        }

        Ok(DuplicateReport {
            plan: Plan { steps },
            created,
        })
    }
}

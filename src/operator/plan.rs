//! Duplication plan: what the operator will do for each slot.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::{
    core::{NameMapping, SLOTS, Slot, SlotGroup, target_name},
    host::ShapeKeyHost,
};

/// Label of the marker key placed between visemes and expressions.
pub const DEFAULT_SEPARATOR_NAME: &str = " ^ MMD Visemes / Other v";

/// What happens to a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Copy `source` under the target name.
    Copy { source: String },
    /// Nothing mapped.
    Unmapped,
    /// The mapped name does not resolve to a key on the model.
    Missing { mapped: String },
    /// The mapped key already carries the target name.
    AlreadyTarget,
}

/// A step of the duplication pass.
#[enum_dispatch]
pub trait Step {
    /// Perform the step. Returns the number of keys created.
    fn apply(&self, host: &mut dyn ShapeKeyHost) -> Result<usize>;

    /// Equivalent `bpy` statements, one per line, without indentation.
    fn bpy_lines(&self) -> Vec<String>;

    /// Name the step creates or would create.
    fn target(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStep {
    pub slot: &'static Slot,
    pub target: &'static str,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorStep {
    pub name: String,
}

#[enum_dispatch(Step)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Slot(SlotStep),
    Separator(SeparatorStep),
}

impl SlotStep {
    /// Resolve `slot` against the keys currently on `host`.
    ///
    /// `None` when the slot has no catalog entry.
    pub fn resolve(
        slot: &'static Slot,
        mapping: &NameMapping,
        host: &dyn ShapeKeyHost,
    ) -> Option<Self> {
        let target = target_name(slot)?;
        let mapped = mapping.get(slot);
        let outcome = if mapped.is_empty() {
            Outcome::Unmapped
        } else {
            match host.resolve(mapped) {
                None => Outcome::Missing {
                    mapped: mapped.to_string(),
                },
                Some(source) if source == target => Outcome::AlreadyTarget,
                Some(source) => Outcome::Copy { source },
            }
        };
        Some(Self {
            slot,
            target,
            outcome,
        })
    }
}

impl Step for SlotStep {
    fn apply(&self, host: &mut dyn ShapeKeyHost) -> Result<usize> {
        let Outcome::Copy { source } = &self.outcome else {
            return Ok(0);
        };
        host.set_value(source, 1.0)?;
        host.add_shape_key(true)?;
        host.rename_active(self.target)?;
        host.set_value(source, 0.0)?;
        Ok(1)
    }

    fn bpy_lines(&self) -> Vec<String> {
        let Outcome::Copy { source } = &self.outcome else {
            return Vec::new();
        };
        vec![format!(
            "copy_shapekey({}, {})",
            py_string(source),
            py_string(self.target)
        )]
    }

    fn target(&self) -> &str {
        self.target
    }
}

impl Step for SeparatorStep {
    fn apply(&self, host: &mut dyn ShapeKeyHost) -> Result<usize> {
        host.add_shape_key(false)?;
        host.rename_active(&self.name)?;
        Ok(1)
    }

    fn bpy_lines(&self) -> Vec<String> {
        vec![
            "bpy.ops.object.shape_key_add(from_mix=False)".to_string(),
            format!("obj.active_shape_key.name = {}", py_string(&self.name)),
        ]
    }

    fn target(&self) -> &str {
        &self.name
    }
}

/// Ordered steps of one duplication pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Build the plan for `mapping` against the keys currently on `host`.
    ///
    /// Visemes come first, then the separator, then expressions. Slots
    /// without a catalog entry are left out.
    pub fn build(mapping: &NameMapping, host: &dyn ShapeKeyHost, separator_name: &str) -> Self {
        let slot_step =
            |slot: &'static Slot| SlotStep::resolve(slot, mapping, host).map(PlanStep::Slot);

        let mut steps: Vec<PlanStep> = SLOTS
            .iter()
            .filter(|slot| slot.group == SlotGroup::Viseme)
            .filter_map(slot_step)
            .collect();
        steps.push(PlanStep::Separator(SeparatorStep {
            name: separator_name.to_string(),
        }));
        steps.extend(
            SLOTS
                .iter()
                .filter(|slot| slot.group == SlotGroup::Expression)
                .filter_map(slot_step),
        );

        Self { steps }
    }

    /// Slot steps that will create a key.
    pub fn copies(&self) -> impl Iterator<Item = &SlotStep> {
        self.slot_steps()
            .filter(|step| matches!(step.outcome, Outcome::Copy { .. }))
    }

    pub fn slot_steps(&self) -> impl Iterator<Item = &SlotStep> {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Slot(slot) => Some(slot),
            PlanStep::Separator(_) => None,
        })
    }

    /// Keys the plan creates, separator included.
    pub fn created_count(&self) -> usize {
        self.copies().count() + 1
    }
}

/// Quote `s` as a Python string literal.
pub(crate) fn py_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

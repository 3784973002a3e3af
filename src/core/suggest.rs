use super::{
    catalog::slot_for_target,
    prefix::{determine_prefix, strip_prefix_ignore_case},
    slots::NameMapping,
};

/// Result of proposing slot values from a model's shape-key names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Prefix detected from the viseme keys.
    pub prefix: String,
    /// `(slot id, shape key)` pairs that were filled in by this call.
    pub filled: Vec<(&'static str, String)>,
}

/// Fill empty slots from the model's shape-key names.
///
/// Keys that already carry a target name become placeholders for their slot
/// when `prefill_existing_jp_shapekeys` is set. The remaining keys have the
/// detected prefix stripped and go through [`NameMapping::set_attribute`],
/// so slots that already hold a value are left alone.
pub fn suggest_mapping<S: AsRef<str>>(mapping: &mut NameMapping, names: &[S]) -> Suggestion {
    let prefix = determine_prefix(names);
    let before = mapping.clone();

    if mapping.prefill_existing_jp_shapekeys {
        for name in names {
            let name = name.as_ref();
            if let Some(slot) = slot_for_target(name) {
                mapping.set_attribute(slot.id, name);
            }
        }
    }

    for name in names {
        let name = name.as_ref();
        if let Some(label) = strip_prefix_ignore_case(name, &prefix) {
            mapping.set_attribute(label, name);
        }
    }

    let filled = mapping
        .mapped()
        .filter(|(slot, _)| before.get(slot).is_empty())
        .map(|(slot, value)| (slot.id, value.to_string()))
        .collect();

    Suggestion { prefix, filled }
}

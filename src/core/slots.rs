//! Slot table and the settings record it describes.
//!
//! Every slot is a plain `String` field on [`NameMapping`]. The static
//! [`SLOTS`] table pairs each field with its identifier, an optional catalog
//! label and accessor functions, so callers can address fields by name
//! without reflection.

use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

/// Which part of the duplication pass a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotGroup {
    /// Mouth shapes used for lip-sync. Copied before the separator.
    Viseme,
    /// Emotive expressions. Copied after the separator.
    Expression,
}

/// One entry of the slot table.
#[derive(Clone, Copy)]
pub struct Slot {
    /// Canonical identifier, also the JSON key and the field name.
    pub id: &'static str,
    pub group: SlotGroup,
    /// Catalog key used instead of `id` when looking up the target name.
    pub label: Option<&'static str>,
    /// Tooltip text for UI layers.
    pub description: Option<&'static str>,
    pub get: fn(&NameMapping) -> &String,
    pub get_mut: fn(&mut NameMapping) -> &mut String,
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("label", &self.label)
            .finish()
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Slot {}

impl Slot {
    /// Find a slot by its exact identifier.
    pub fn find(id: &str) -> Option<&'static Slot> {
        SLOT_INDEX.get(id).copied()
    }

    /// Key under which the target catalog lists this slot.
    pub fn catalog_key(&self) -> &'static str {
        self.label.unwrap_or(self.id)
    }

    pub fn visemes() -> impl Iterator<Item = &'static Slot> {
        SLOTS.iter().filter(|s| s.group == SlotGroup::Viseme)
    }

    pub fn expressions() -> impl Iterator<Item = &'static Slot> {
        SLOTS.iter().filter(|s| s.group == SlotGroup::Expression)
    }
}

static SLOT_INDEX: LazyLock<HashMap<&'static str, &'static Slot>> =
    LazyLock::new(|| SLOTS.iter().map(|slot| (slot.id, slot)).collect());

macro_rules! name_mapping {
    ($( $group:ident $field:ident [$label:expr, $description:expr] ),* $(,)?) => {
        /// Source shape-key name for every slot, plus the placeholder flag.
        ///
        /// Empty strings mean "not mapped". Serialized as a flat JSON object;
        /// empty slots are omitted.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct NameMapping {
            $(
                #[serde(skip_serializing_if = "String::is_empty")]
                pub $field: String,
            )*
            /// Treat keys that already carry a target name as placeholders.
            #[serde(rename = "prefillExistingJpShapekeys")]
            pub prefill_existing_jp_shapekeys: bool,
        }

        impl Default for NameMapping {
            fn default() -> Self {
                Self {
                    $( $field: String::new(), )*
                    prefill_existing_jp_shapekeys: true,
                }
            }
        }

        /// All slots in duplication order: visemes first, then expressions.
        pub static SLOTS: &[Slot] = &[
            $(
                Slot {
                    id: stringify!($field),
                    group: SlotGroup::$group,
                    label: $label,
                    description: $description,
                    get: |m| &m.$field,
                    get_mut: |m| &mut m.$field,
                },
            )*
        ];
    };
}

name_mapping! {
    Viseme ah [None, None],
    Viseme ch [None, None],
    Viseme u [None, None],
    Viseme e [None, None],
    Viseme oh [None, None],

    Expression blink [None, None],
    Expression blink_2 [Some("blink 2"), None],
    Expression wink [None, None],
    Expression wink_right [None, None],
    Expression wink_2 [None, None],
    Expression wink_2_right [None, None],
    Expression kirieye [Some("kiri-eye"), None],
    Expression close_x [Some("> <"), Some("Close Eyes, >.< shaped")],
    Expression open_o [Some("o o"), None],
    Expression howawa [None, None],
    Expression ha [Some("ha!!!"), None],
    Expression jitoeye [None, None],
    Expression bottomlid_up [None, None],
    Expression anger_eye [None, None],
    Expression eyestar [None, None],
    Expression eyestar2 [None, None],
    Expression eyeheart [None, None],
    Expression starlight [None, None],
    Expression eye_small [None, None],
    Expression eye_funky [None, None],
    Expression round_eye [None, None],
    Expression eye_small_h [None, None],
    Expression eye_invert [None, None],
    Expression eye_hi_off [None, None],
    Expression a2 [None, None],
    Expression a3 [None, None],
    Expression o_small [None, None],
    Expression kiss [None, None],
    Expression mouse_1 [None, None],
    Expression mouse_2 [None, None],
    Expression anger [None, None],
    Expression wha [Some("wha??"), None],
    Expression niyari [None, None],
    Expression v [None, None],
    Expression omega [None, None],
    Expression omega_a [None, None],
    Expression mouth_down [None, None],
    Expression mouth_up [None, None],
    Expression mouth_narrow [None, None],
    Expression mouth_widen [None, None],
    Expression get_angry [None, None],
    Expression serious [None, None],
    Expression smiley [None, None],
    Expression trouble [None, None],
    Expression sadness [None, None],
    Expression brow_up [None, None],
    Expression brow_down [None, None],
}

impl NameMapping {
    /// Current value of a slot.
    pub fn get(&self, slot: &Slot) -> &str {
        (slot.get)(self)
    }

    /// Overwrite a slot unconditionally.
    pub fn set(&mut self, slot: &Slot, value: impl Into<String>) {
        *(slot.get_mut)(self) = value.into();
    }

    /// Mapped (non-empty) slots in table order.
    pub fn mapped(&self) -> impl Iterator<Item = (&'static Slot, &str)> {
        SLOTS
            .iter()
            .map(|slot| (slot, self.get(slot)))
            .filter(|(_, value)| !value.is_empty())
    }
}

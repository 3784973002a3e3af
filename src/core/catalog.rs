//! Target names expected by MMD tooling.

use std::{collections::HashMap, sync::LazyLock};

use super::slots::{SLOTS, Slot};

/// Viseme slot -> target name. Keep keys lowercase.
pub const VISEMES: &[(&str, &str)] = &[
    ("ah", "あ"),
    ("ch", "い"),
    ("u", "う"),
    ("e", "え"),
    ("oh", "お"),
];

/// Expression catalog key -> target name.
///
/// Keys use spaces; slot identifiers are looked up with underscores
/// replaced, and irregular keys are reached through [`Slot::label`].
pub const MMD_SHAPEKEYS: &[(&str, &str)] = &[
    ("blink", "まばたき"),
    ("blink 2", "笑い"),
    ("wink", "ウィンク"),
    ("wink right", "ウィンク右"),
    ("wink 2", "ウィンク２"),
    ("wink 2 right", "ｳｨﾝｸ２右"),
    ("kiri-eye", "ｷﾘｯ"),
    ("> <", "はぅ"),
    ("o o", "はちゅ目"),
    ("howawa", "なごみ"),
    ("ha!!!", "びっくり"),
    ("jitoeye", "じと目"),
    ("bottomlid up", "下まぶた上げ"),
    ("anger eye", "恐ろしい"),
    ("eyestar", "星目"),
    ("eyestar2", "星目2"),
    ("eyeheart", "はぁと"),
    ("starlight", "スターライト"),
    ("eye small", "瞳小"),
    ("eye funky", "恐ろしい子！"),
    ("round eye", "丸い目"),
    ("eye small h", "瞳縦潰れ"),
    ("eye invert", "ｺｯﾁﾐﾝﾅ"),
    ("eye hi off", "ハイライト消"),
    ("a2", "あ２"),
    ("a3", "あ３"),
    ("o small", "お小さい"),
    ("kiss", "キッス"),
    ("mouse 1", "∧"),
    ("mouse 2", "▲"),
    ("anger", "怒り"),
    ("wha??", "ええ？"),
    ("niyari", "にやり"),
    ("v", "V"),
    ("omega", "ω"),
    ("omega a", "ω□"),
    ("mouth down", "口上げ"),
    ("mouth up", "口下げ"),
    ("mouth narrow", "口すぼめる"),
    ("mouth widen", "口横広げ"),
    ("get angry", "怒り眉"),
    ("serious", "真面目"),
    ("smiley", "にこり眉"),
    ("trouble", "困った"),
    ("sadness", "動揺"),
    ("brow up", "眉上"),
    ("brow down", "眉下"),
];

static CATALOG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    VISEMES
        .iter()
        .chain(MMD_SHAPEKEYS.iter())
        .copied()
        .collect()
});

/// Reverse lookup from target name to slot, for placeholder detection.
static SLOT_BY_TARGET: LazyLock<HashMap<&'static str, &'static Slot>> = LazyLock::new(|| {
    SLOTS
        .iter()
        .filter_map(|slot| target_name(slot).map(|target| (target, slot)))
        .collect()
});

/// Look up a catalog entry by key. Underscores in `key` match spaces.
pub fn lookup(key: &str) -> Option<&'static str> {
    CATALOG
        .get(key)
        .or_else(|| CATALOG.get(key.replace('_', " ").as_str()))
        .copied()
}

/// Target name for a slot, via its label override or its identifier.
pub fn target_name(slot: &Slot) -> Option<&'static str> {
    lookup(slot.catalog_key())
}

/// Slot whose target name is exactly `name`.
pub fn slot_for_target(name: &str) -> Option<&'static Slot> {
    SLOT_BY_TARGET.get(name).copied()
}

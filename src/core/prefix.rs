use std::sync::LazyLock;

use regex::Regex;

use super::catalog::VISEMES;

/// Matches a viseme name with an optional `<prefix><separator>` in front,
/// e.g. `face.ah` or `Mouth_OH`.
static VISEME_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let visemes: Vec<&str> = VISEMES.iter().map(|(slot, _)| *slot).collect();
    Regex::new(&format!(r"(?i)^(.*[._-])?(?:{})$", visemes.join("|"))).unwrap()
});

/// Detect the naming prefix a model uses for its shape keys.
///
/// Returns the prefix (separator included) of the first name that looks like
/// a viseme, or an empty string when none does.
pub fn determine_prefix<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .find_map(|name| {
            VISEME_PREFIX_REGEX
                .captures(name.as_ref())
                .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
        })
        .unwrap_or_default()
}

/// Strip `prefix` from the start of `name`, ignoring ASCII case.
pub fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(name);
    }
    let head = name.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &name[prefix.len()..])
}

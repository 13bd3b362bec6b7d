// Hair Stylist Normalizer
// Canonical forms for preference and catalog values

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Normalize a scalar value: trim, lowercase, treat empty as absent
///
/// # Examples
/// ```
/// # use ai_hair_stylist::normalize::normalize_value;
/// assert_eq!(normalize_value(Some("  Oval ")), Some("oval".to_string()));
/// assert_eq!(normalize_value(Some("   ")), None);
/// assert_eq!(normalize_value(None::<&str>), None);
/// ```
pub fn normalize_value<S: AsRef<str>>(value: Option<S>) -> Option<String> {
    let value = value?;
    let value = value.as_ref().trim().to_lowercase();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Normalize a collection into a set of trimmed, lowercase, non-empty strings
///
/// Duplicates collapse silently.
pub fn normalize_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|item| normalize_value(Some(item)))
        .collect()
}

fn keyword_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[,;]+").expect("static separator regex"))
}

/// Split free-form keyword text such as `"Volume, curls"` into a keyword set
///
/// Commas and semicolons separate keywords; inner spaces are kept so
/// multi-word tags such as `heat styling` survive.
pub fn split_keyword_list<I, S>(inputs: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let separator = keyword_separator();
    inputs
        .into_iter()
        .flat_map(|input| {
            separator
                .split(input.as_ref())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter_map(|item| normalize_value(Some(item)))
        .collect()
}

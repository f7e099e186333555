use crate::model::format_number;
use itertools::Itertools;
use std::fmt::Display;

/// Returns `prefix`, or `prefix-2`, `prefix-3`, ... until `taken` says no.
pub fn fresh_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(prefix) {
        return prefix.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", prefix, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| prefix.to_string())
}

/// `[a, b, c]`
pub fn list_text<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", items.into_iter().join(", "))
}

/// `[10, 20, _]`, with `_` for empty slots.
pub fn values_text(values: &[Option<f64>]) -> String {
    list_text(
        values
            .iter()
            .map(|v| v.map_or_else(|| "_".to_string(), format_number)),
    )
}

/// Normalizes a link label for matching.
///
/// Trims, collapses internal whitespace runs to a single space and
/// lowercases, so `[Foo  Bar]` and `[foo bar]` name the same definition.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

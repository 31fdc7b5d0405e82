//! Small formatting helpers used by the page templates

/// Joins a list of strings with ", "
pub fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercases the first character and leaves the rest untouched
pub fn title(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a rating or average with two decimals, trimming trailing zeros
pub fn decimal(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Output file name for a page, rejecting names that would leave the output directory
pub(crate) fn page_file_name(name: &str) -> Option<String> {
    let unsafe_name = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');

    if unsafe_name {
        None
    } else {
        Some(format!("{}.html", name))
    }
}

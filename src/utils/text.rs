//! Display helpers for API names.

/// Title-cases an API name.
///
/// A letter following a non-letter (or the start) is upper-cased, every other
/// letter lower-cased: `"mr-mime"` becomes `"Mr-Mime"`, `"ice beam"` becomes
/// `"Ice Beam"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }

    out
}

/// Title-cases every name and joins them with `separator`.
pub fn join_titled<S: AsRef<str>>(names: &[S], separator: &str) -> String {
    names
        .iter()
        .map(|n| title_case(n.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

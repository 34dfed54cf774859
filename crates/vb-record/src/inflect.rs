//! Attribute and model name inflection.

/// Turn an attribute name into a human-readable label.
///
/// Drops a trailing `_id`, replaces underscores with spaces, lowercases and
/// capitalizes the first letter:
///
/// - `first_name` → `First name`
/// - `author_id` → `Author`
/// - `is_active` → `Is active`
#[must_use]
pub fn humanize(name: &str) -> String {
    let name = name.strip_suffix("_id").unwrap_or(name);
    let spaced = name.replace('_', " ");
    let lowered = spaced.trim().to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a `CamelCase` model name to `snake_case`.
///
/// Acronyms stay together: `HTMLPage` → `html_page`, `AdminUser` → `admin_user`.
/// Namespace separators become underscores: `Admin::User` → `admin_user`.
#[must_use]
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.replace("::", "_").chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

//! Mapping of schema field names to environment variable names.

/// Derives the source key for a field that has no explicit `env` option.
///
/// Names that are already screaming snake case are returned unchanged.
/// Otherwise an underscore is inserted before every uppercase letter that
/// follows a lowercase letter or digit, and the result is uppercased:
///
/// ```
/// use dragon_envcfg::derive_key;
///
/// assert_eq!(derive_key("nameIsEnvName"), "NAME_IS_ENV_NAME");
/// assert_eq!(derive_key("SOME_URL"), "SOME_URL");
/// ```
pub fn derive_key(name: &str) -> String {
    if looks_like_screaming_snake(name) {
        return name.to_string();
    }

    let mut key = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in name.chars() {
        if ch.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    key.push('_');
                }
            }
        }
        key.extend(ch.to_uppercase());
        prev = Some(ch);
    }

    key
}

/// `[A-Z0-9]+(_[A-Z0-9]+)*` with at least one letter.
fn looks_like_screaming_snake(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
        && s.split('_').all(|w| {
            !w.is_empty() && w.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
}

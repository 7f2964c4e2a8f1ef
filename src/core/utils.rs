pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Strips parameters such as `; charset=utf-8` and lowercases the essence.
pub fn media_type_essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

pub fn content_type_is(value: Option<&str>, expected: &str) -> bool {
    match value {
        Some(val) => media_type_essence(val) == expected,
        None => false,
    }
}

/// True when one of the comma separated media ranges of an `Accept` header
/// names `expected` exactly.
pub fn accepts(value: Option<&str>, expected: &str) -> bool {
    match value {
        Some(val) => val
            .split(',')
            .any(|range| media_type_essence(range) == expected),
        None => false,
    }
}

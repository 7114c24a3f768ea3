use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize `value` as pretty JSON indented by `indent` spaces per level.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn matches_quick_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn to_json_uses_requested_indent_and_keeps_key_order() {
        let value = json!({ "users": [], "roles": [] });
        assert_eq!(
            to_json(&value, 4).expect("serialize"),
            "{\n    \"users\": [],\n    \"roles\": []\n}"
        );
    }

    #[test]
    fn to_json_nests_indent_per_level() {
        let value = json!({ "roles": [{ "name": "viewer" }] });
        assert_eq!(
            to_json(&value, 2).expect("serialize"),
            "{\n  \"roles\": [\n    {\n      \"name\": \"viewer\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn quick_search_ignores_case_and_surrounding_space() {
        assert!(matches_quick_search("Ada@Example.com", " ada "));
        assert!(matches_quick_search("anything", ""));
        assert!(!matches_quick_search("grace", "ada"));
    }
}

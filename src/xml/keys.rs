// src/xml/keys.rs
use std::sync::LazyLock;

use regex::Regex;

// "HTMLParser" -> "HTML_Parser"
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym boundary regex is valid"));

// "schoolDistrict" -> "school_District"
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("camel boundary regex is valid"));

/// Converts a camelCase or PascalCase tag name into a snake_case key.
///
/// Runs of capitals stay together ("MLSID" -> "mlsid", "HTMLParser" ->
/// "html_parser"), `::` becomes `/`, and dashes become underscores.
/// Already-normalized input passes through unchanged.
pub fn normalize_key(tag: &str) -> String {
    let key = tag.replace("::", "/");
    let key = ACRONYM_BOUNDARY.replace_all(&key, "${1}_${2}");
    let key = CAMEL_BOUNDARY.replace_all(&key, "${1}_${2}");
    key.replace('-', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_pascal_case() {
        assert_eq!(normalize_key("HomeDescription"), "home_description");
    }

    #[test]
    fn test_normalize_key_camel_case() {
        assert_eq!(normalize_key("schoolDistrict"), "school_district");
        assert_eq!(normalize_key("lastUpdatedDate"), "last_updated_date");
        assert_eq!(normalize_key("lotSizeSqFt"), "lot_size_sq_ft");
    }

    #[test]
    fn test_normalize_key_acronym_followed_by_word() {
        assert_eq!(normalize_key("HTMLTag"), "html_tag");
        assert_eq!(normalize_key("HTMLParser"), "html_parser");
    }

    #[test]
    fn test_normalize_key_all_caps_stays_one_word() {
        assert_eq!(normalize_key("MLSID"), "mlsid");
    }

    #[test]
    fn test_normalize_key_dashes_become_underscores() {
        assert_eq!(normalize_key("foo-bar"), "foo_bar");
    }

    #[test]
    fn test_normalize_key_digit_boundary() {
        assert_eq!(normalize_key("area51Code"), "area51_code");
    }

    #[test]
    fn test_normalize_key_module_separator() {
        assert_eq!(normalize_key("Models::PostingData"), "models/posting_data");
    }

    #[test]
    fn test_normalize_key_is_stable() {
        for key in ["home_description", "mlsid", "price", "agent_phone_number"] {
            assert_eq!(normalize_key(key), key);
        }
    }
}

//! Display language selection.

use serde::{Deserialize, Serialize};

/// Display language for localized fields.
///
/// The upstream API carries English and Chinese variants of destination and
/// ETA labels side by side; callers choose one at fetch time. Station and
/// terminus names in the catalog are localized the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Traditional Chinese.
    Zh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Zh).unwrap(), "\"zh\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"zh\"").unwrap(),
            Language::Zh
        );
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}

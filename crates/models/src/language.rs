//! Supported language codes.
//!
//! Every address and prompt query is scoped by a [`Language`]; codes outside
//! the closed set are rejected before any storage access.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[sea_orm(string_value = "en")]
    En,
    #[sea_orm(string_value = "zh")]
    Zh,
    #[sea_orm(string_value = "ja")]
    Ja,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Zh, Language::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    /// Whether `code` names a supported language. Exact, case-sensitive match.
    pub fn is_supported(code: &str) -> bool {
        Self::ALL.iter().any(|l| l.as_str() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ModelError::Validation(format!("unsupported language: {s}")))
    }
}

impl TryFrom<&str> for Language {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_codes_are_accepted() {
        assert!(Language::is_supported("zh"));
        assert!(Language::is_supported("en"));
        assert!(Language::is_supported("ja"));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["abc", "", "ZH", " zh", "zh-CN", "english"] {
            assert!(!Language::is_supported(code), "{code:?} should be unsupported");
        }
    }

    #[test]
    fn parse_matches_is_supported() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        let err = "abc".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("unsupported language: abc"));
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let back: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Language::En);
        assert!(serde_json::from_str::<Language>("\"abc\"").is_err());
    }

    #[test]
    fn active_enum_value_is_the_code() {
        for lang in Language::ALL {
            assert_eq!(lang.to_value(), lang.as_str());
        }
    }
}

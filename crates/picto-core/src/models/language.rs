//! Language short codes accepted by the translation endpoint and the provider
//! target tags they map to.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// Internal short code accepted in `TranslationRequest::language`.
///
/// These are business identifiers, not ISO codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Kr,
    Germ,
    Fran,
    Chi,
    Jp,
    Ital,
    Pli,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 8] = [
        LanguageCode::En,
        LanguageCode::Kr,
        LanguageCode::Germ,
        LanguageCode::Fran,
        LanguageCode::Chi,
        LanguageCode::Jp,
        LanguageCode::Ital,
        LanguageCode::Pli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Kr => "kr",
            LanguageCode::Germ => "germ",
            LanguageCode::Fran => "fran",
            LanguageCode::Chi => "chi",
            LanguageCode::Jp => "jp",
            LanguageCode::Ital => "ital",
            LanguageCode::Pli => "pli",
        }
    }

    /// Provider target language for this code.
    pub fn target_lang(&self) -> TargetLang {
        match self {
            LanguageCode::En => TargetLang::EnglishUs,
            LanguageCode::Kr => TargetLang::Korean,
            LanguageCode::Germ => TargetLang::German,
            LanguageCode::Fran => TargetLang::French,
            LanguageCode::Chi => TargetLang::Chinese,
            LanguageCode::Jp => TargetLang::Japanese,
            LanguageCode::Ital => TargetLang::Italian,
            LanguageCode::Pli => TargetLang::Polish,
        }
    }
}

impl FromStr for LanguageCode {
    type Err = AppError;

    /// Matching is exact: `"KR"` or `" kr"` are rejected like any other unknown code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target language tag understood by the translation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLang {
    EnglishUs,
    Korean,
    German,
    French,
    Chinese,
    Japanese,
    Italian,
    Polish,
}

impl TargetLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLang::EnglishUs => "EN-US",
            TargetLang::Korean => "KO",
            TargetLang::German => "DE",
            TargetLang::French => "FR",
            TargetLang::Chinese => "ZH",
            TargetLang::Japanese => "JA",
            TargetLang::Italian => "IT",
            TargetLang::Polish => "PL",
        }
    }
}

impl fmt::Display for TargetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TargetLang {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

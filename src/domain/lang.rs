//! Request language and multilingual text resolution.
//!
//! The language is derived from the `x-lang` header at the boundary and
//! threaded as an explicit parameter, so mapping functions stay pure.

use std::convert::Infallible;
use std::str::FromStr;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

/// Supported request languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLang(pub String);

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "hi" => Ok(Lang::Hi),
            other => Err(UnsupportedLang(other.to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Reads `x-lang`. Missing or unrecognized values fall back to English
    /// rather than rejecting the request.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get("x-lang")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(lang)
    }
}

/// A stored text value keyed by language code.
///
/// English is mandatory; Hindi is optional and falls back to English when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hi: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: None,
        }
    }

    pub fn with_hi(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: Some(hi.into()),
        }
    }

    /// Resolves to a single string for the requested language.
    pub fn resolve(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Hi => self.hi.as_deref().unwrap_or(&self.en),
        }
    }
}

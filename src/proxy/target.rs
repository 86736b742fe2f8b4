//! Upstream selection
//!
//! The set of upstreams is closed and compiled in. A `target` query value is
//! parsed into a [`Target`] before any network call is made.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

macro_rules! gemini_model {
    () => {
        "gemini-3-flash-preview"
    };
}

/// Gemini model served behind `?target=gemini`
pub const GEMINI_MODEL: &str = gemini_model!();

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GEMINI_URL: &str = concat!(
    "https://generativelanguage.googleapis.com/v1beta/models/",
    gemini_model!(),
    ":generateContent"
);
const PERPLEXITY_URL: &str = "https://api.perplexity.ai/chat/completions";

/// Upstream AI API a request is relayed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    OpenAi,
    Gemini,
    Perplexity,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::OpenAi, Target::Gemini, Target::Perplexity];

    /// Value accepted in the `target` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::OpenAi => "openai",
            Target::Gemini => "gemini",
            Target::Perplexity => "perplexity",
        }
    }

    /// Fixed endpoint requests for this target are posted to
    pub fn upstream_url(&self) -> &'static str {
        match self {
            Target::OpenAi => OPENAI_URL,
            Target::Gemini => GEMINI_URL,
            Target::Perplexity => PERPLEXITY_URL,
        }
    }
}

impl FromStr for Target {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Target::OpenAi),
            "gemini" => Ok(Target::Gemini),
            "perplexity" => Ok(Target::Perplexity),
            _ => Err(AppError::InvalidTarget),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

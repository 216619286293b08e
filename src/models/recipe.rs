use crate::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named build sequences a `Director` knows how to run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipe {
    #[serde(rename = "minimal")]
    MinimalViable,
    #[serde(rename = "full")]
    FullFeatured,
}

impl Default for Recipe {
    fn default() -> Self {
        Self::FullFeatured
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinimalViable => write!(f, "minimal"),
            Self::FullFeatured => write!(f, "full"),
        }
    }
}

impl TryFrom<&str> for Recipe {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "minimal" | "minimal-viable" | "mvp" => Ok(Self::MinimalViable),
            "full" | "full-featured" => Ok(Self::FullFeatured),
            _ => Err(PatternError::UnknownRecipe(value.to_string())),
        }
    }
}

use crate::Family;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Product of family {found} cannot collaborate with family {expected}")]
    IncompatibleFamily { expected: Family, found: Family },

    #[error("Unknown product family: {0}")]
    UnknownFamily(String),

    #[error("Unknown build recipe: {0}")]
    UnknownRecipe(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PatternError {
    pub fn incompatible(expected: Family, found: Family) -> Self {
        Self::IncompatibleFamily { expected, found }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_family_message() {
        let err = PatternError::incompatible(Family::One, Family::Two);
        assert_eq!(
            err.to_string(),
            "Product of family 2 cannot collaborate with family 1"
        );
    }
}

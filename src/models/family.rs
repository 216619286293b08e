use crate::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Family index shared by a matched pair of abstract-factory products.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    #[serde(rename = "1", alias = "one")]
    One,
    #[serde(rename = "2", alias = "two")]
    Two,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::One, Family::Two];

    pub fn index(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn is_compatible_with(&self, other: Family) -> bool {
        *self == other
    }
}

impl Default for Family {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl TryFrom<&str> for Family {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            _ => Err(PatternError::UnknownFamily(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_family() {
        assert_eq!(Family::try_from("1").unwrap(), Family::One);
        assert_eq!(Family::try_from(" Two ").unwrap(), Family::Two);
    }

    #[test]
    fn test_parse_unknown_family() {
        let result = Family::try_from("three");
        assert_eq!(result, Err(PatternError::UnknownFamily("three".to_string())));
    }

    #[test]
    fn test_compatibility() {
        assert!(Family::One.is_compatible_with(Family::One));
        assert!(!Family::One.is_compatible_with(Family::Two));
    }
}

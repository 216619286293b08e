use crate::factories::factory_for;
use crate::{AbstractFactory, Family, PatternError, Recipe};
use serde::{Deserialize, Serialize};

/// Selects a product family and a build recipe.
///
/// Parsed from TOML text; the crate itself never touches the filesystem.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PatternsConfig {
    pub family: Family,
    pub recipe: Recipe,
}

impl PatternsConfig {
    pub fn new(family: Family, recipe: Recipe) -> Self {
        Self { family, recipe }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, PatternError> {
        let config: Self = toml::from_str(input)?;
        tracing::debug!(family = %config.family, recipe = %config.recipe, "Loaded patterns config");
        Ok(config)
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = recipe;
        self
    }

    /// Returns the factory for the configured family.
    pub fn factory(&self) -> Box<dyn AbstractFactory> {
        factory_for(self.family)
    }
}

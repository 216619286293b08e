// src/factories/mod.rs

mod concrete_builder;
mod creator_factory;
mod family_factory;

pub use concrete_builder::{BuilderState, ConcreteBuilder1};
pub use creator_factory::{Apple, Microsoft};
pub use family_factory::{ConcreteFactory1, ConcreteFactory2, factory_for};

use crate::{AbstractFactory, Family};

/// Collection of the crate's concrete producers.
pub struct Factories {
    microsoft: Microsoft,
    apple: Apple,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self {
            microsoft: Microsoft,
            apple: Apple,
        }
    }

    /// Returns the Windows creator.
    pub fn microsoft(&self) -> &Microsoft {
        &self.microsoft
    }

    /// Returns the MacOS creator.
    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Returns the abstract factory for `family`.
    pub fn family(&self, family: Family) -> Box<dyn AbstractFactory> {
        factory_for(family)
    }

    /// Returns a fresh, empty builder.
    pub fn builder(&self) -> ConcreteBuilder1 {
        ConcreteBuilder1::new()
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Creator;

    #[test]
    fn test_registry_exposes_every_producer() {
        let factories = Factories::default();

        assert!(factories.microsoft().some_operation().contains("Windows"));
        assert!(factories.apple().some_operation().contains("MacOS"));
        assert_eq!(factories.family(Family::Two).family(), Family::Two);
        assert_eq!(factories.builder().state(), BuilderState::Empty);
    }
}

// src/factories/concrete_builder.rs

use crate::{Builder, Product1};

/// Where a builder is in its accumulate/retrieve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Accumulating,
}

/// Builds `Product1` values out of `PartA1`, `PartB1` and `PartC1`.
///
/// Retrieving the product hands it out and leaves the builder empty, so a
/// returned product never changes through later builder calls.
#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.product = Product1::new();
    }

    pub fn state(&self) -> BuilderState {
        if self.product.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::Accumulating
        }
    }

    /// Takes the accumulated product and resets the builder.
    pub fn retrieve_product(&mut self) -> Product1 {
        let product = std::mem::take(&mut self.product);
        tracing::debug!(parts = product.len(), "Retrieved built product");
        product
    }

    fn push(&mut self, part: &str) {
        tracing::trace!(part, "Producing part");
        self.product.add(part);
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.push("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.push("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.push("PartC1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_follow_call_order() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();

        let product = builder.retrieve_product();
        assert_eq!(product.parts(), ["PartA1", "PartB1", "PartC1"]);
    }

    #[test]
    fn test_retrieve_resets_builder() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_c();
        builder.produce_part_a();
        assert_eq!(builder.state(), BuilderState::Accumulating);

        let first = builder.retrieve_product();
        assert_eq!(first.parts(), ["PartC1", "PartA1"]);
        assert_eq!(builder.state(), BuilderState::Empty);

        let second = builder.retrieve_product();
        assert!(second.is_empty());
    }

    #[test]
    fn test_retrieve_from_empty_builder() {
        let mut builder = ConcreteBuilder1::new();
        assert_eq!(builder.state(), BuilderState::Empty);
        assert_eq!(builder.retrieve_product(), Product1::new());
    }

    #[test]
    fn test_reset_discards_parts() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_b();
        builder.reset();
        assert!(builder.retrieve_product().is_empty());
    }
}

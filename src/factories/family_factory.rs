// src/factories/family_factory.rs

use crate::{
    AbstractFactory, AbstractProductA, AbstractProductB, ConcreteProductA1, ConcreteProductA2,
    ConcreteProductB1, ConcreteProductB2, Family,
};

/// Factory for family 1 products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn family(&self) -> Family {
        Family::One
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

/// Factory for family 2 products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn family(&self) -> Family {
        Family::Two
    }

    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

/// Returns the concrete factory for `family`.
pub fn factory_for(family: Family) -> Box<dyn AbstractFactory> {
    tracing::debug!(%family, "Selecting abstract factory");
    match family {
        Family::One => Box::new(ConcreteFactory1),
        Family::Two => Box::new(ConcreteFactory2),
    }
}

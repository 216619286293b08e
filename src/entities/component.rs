use crate::{Element, Visitor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteComponentA;

impl ConcreteComponentA {
    pub fn exclusive_method_of_concrete_component_a(&self) -> String {
        "A".to_string()
    }
}

impl Element for ConcreteComponentA {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_a(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteComponentB;

impl ConcreteComponentB {
    pub fn special_method_of_concrete_component_b(&self) -> String {
        "B".to_string()
    }
}

impl Element for ConcreteComponentB {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_b(self)
    }
}

/// Closed set of visitable components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    A(ConcreteComponentA),
    B(ConcreteComponentB),
}

impl Component {
    pub fn a() -> Self {
        Self::A(ConcreteComponentA)
    }

    pub fn b() -> Self {
        Self::B(ConcreteComponentB)
    }
}

impl Element for Component {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        match self {
            Self::A(element) => element.accept(visitor),
            Self::B(element) => element.accept(visitor),
        }
    }
}

impl From<ConcreteComponentA> for Component {
    fn from(element: ConcreteComponentA) -> Self {
        Self::A(element)
    }
}

impl From<ConcreteComponentB> for Component {
    fn from(element: ConcreteComponentB) -> Self {
        Self::B(element)
    }
}

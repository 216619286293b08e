use crate::{ConcreteComponentA, ConcreteComponentB};

/// One handler per component variant. There is no fallback handler: a new
/// variant must be added here and to every implementation.
pub trait Visitor {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String;

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String;
}

/// A node that routes a visitor to the handler for its own variant.
pub trait Element {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

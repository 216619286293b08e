use crate::{ConcreteComponentA, ConcreteComponentB, Element, Visitor};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteVisitor1;

impl Visitor for ConcreteVisitor1 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!("{} + ConcreteVisitor1", element.exclusive_method_of_concrete_component_a())
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!("{} + ConcreteVisitor1", element.special_method_of_concrete_component_b())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteVisitor2;

impl Visitor for ConcreteVisitor2 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!("{} + ConcreteVisitor2", element.exclusive_method_of_concrete_component_a())
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!("{} + ConcreteVisitor2", element.special_method_of_concrete_component_b())
    }
}

/// Applies `visitor` to every element, in order.
pub fn visit_all<E: Element>(elements: &[E], visitor: &dyn Visitor) -> Vec<String> {
    tracing::debug!(elements = elements.len(), "Visiting elements");
    elements.iter().map(|element| element.accept(visitor)).collect()
}

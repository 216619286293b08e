use serde::{Deserialize, Serialize};

/// The product a `ConcreteBuilder1` accumulates: an ordered list of part labels.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Product1 {
    parts: Vec<String>,
}

impl Product1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Into<String>>(&mut self, part: S) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

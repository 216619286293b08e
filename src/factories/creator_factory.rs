// src/factories/creator_factory.rs

use crate::{Creator, MacOS, Product, Windows};

/// Creator for the Windows product family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Microsoft;

impl Creator for Microsoft {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(Windows)
    }
}

/// Creator for the MacOS product family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apple;

impl Creator for Apple {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(MacOS)
    }
}

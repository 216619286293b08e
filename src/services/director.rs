use crate::{Builder, Recipe};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a builder a `Director` drives.
pub type SharedBuilder = Rc<RefCell<dyn Builder>>;

/// Runs canonical build sequences against whichever builder is registered.
///
/// The director holds no product state. The caller keeps its own handle to
/// the concrete builder and retrieves products from it.
#[derive(Default)]
pub struct Director {
    builder: Option<SharedBuilder>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `builder`, replacing any previous one.
    pub fn update(&mut self, builder: SharedBuilder) {
        self.builder = Some(builder);
    }

    pub fn clear(&mut self) {
        self.builder = None;
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    pub fn build_minimal_viable_product(&self) {
        self.with_builder(Recipe::MinimalViable, |builder| {
            builder.produce_part_a();
        });
    }

    pub fn build_full_featured_product(&self) {
        self.with_builder(Recipe::FullFeatured, |builder| {
            builder.produce_part_a();
            builder.produce_part_b();
            builder.produce_part_c();
        });
    }

    pub fn build(&self, recipe: Recipe) {
        match recipe {
            Recipe::MinimalViable => self.build_minimal_viable_product(),
            Recipe::FullFeatured => self.build_full_featured_product(),
        }
    }

    fn with_builder<F>(&self, recipe: Recipe, steps: F)
    where
        F: FnOnce(&mut dyn Builder),
    {
        match &self.builder {
            Some(builder) => {
                tracing::debug!(%recipe, "Director running recipe");
                steps(&mut *builder.borrow_mut());
            }
            None => tracing::warn!(%recipe, "No builder registered, recipe skipped"),
        }
    }
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("has_builder", &self.has_builder())
            .finish()
    }
}

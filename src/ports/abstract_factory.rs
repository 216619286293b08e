use crate::{Family, PatternError};

pub trait AbstractProductA {
    fn family(&self) -> Family;

    fn useful_function_a(&self) -> String;
}

pub trait AbstractProductB {
    fn family(&self) -> Family;

    fn useful_function_b(&self) -> String;

    /// Collaborates with a product A of the same family.
    ///
    /// Returns `PatternError::IncompatibleFamily` when `collaborator`
    /// belongs to another family.
    fn another_useful_function_b(
        &self,
        collaborator: &dyn AbstractProductA,
    ) -> Result<String, PatternError>;
}

/// Produces a matched pair of products drawn from one family.
pub trait AbstractFactory {
    fn family(&self) -> Family;

    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

/// Rejects a collaborator whose family differs from `expected`.
pub fn ensure_same_family(
    expected: Family,
    collaborator: &dyn AbstractProductA,
) -> Result<(), PatternError> {
    let found = collaborator.family();
    if !expected.is_compatible_with(found) {
        tracing::warn!(%expected, %found, "Rejected cross-family collaboration");
        return Err(PatternError::incompatible(expected, found));
    }
    Ok(())
}

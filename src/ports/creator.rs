/// An artifact produced by a [`Creator`].
pub trait Product {
    fn operation(&self) -> String;

    /// Name of the concrete product, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Factory Method contract.
///
/// Implementors supply only [`Creator::factory_method`]; the shared
/// [`Creator::some_operation`] works with whatever product it returns.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        tracing::debug!(product = product.name(), "Creator produced product");

        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

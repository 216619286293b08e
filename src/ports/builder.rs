/// Stepwise construction of a product.
///
/// Each step appends one part to the product in progress; call order is
/// part order.
pub trait Builder {
    fn produce_part_a(&mut self);

    fn produce_part_b(&mut self);

    fn produce_part_c(&mut self);
}

pub mod director;
pub mod invoker;
pub mod visitors;

pub use director::*;
pub use invoker::*;
pub use visitors::*;

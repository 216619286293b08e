pub mod built_product;
pub mod commands;
pub mod component;
pub mod family_product;
pub mod os_product;
pub mod receiver;

pub use built_product::*;
pub use commands::*;
pub use component::*;
pub use family_product::*;
pub use os_product::*;
pub use receiver::*;

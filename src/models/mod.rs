pub mod config;
pub mod events;
pub mod family;
pub mod journal;
pub mod recipe;

pub use config::*;
pub use events::*;
pub use family::*;
pub use journal::*;
pub use recipe::*;

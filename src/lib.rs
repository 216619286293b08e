//! Factory Method, Abstract Factory, Builder, Visitor and Command, expressed
//! as traits over small families of interchangeable implementations.
//!
//! Everything here is single-threaded. Builders are shared through
//! `Rc<RefCell<_>>`, receivers through `Rc`, and journals are `Rc` handles, so
//! none of these types are `Send` or `Sync`; concurrent use needs external
//! synchronization and a different ownership model.
//!
//! The crate emits `tracing` events but never installs a subscriber.

pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;

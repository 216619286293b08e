pub use abstract_factory::{AbstractFactory, AbstractProductA, AbstractProductB, ensure_same_family};
pub use builder::Builder;
pub use command::Command;
pub use creator::{Creator, Product};
pub use visitor::{Element, Visitor};

pub mod abstract_factory;
pub mod builder;
pub mod command;
pub mod creator;
pub mod visitor;

//! The register model and the operations that combine register values

pub mod engine;
mod operator;
mod register;
mod value;

pub use operator::Operator;
pub use register::{RegisterName, Registers};
pub use value::Value;

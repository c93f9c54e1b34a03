//! Rust types representing a parsed TL declaration.

mod entity;
mod field;
mod flag;
mod kind;
mod ty;

pub use entity::Entity;
pub use field::Field;
pub use flag::Flag;
pub use kind::Kind;
pub use ty::{Primitive, TypeRef};

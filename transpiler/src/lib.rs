pub mod attribute;
pub mod directive;
pub mod emitter;
pub mod error;
pub mod text;

pub use attribute::{compile_attribute, compile_attributes, strip_quotes};
pub use directive::{Directive, Iteration, Slot, SlotKey};
pub use emitter::compile;
pub use error::CompileError;
pub use text::interpolate;

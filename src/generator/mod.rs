//! Asset generators.
//!
//! [`TemplateExpander`] is the building block: one template in, sixteen
//! colored files out. The cable and wire generators drive it with the
//! substitutions and paths their asset types need.

pub mod cable;
pub mod expander;
pub mod placeholders;
pub mod substitutions;
pub mod wire;

pub use cable::create_cable;
pub use expander::TemplateExpander;
pub use substitutions::Substitutions;
pub use wire::generate_wire;

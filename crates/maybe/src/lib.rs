//! maybe: an optional-value container (`Just`/`Nothing`) whose combinators
//! short-circuit on absence, with a curried call surface for building
//! reusable transformers.

pub mod curried;
pub mod types;

// Re-export all public items from modules for convenience
pub use types::*;
pub use types::Maybe::{Just, Nothing};

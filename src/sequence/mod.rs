//! DNA and RNA sequence utilities

pub mod conversion;
pub mod input;
pub mod validation;

pub use conversion::*;
pub use input::*;
pub use validation::*;

//! Core CNPJ types, codec, check digits, and matriz/filial relationships.
//!
//! This module provides the validated [`Cnpj`] value type and the pure
//! operations defined over it. Everything here is synchronous and
//! side-effect-free.

mod branches;
mod check_digits;
mod codec;
mod error;
mod types;

pub use branches::*;
pub use check_digits::*;
pub use codec::*;
pub use error::*;
pub use types::*;

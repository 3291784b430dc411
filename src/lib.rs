//! # cadastro
//!
//! Brazilian CNPJ toolkit: numeric codec, check-digit schemes,
//! matriz/filial relationships, regional batch aggregation, and fiscal
//! record formatting.
//!
//! A CNPJ is handled as a 14-digit numeral: a 12-digit registration base
//! followed by a 2-digit check suffix. Monetary amounts use
//! [`rust_decimal::Decimal`] — never floating point.
//!
//! The check-digit schemes in this crate reproduce the two schemes found
//! in legacy registry integrations (truncating mod-100 and mod-97);
//! neither is the official weighted mod-11 algorithm. See
//! [`core::CheckDigitScheme`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! let cnpj = parse("11222333000101").unwrap();
//! assert_eq!(cnpj.base(), 112223330001);
//! assert_eq!(cnpj.check_suffix(), 1);
//! assert!(TruncatingIdentity.validate(&cnpj));
//!
//! let filial = Cnpj::from_parts(112223330002, 2).unwrap();
//! assert!(is_same_group(&cnpj, &filial));
//! assert_eq!(head_office(&cnpj), 11222333);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CNPJ value type, codec, check digits, matriz/filial relationships |
//! | `batch` | Regional partitioning and big-integer batch aggregation |
//! | `fiscal` | Nota fiscal record formatting |
//! | `registry` | Receita Federal lookup-key construction and HTTP client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "batch")]
pub mod batch;

#[cfg(feature = "fiscal")]
pub mod fiscal;

#[cfg(feature = "registry")]
pub mod registry;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

//! Receita Federal registry integration.
//!
//! Builds the numeric lookup key used by the registry endpoint, applies the
//! mod-97 check used on that path, and offers a thin async HTTP client for
//! the cadastral-status lookup.
//!
//! # Example
//!
//! ```ignore
//! use cadastro::core::parse;
//! use cadastro::registry::*;
//!
//! let cnpj = parse("11222333000139").unwrap();
//!
//! // Key construction and mod-97 check (no network)
//! assert_eq!(lookup_key(&cnpj), "11222333000139");
//! let ok = validate_registration(&cnpj);
//!
//! // Cadastral status lookup (async, requires network)
//! let status = check_status(DEFAULT_REGISTRY_URL, &cnpj).await?;
//! assert!(status.is_active());
//! ```

mod client;
mod key;

pub use client::{DEFAULT_REGISTRY_URL, RegistryError, RegistryStatus, check_status};
pub use key::{lookup_key, validate_registration};

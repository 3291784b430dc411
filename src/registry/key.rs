//! Lookup-key construction and the registry-side check-digit rule.

use crate::core::{CheckDigitScheme, Cnpj, Modulo97};

/// The path segment the registry endpoint expects: the CNPJ in canonical
/// 14-digit zero-padded form.
pub fn lookup_key(cnpj: &Cnpj) -> String {
    cnpj.to_string()
}

/// Apply the registry integration's own check rule (suffix == base mod 97).
///
/// This deliberately disagrees with the primary
/// [`TruncatingIdentity`](crate::core::TruncatingIdentity) path; the registry
/// side of the fence has always used mod 97.
pub fn validate_registration(cnpj: &Cnpj) -> bool {
    Modulo97.validate(cnpj)
}

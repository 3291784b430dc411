//! Check-digit schemes for the 2-digit CNPJ suffix.
//!
//! Two schemes circulate in legacy registry integrations and they disagree
//! for the same base, so they are kept as distinct strategies rather than
//! unified. Neither matches the official algorithm (two weighted-sum passes
//! modulo 11); a match under either scheme is not a legal guarantee.

use super::error::CnpjError;
use super::types::Cnpj;

/// A strategy for computing and verifying the 2-digit check suffix from the
/// 12-digit registration base.
pub trait CheckDigitScheme {
    /// Compute the 2-digit check value for a registration base.
    fn compute_check(&self, base: u64) -> u64;

    /// Whether the CNPJ's check suffix matches this scheme.
    ///
    /// A mismatch is an ordinary `false`, never an error.
    fn validate(&self, cnpj: &Cnpj) -> bool {
        cnpj.check_suffix() == self.compute_check(cnpj.base())
    }

    /// Build the full CNPJ for a base by appending the computed suffix.
    fn complete(&self, base: u64) -> Result<Cnpj, CnpjError> {
        Cnpj::from_parts(base, self.compute_check(base))
    }
}

/// Placeholder scheme: the check suffix is the base modulo 100.
///
/// By construction this always accepts a CNPJ assembled via
/// [`complete`](CheckDigitScheme::complete); it is not a real verification
/// of independently supplied digits. Used by the primary validation path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncatingIdentity;

impl CheckDigitScheme for TruncatingIdentity {
    fn compute_check(&self, base: u64) -> u64 {
        base % 100
    }
}

/// Mod-97 scheme: the check suffix must equal the base modulo 97.
///
/// Used only by the tax-authority integration path, never by the primary
/// validator. Its verdicts disagree with [`TruncatingIdentity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modulo97;

impl CheckDigitScheme for Modulo97 {
    fn compute_check(&self, base: u64) -> u64 {
        base % 97
    }
}

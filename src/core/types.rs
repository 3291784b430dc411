use serde::{Deserialize, Serialize};

use super::error::CnpjError;

/// Largest value representable in 14 decimal digits.
pub const MAX_CNPJ: u64 = 99_999_999_999_999;

/// Largest 12-digit registration base.
pub const MAX_BASE: u64 = 999_999_999_999;

/// A CNPJ: a 14-digit numeral composed of a 12-digit registration base
/// and a 2-digit check suffix, with `value == base * 100 + check_suffix`.
///
/// A `Cnpj` can only be obtained through its validating constructors
/// ([`Cnpj::new`], [`Cnpj::from_parts`], [`parse`](super::parse),
/// [`parse_padded`](super::parse_padded)), so every instance satisfies
/// `0 < value <= MAX_CNPJ`. Downstream operations (relationships, fiscal
/// records) rely on that and perform no re-validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Cnpj {
    value: u64,
}

impl Cnpj {
    /// Construct from the full 14-digit numeric value.
    ///
    /// Rejects zero and anything above [`MAX_CNPJ`]. Values whose canonical
    /// form has fewer than 14 digits (leading-zero CNPJs) are accepted here;
    /// the stricter bare-numeral length rule belongs to [`parse`](super::parse).
    pub fn new(value: u64) -> Result<Self, CnpjError> {
        if value == 0 {
            return Err(CnpjError::format(value, "CNPJ must be positive"));
        }
        if value > MAX_CNPJ {
            return Err(CnpjError::Range(value));
        }
        Ok(Self { value })
    }

    /// Construct from a 12-digit registration base and a 2-digit check suffix.
    pub fn from_parts(base: u64, check_suffix: u64) -> Result<Self, CnpjError> {
        if check_suffix > 99 {
            return Err(CnpjError::format(
                check_suffix,
                "check suffix must have at most 2 digits",
            ));
        }
        if base > MAX_BASE {
            return Err(CnpjError::Range(base));
        }
        Self::new(base * 100 + check_suffix)
    }

    /// The full 14-digit numeric value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The 12-digit registration base (everything except the check suffix).
    pub fn base(&self) -> u64 {
        self.value / 100
    }

    /// The 2-digit check suffix.
    pub fn check_suffix(&self) -> u64 {
        self.value % 100
    }

    /// The fiscal region code: the two leading digits of the 14-digit form.
    pub fn region(&self) -> u8 {
        (self.value / 1_000_000_000_000) as u8
    }
}

impl TryFrom<u64> for Cnpj {
    type Error = CnpjError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cnpj> for u64 {
    fn from(cnpj: Cnpj) -> u64 {
        cnpj.value
    }
}

impl std::fmt::Display for Cnpj {
    /// Canonical external form: zero-padded to 14 characters.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:014}", self.value)
    }
}

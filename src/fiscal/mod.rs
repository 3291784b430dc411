//! Nota fiscal record assembly.
//!
//! Produces the delimited text record consumed by downstream fiscal
//! processing, combining a monetary amount with the CNPJ, its registration
//! base, and the branch code. Amounts are [`Decimal`] — never floating
//! point.
//!
//! # Example
//!
//! ```rust
//! use cadastro::fiscal::nota_fiscal_record;
//! use rust_decimal::Decimal;
//!
//! let record = nota_fiscal_record(Decimal::new(15000, 2), 12345678000199).unwrap();
//! assert_eq!(record, "NF:150.00;CNPJ:12345678000199;BASE:123456780001;FILIAL:0001");
//! ```

use rust_decimal::Decimal;

use crate::core::{Cnpj, CnpjError, MAX_CNPJ, branch_code};

/// Assemble a fiscal record from an amount and a raw supplier CNPJ value.
///
/// Format: `NF:{amount};CNPJ:{14-digit zero-padded};BASE:{base};FILIAL:{4-digit zero-padded}`.
///
/// The raw value is checked against the 14-digit capacity exactly as the
/// codec checks it, failing with [`CnpjError::Range`] on overflow rather
/// than truncating.
pub fn nota_fiscal_record(amount: Decimal, cnpj_value: u64) -> Result<String, CnpjError> {
    if cnpj_value > MAX_CNPJ {
        return Err(CnpjError::Range(cnpj_value));
    }
    let base = cnpj_value / 100;
    Ok(format!(
        "NF:{amount};CNPJ:{cnpj_value:014};BASE:{base};FILIAL:{:04}",
        base % 10_000
    ))
}

/// Assemble a fiscal record for an already-validated [`Cnpj`].
///
/// Infallible: the value type's invariant makes the range check moot.
pub fn nota_fiscal_record_for(amount: Decimal, cnpj: &Cnpj) -> String {
    format!(
        "NF:{amount};CNPJ:{cnpj};BASE:{};FILIAL:{:04}",
        cnpj.base(),
        branch_code(cnpj)
    )
}

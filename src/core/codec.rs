//! Parsing and rendering of the CNPJ external representations.

use super::error::CnpjError;
use super::types::Cnpj;

/// Parse a CNPJ from a bare decimal numeral.
///
/// The input is interpreted as an unsigned integer; it is rejected if it is
/// not a well-formed non-negative numeral, if it is zero, or if its canonical
/// decimal form does not have exactly 14 digits. Because leading zeros are
/// not part of a bare integer's textual length, a CNPJ whose canonical form
/// starts with zeros fails the length rule here; use [`parse_padded`] for
/// fixed-width input that may carry leading zeros.
pub fn parse(input: &str) -> Result<Cnpj, CnpjError> {
    let input = input.trim();
    let value: u64 = input
        .parse()
        .map_err(|_| CnpjError::format(input, "not a non-negative decimal numeral"))?;
    if value == 0 {
        return Err(CnpjError::format(input, "CNPJ must be positive"));
    }
    let digits = value.ilog10() + 1;
    if digits != 14 {
        return Err(CnpjError::format(
            input,
            format!("canonical form has {digits} digits, expected 14"),
        ));
    }
    Cnpj::new(value)
}

/// Parse a fixed-width, zero-padded 14-character CNPJ.
///
/// Unlike [`parse`], leading zeros are accepted: the input must be exactly
/// 14 ASCII digits. Zero is still rejected.
pub fn parse_padded(input: &str) -> Result<Cnpj, CnpjError> {
    let input = input.trim();
    if input.len() != 14 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CnpjError::format(input, "expected exactly 14 digits"));
    }
    let value: u64 = input
        .parse()
        .map_err(|_| CnpjError::format(input, "not a decimal numeral"))?;
    if value == 0 {
        return Err(CnpjError::format(input, "CNPJ must be positive"));
    }
    Cnpj::new(value)
}

/// Render a raw value as a zero-padded 14-character decimal string.
///
/// No range validation is performed; values above
/// [`MAX_CNPJ`](super::MAX_CNPJ) simply render wider than 14 characters.
/// Validation is [`parse`]'s job.
pub fn format_cnpj(value: u64) -> String {
    format!("{value:014}")
}

/// Render a CNPJ in the conventional punctuated display form,
/// `NN.NNN.NNN/NNNN-NN`.
pub fn format_punctuated(cnpj: &Cnpj) -> String {
    let v = cnpj.value();
    format!(
        "{:02}.{:03}.{:03}/{:04}-{:02}",
        v / 1_000_000_000_000,
        (v / 1_000_000_000) % 1_000,
        (v / 1_000_000) % 1_000,
        (v / 100) % 10_000,
        v % 100
    )
}

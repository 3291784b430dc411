//! Matriz/filial relationships derived from shared base digits.
//!
//! Every CNPJ in a company group shares the head-office portion of the
//! registration base; the 4 digits that follow it identify the branch
//! (filial). All functions here are pure and trust their inputs: a [`Cnpj`]
//! can only exist validated, so no re-checking is done at this layer.

use std::collections::BTreeMap;

use super::check_digits::CheckDigitScheme;
use super::types::Cnpj;

/// The head-office (matriz) base: the registration base with the 4-digit
/// branch suffix dropped.
pub fn head_office(cnpj: &Cnpj) -> u64 {
    cnpj.base() / 10_000
}

/// The 4-digit branch (filial) code, in `0..=9999`.
pub fn branch_code(cnpj: &Cnpj) -> u16 {
    (cnpj.base() % 10_000) as u16
}

/// Whether two CNPJs belong to the same company group, i.e. share a
/// head-office base.
pub fn is_same_group(a: &Cnpj, b: &Cnpj) -> bool {
    head_office(a) == head_office(b)
}

/// Filter `candidates` down to the branches of `head`'s company group.
///
/// The head office itself is included when present in `candidates`.
pub fn branches_of(head: &Cnpj, candidates: &[Cnpj]) -> Vec<Cnpj> {
    candidates
        .iter()
        .copied()
        .filter(|c| is_same_group(head, c))
        .collect()
}

/// Validate a batch of raw CNPJ values against a check-digit scheme.
///
/// Mirrors the bulk-validation endpoint contract: every input maps to a
/// boolean, keyed by the input value. No range validation is performed;
/// the suffix/base split is taken directly from the raw value, and a
/// mismatch (or nonsense input) is just `false`.
pub fn validate_batch<S: CheckDigitScheme>(scheme: &S, values: &[u64]) -> BTreeMap<u64, bool> {
    values
        .iter()
        .map(|&v| (v, v % 100 == scheme.compute_check(v / 100)))
        .collect()
}

#![cfg(feature = "fiscal")]

use cadastro::core::{Cnpj, CnpjError, MAX_CNPJ, parse_padded};
use cadastro::fiscal::{nota_fiscal_record, nota_fiscal_record_for};
use rust_decimal_macros::dec;

#[test]
fn reference_record() {
    let record = nota_fiscal_record(dec!(150.00), 12_345_678_000_199).unwrap();
    assert_eq!(
        record,
        "NF:150.00;CNPJ:12345678000199;BASE:123456780001;FILIAL:0001"
    );
}

#[test]
fn record_zero_pads_cnpj_and_branch() {
    let cnpj = parse_padded("00987654320001").unwrap();
    let record = nota_fiscal_record_for(dec!(10), &cnpj);
    assert_eq!(record, "NF:10;CNPJ:00987654320001;BASE:9876543200;FILIAL:3200");
}

#[test]
fn record_overflow_is_rejected_not_truncated() {
    let err = nota_fiscal_record(dec!(1), MAX_CNPJ + 1).unwrap_err();
    assert!(matches!(err, CnpjError::Range(v) if v == MAX_CNPJ + 1));
}

#[test]
fn record_at_capacity_boundary() {
    assert!(nota_fiscal_record(dec!(1), MAX_CNPJ).is_ok());
}

#[test]
fn raw_and_typed_paths_agree() {
    let cnpj = Cnpj::new(11_222_333_000_181).unwrap();
    assert_eq!(
        nota_fiscal_record(dec!(2500.50), cnpj.value()).unwrap(),
        nota_fiscal_record_for(dec!(2500.50), &cnpj)
    );
}

#[test]
fn amount_rendering_uses_decimal_scale() {
    assert!(
        nota_fiscal_record(dec!(150.00), 11_222_333_000_181)
            .unwrap()
            .starts_with("NF:150.00;")
    );
    assert!(
        nota_fiscal_record(dec!(150), 11_222_333_000_181)
            .unwrap()
            .starts_with("NF:150;")
    );
}

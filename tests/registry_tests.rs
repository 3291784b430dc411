#![cfg(feature = "registry")]

use cadastro::core::{CheckDigitScheme, Cnpj, Modulo97, TruncatingIdentity, parse_padded};
use cadastro::registry::{RegistryStatus, lookup_key, validate_registration};

// Network calls against the live registry are not exercised here; only the
// pure key/check/response-shape surface is.

#[test]
fn lookup_key_is_canonical_form() {
    let cnpj = Cnpj::new(11_222_333_000_181).unwrap();
    assert_eq!(lookup_key(&cnpj), "11222333000181");
    let padded = parse_padded("00123456780001").unwrap();
    assert_eq!(lookup_key(&padded), "00123456780001");
}

#[test]
fn registration_check_follows_mod_97() {
    let cnpj = Modulo97.complete(112_223_330_001).unwrap();
    assert!(validate_registration(&cnpj));
}

#[test]
fn registration_check_disagrees_with_primary_scheme() {
    // a value the primary validator accepts is not automatically
    // acceptable to the registry path
    let cnpj = TruncatingIdentity.complete(112_223_330_001).unwrap();
    assert!(TruncatingIdentity.validate(&cnpj));
    assert!(!validate_registration(&cnpj));
}

#[test]
fn status_parses_wire_shape() {
    let status: RegistryStatus =
        serde_json::from_str(r#"{"cnpj":11222333000181,"situacao":"ATIVA"}"#).unwrap();
    assert_eq!(status.cnpj, 11_222_333_000_181);
    assert!(status.is_active());
}

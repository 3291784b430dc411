#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (i64, u32, u64)| {
    let (mantissa, scale, cnpj_value) = input;
    // Record assembly must never panic, whatever the raw value.
    let amount = Decimal::new(mantissa, scale % 29);
    let _ = cadastro::fiscal::nota_fiscal_record(amount, cnpj_value);
});

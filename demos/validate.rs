use cadastro::core::*;

fn main() {
    // Parsing (bare numerals, no network required)
    println!("=== CNPJ Parsing ===\n");

    let inputs = [
        "11222333000181",
        "00123456780001",  // leading zeros; bare path rejects
        "1222333000181",   // 13 digits
        "112223330001815", // 15 digits
        "0",
        "11.222.333/0001-81", // punctuated input is not accepted
    ];

    for input in &inputs {
        match parse(input) {
            Ok(cnpj) => println!(
                "  {input} => valid (base={}, suffix={:02}, regiao={:02})",
                cnpj.base(),
                cnpj.check_suffix(),
                cnpj.region()
            ),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    // Fixed-width parsing recovers leading-zero values
    println!("\n=== Fixed-Width Parsing ===\n");
    let padded = parse_padded("00123456780001").unwrap();
    println!("  00123456780001 => {} ({})", padded, format_punctuated(&padded));

    // Check-digit schemes
    println!("\n=== Check-Digit Schemes ===\n");

    let base = 112_223_330_001u64;
    let truncating = TruncatingIdentity.complete(base).unwrap();
    let mod97 = Modulo97.complete(base).unwrap();
    println!("  base {base}:");
    println!(
        "    truncating => {truncating} (validates: {})",
        TruncatingIdentity.validate(&truncating)
    );
    println!("    mod-97     => {mod97} (validates: {})", Modulo97.validate(&mod97));
    println!(
        "    cross-checked: truncating under mod-97 => {}",
        Modulo97.validate(&truncating)
    );

    // Matriz/filial relationships
    println!("\n=== Matriz/Filial ===\n");

    let matriz = parse("12345678000199").unwrap();
    let pool = [
        parse("12345678000199").unwrap(),
        parse("12345678000280").unwrap(),
        parse("12345678999988").unwrap(),
        parse("98765432000110").unwrap(),
    ];
    println!("  matriz {matriz} (head office base {})", head_office(&matriz));
    for cnpj in branches_of(&matriz, &pool) {
        println!("    group member {} (filial {:04})", cnpj, branch_code(&cnpj));
    }
}

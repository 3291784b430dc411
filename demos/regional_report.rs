use cadastro::batch::{process_parallel, report_csv};
use cadastro::fiscal::nota_fiscal_record;
use rust_decimal_macros::dec;

fn main() {
    // A small supplier batch spread over three fiscal regions
    let cnpjs = [
        11_222_333_000_181u64,
        11_444_555_000_199,
        22_888_999_000_177,
        22_111_000_000_144,
        35_777_666_000_155,
    ];

    println!("=== Regional Aggregation ===\n");

    let stats = process_parallel(&cnpjs).expect("non-empty batch");
    for (region, s) in &stats {
        println!(
            "  regiao {region:02}: count={} sum={} media={}",
            s.count, s.sum, s.mean
        );
    }

    println!("\n=== CSV Report ===\n");
    print!("{}", report_csv(&stats));

    println!("\n=== Fiscal Records ===\n");

    let amounts = [dec!(150.00), dec!(2500.50), dec!(99.90)];
    for (cnpj, amount) in cnpjs.iter().zip(amounts.iter().cycle()) {
        match nota_fiscal_record(*amount, *cnpj) {
            Ok(record) => println!("  {record}"),
            Err(e) => println!("  skipped {cnpj}: {e}"),
        }
    }
}

//! Property-based tests for the cadastro crate.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "batch")]

use cadastro::batch::{aggregate, partition, process, process_parallel};
use cadastro::core::*;
use num_bigint::BigUint;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any 12-digit registration base (nonzero so the assembled CNPJ is valid).
fn arb_base() -> impl Strategy<Value = u64> {
    1u64..=MAX_BASE
}

/// Any value whose canonical decimal form has exactly 14 digits.
fn arb_canonical_value() -> impl Strategy<Value = u64> {
    10_000_000_000_000u64..=MAX_CNPJ
}

/// An 8-digit head-office base plus two branch/suffix pairs.
fn arb_group_members() -> impl Strategy<Value = (u64, (u16, u64), (u16, u64))> {
    (
        1u64..=99_999_999,
        (0u16..=9999, 0u64..=99),
        (0u16..=9999, 0u64..=99),
    )
}

/// A raw batch: mostly canonical values, some garbage.
fn arb_batch() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(
        prop_oneof![
            4 => arb_canonical_value(),
            1 => any::<u64>(),
        ],
        0..200,
    )
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// complete() under the truncating scheme always validates itself, and
    /// the computed check is the base's two low digits.
    #[test]
    fn truncating_identity_always_self_consistent(base in arb_base()) {
        prop_assert_eq!(TruncatingIdentity.compute_check(base), base % 100);
        let cnpj = TruncatingIdentity.complete(base).unwrap();
        prop_assert!(TruncatingIdentity.validate(&cnpj));
        prop_assert_eq!(cnpj.value(), base * 100 + base % 100);
    }

    /// format → parse round-trips every canonical 14-digit value.
    #[test]
    fn format_parse_roundtrip(value in arb_canonical_value()) {
        let rendered = format_cnpj(value);
        prop_assert_eq!(parse(&rendered).unwrap().value(), value);
        // the fixed-width path agrees wherever the bare path succeeds
        prop_assert_eq!(parse_padded(&rendered).unwrap().value(), value);
    }

    /// Two CNPJs are in the same group iff they share the head-office base,
    /// regardless of branch and suffix digits.
    #[test]
    fn group_membership_ignores_branch_and_suffix(
        (head, (b1, s1), (b2, s2)) in arb_group_members()
    ) {
        let a = Cnpj::from_parts(head * 10_000 + u64::from(b1), s1).unwrap();
        let b = Cnpj::from_parts(head * 10_000 + u64::from(b2), s2).unwrap();
        prop_assert!(is_same_group(&a, &b));
        prop_assert_eq!(head_office(&a), head);
        prop_assert_eq!(branch_code(&a), b1);
    }

    /// Partitioning loses nothing and keys every value by its leading digits.
    #[test]
    fn partition_preserves_values(values in arb_batch()) {
        let regions = partition(&values);
        let total: usize = regions.values().map(Vec::len).sum();
        prop_assert_eq!(total, values.len());
        for (&region, bucket) in &regions {
            prop_assert!(!bucket.is_empty());
            for &v in bucket {
                prop_assert_eq!(v / 1_000_000_000_000, region);
            }
        }
    }

    /// The truncating mean satisfies mean*count <= sum < mean*count + count.
    #[test]
    fn mean_is_truncated_division(values in prop::collection::vec(any::<u64>(), 1..100)) {
        let stats = aggregate(&values).unwrap();
        let count = BigUint::from(stats.count);
        prop_assert!(&stats.mean * &count <= stats.sum);
        prop_assert!(stats.sum < &stats.mean * &count + &count);
    }

    /// Fanning regions out over worker threads changes nothing.
    #[test]
    fn parallel_equals_sequential(values in arb_batch()) {
        prop_assert_eq!(process(&values).unwrap(), process_parallel(&values).unwrap());
    }
}

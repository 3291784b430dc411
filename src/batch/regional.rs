use std::collections::BTreeMap;
use std::thread;

use num_bigint::BigUint;

use crate::core::CnpjError;

/// Aggregate statistics for one fiscal region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStats {
    /// Exact sum of all values in the region.
    pub sum: BigUint,
    /// Number of values in the region.
    pub count: usize,
    /// Truncating integer mean, `sum / count`.
    pub mean: BigUint,
}

/// Partition raw CNPJ values by fiscal region code (`value / 10^12`).
///
/// Input order is preserved within each region and duplicates are kept.
/// No validation happens here: a non-14-digit value simply lands under a
/// region code outside the conventional `0..=99` range.
pub fn partition(values: &[u64]) -> BTreeMap<u64, Vec<u64>> {
    let mut regions: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for &value in values {
        regions.entry(value / 1_000_000_000_000).or_default().push(value);
    }
    regions
}

/// Compute sum, count, and truncating mean over one region's values.
///
/// Accumulation is exact for any batch size. Fails with
/// [`CnpjError::EmptyBatch`] on an empty slice; [`partition`] never creates
/// empty buckets, but the guard holds for direct callers.
pub fn aggregate(values: &[u64]) -> Result<RegionStats, CnpjError> {
    if values.is_empty() {
        return Err(CnpjError::EmptyBatch);
    }
    let mut sum = BigUint::from(0u32);
    for &value in values {
        sum += value;
    }
    let mean = &sum / values.len();
    Ok(RegionStats {
        sum,
        count: values.len(),
        mean,
    })
}

/// Partition then aggregate every region, sequentially.
pub fn process(values: &[u64]) -> Result<BTreeMap<u64, RegionStats>, CnpjError> {
    partition(values)
        .into_iter()
        .map(|(region, bucket)| aggregate(&bucket).map(|stats| (region, stats)))
        .collect()
}

/// Partition then aggregate every region on its own worker thread.
///
/// Regions are independent, so the fan-out needs no shared mutable state;
/// the only synchronization is the join of all per-region results. Returns
/// exactly what [`process`] returns.
pub fn process_parallel(values: &[u64]) -> Result<BTreeMap<u64, RegionStats>, CnpjError> {
    let regions = partition(values);
    thread::scope(|scope| {
        let handles: Vec<_> = regions
            .iter()
            .map(|(&region, bucket)| (region, scope.spawn(move || aggregate(bucket))))
            .collect();
        handles
            .into_iter()
            .map(|(region, handle)| {
                let stats = handle.join().expect("aggregation worker panicked")?;
                Ok((region, stats))
            })
            .collect()
    })
}

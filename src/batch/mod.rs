//! Regional batch partitioning and aggregation.
//!
//! Large collections of raw CNPJ values are grouped by fiscal region (the
//! two leading digits of the 14-digit form) and summarized per region with
//! big-integer arithmetic, since a batch of externally determined size can
//! push the sum of 14-digit values past the 64-bit range.
//!
//! # Example
//!
//! ```rust
//! use cadastro::batch;
//!
//! let stats = batch::process(&[11222333000181, 11444555000199, 22888999000177]).unwrap();
//! assert_eq!(stats[&11].count, 2);
//! assert_eq!(stats[&22].count, 1);
//! ```

mod regional;
mod report;

pub use regional::{RegionStats, aggregate, partition, process, process_parallel};
pub use report::report_csv;

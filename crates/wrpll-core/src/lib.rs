//! # WRPLL Core
//!
//! Integer divider search for the WRPLL display clock generator.
//!
//! Given a target pixel clock, the search picks the `(r2, n2, p)` triplet
//! (doubled reference divider, doubled feedback divider, post divider) that
//! derives it from the 2700 MHz LC PLL while keeping the WRPLL reference and
//! VCO inside their hardware ranges.
//!
//! ## Components
//!
//! - **Budget selection** ([`budget_for_clock`]): maps a clock to the PPM
//!   deviation it tolerates.
//! - **Candidate enumeration** ([`Candidates`]): every in-range triplet, in
//!   search order.
//! - **Selection policy** ([`update_rnp`]): closest fit while over budget,
//!   highest `Ref * VCO` once within it.
//! - **Search** ([`compute_rnp`], [`try_compute_rnp`]).
//! - **Verification** ([`verify`]): reproduces the [`table`] of known-good
//!   dividers.
//!
//! ## Usage
//!
//! ```rust
//! use wrpll_core::compute_rnp;
//!
//! let d = compute_rnp(148_500_000);
//! println!("r2={} n2={} p={}", d.r2, d.n2, d.p);
//! ```
//!
//! ### Verifying the reference table
//!
//! ```rust,no_run
//! use wrpll_core::{table::WRPLL_TMDS_CLOCK_TABLE, verify::verify_table_parallel};
//!
//! let report = verify_table_parallel(WRPLL_TMDS_CLOCK_TABLE, None);
//! for mismatch in &report.mismatches {
//!     eprintln!("{}", mismatch);
//! }
//! assert!(report.is_success());
//! ```

pub mod algo;
pub mod budget;
pub mod config;
pub mod iterators;
pub mod progress;
pub mod table;
pub mod types;
pub mod verify;

// Re-export types
pub use types::{PllError, WrpllDividers};

// Re-export the search
pub use algo::{compute_rnp, try_compute_rnp, update_rnp};
pub use budget::budget_for_clock;
pub use iterators::Candidates;

use rayon::prelude::*;

/// Computes dividers for each of `clocks` in parallel.
///
/// Each search is independent, so this is a plain parallel map. Results keep
/// the input order.
///
/// # Example
///
/// ```rust
/// use wrpll_core::{compute_many_parallel, compute_rnp};
///
/// let clocks = [27_000_000, 108_000_000, 540_000_000];
/// let results = compute_many_parallel(&clocks);
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[1], compute_rnp(108_000_000));
/// ```
pub fn compute_many_parallel(clocks: &[u32]) -> Vec<WrpllDividers> {
    clocks.par_iter().map(|&clock| compute_rnp(clock)).collect()
}

/// Like [`compute_many_parallel`], but fails on the first clock that
/// [`try_compute_rnp`] rejects instead of returning the sentinel.
///
/// # Errors
///
/// Returns the [`PllError`] of a rejected clock.
pub fn try_compute_many_parallel(clocks: &[u32]) -> Result<Vec<WrpllDividers>, PllError> {
    clocks.par_iter().map(|&clock| try_compute_rnp(clock)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_many_parallel_empty() {
        assert!(compute_many_parallel(&[]).is_empty());
    }

    #[test]
    fn compute_many_parallel_keeps_order() {
        let clocks = [270_000_000, 19_750_000, 540_000_000, 27_000_000];
        let results = compute_many_parallel(&clocks);
        let sequential: Vec<WrpllDividers> = clocks.iter().map(|&c| compute_rnp(c)).collect();
        assert_eq!(results, sequential);
        assert_eq!(results[2], WrpllDividers::BYPASS);
    }

    #[test]
    fn try_compute_many_parallel_matches_infallible() {
        let clocks = [270_000_000, 19_750_000, 540_000_000, 27_000_000];
        assert_eq!(
            try_compute_many_parallel(&clocks),
            Ok(compute_many_parallel(&clocks))
        );
    }

    #[test]
    fn try_compute_many_parallel_rejects_zero() {
        assert_eq!(
            try_compute_many_parallel(&[27_000_000, 0, 108_000_000]),
            Err(PllError::ZeroClock)
        );
    }

    #[test]
    fn compute_many_parallel_repeated_clock() {
        let results = compute_many_parallel(&[74_250_000; 4]);
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}

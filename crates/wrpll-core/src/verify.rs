//! Verification of the divider search against the reference table.
//!
//! Every entry is checked; a mismatch is recorded, never fatal, so one run
//! reports every differing clock. Callers print the report.

use std::fmt::Display;

use log::debug;
use rayon::prelude::*;

use crate::algo::compute_rnp;
use crate::progress::{ProgressReporter, ProgressTracker};
use crate::table::TmdsClock;
use crate::WrpllDividers;

/// A table entry whose computed dividers differ from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Pixel clock in Hz.
    pub clock_hz: u32,
    /// Dividers from the reference table.
    pub expected: WrpllDividers,
    /// Dividers from the search.
    pub computed: WrpllDividers,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Computed value differs for {} Hz:\n  Reference: {}\n  Computed:  {}",
            self.clock_hz, self.expected, self.computed
        )
    }
}

/// Outcome of checking a set of table entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of entries checked.
    pub checked: usize,
    /// Entries that differ, in table order.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// Returns true if every checked entry matched.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks a single table entry.
///
/// # Example
/// ```
/// use wrpll_core::{table, verify::check_entry};
///
/// let entry = table::lookup(74_250_000).unwrap();
/// assert!(check_entry(entry).is_ok());
/// ```
pub fn check_entry(entry: &TmdsClock) -> Result<(), Mismatch> {
    let computed = compute_rnp(entry.clock_hz);
    if computed == entry.dividers {
        Ok(())
    } else {
        let mismatch = Mismatch {
            clock_hz: entry.clock_hz,
            expected: entry.dividers,
            computed,
        };
        debug!("{}", mismatch);
        Err(mismatch)
    }
}

/// Checks every entry of `table` on the current thread.
pub fn verify_table(table: &[TmdsClock], reporter: Option<&ProgressReporter>) -> VerifyReport {
    let tracker = ProgressTracker::new(reporter, table.len());
    let mismatches = table
        .iter()
        .filter_map(|entry| {
            let result = check_entry(entry).err();
            tracker.step();
            result
        })
        .collect();

    VerifyReport {
        checked: table.len(),
        mismatches,
    }
}

/// Checks every entry of `table` in parallel using Rayon.
///
/// Searches share no state, so entries are split freely across the pool.
/// Mismatches keep table order.
pub fn verify_table_parallel(
    table: &[TmdsClock],
    reporter: Option<&ProgressReporter>,
) -> VerifyReport {
    let tracker = ProgressTracker::new(reporter, table.len());
    let mismatches = table
        .par_iter()
        .filter_map(|entry| {
            let result = check_entry(entry).err();
            tracker.step();
            result
        })
        .collect();

    VerifyReport {
        checked: table.len(),
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::WRPLL_TMDS_CLOCK_TABLE;

    fn entry(clock_hz: u32, r2: u16, n2: u16, p: u16) -> TmdsClock {
        TmdsClock {
            clock_hz,
            dividers: WrpllDividers { p, n2, r2 },
        }
    }

    #[test]
    fn mismatch_message() {
        let m = Mismatch {
            clock_hz: 27_000_000,
            expected: WrpllDividers {
                p: 30,
                n2: 21,
                r2: 14,
            },
            computed: WrpllDividers {
                p: 28,
                n2: 21,
                r2: 15,
            },
        };
        assert_eq!(
            m.to_string(),
            "Computed value differs for 27000000 Hz:\n  Reference: (14,21,30)\n  Computed:  (15,21,28)"
        );
    }

    #[test]
    fn check_entry_reports_both_triplets() {
        let wrong = entry(27_000_000, 14, 21, 28);
        let m = check_entry(&wrong).unwrap_err();
        assert_eq!(m.clock_hz, 27_000_000);
        assert_eq!(m.expected, wrong.dividers);
        assert_eq!(
            m.computed,
            WrpllDividers {
                p: 30,
                n2: 21,
                r2: 14
            }
        );
    }

    #[test]
    fn bypass_entry_verifies() {
        assert!(check_entry(&entry(540_000_000, 2, 2, 1)).is_ok());
    }

    #[test]
    fn verify_continues_after_mismatch() {
        let table = [
            entry(19_750_000, 18, 25, 38),
            entry(20_000_000, 1, 1, 2),
            entry(21_000_000, 15, 21, 36),
            entry(21_912_000, 1, 1, 2),
        ];
        let report = verify_table(&table, None);
        assert_eq!(report.checked, 4);
        assert!(!report.is_success());
        let clocks: Vec<u32> = report.mismatches.iter().map(|m| m.clock_hz).collect();
        assert_eq!(clocks, vec![20_000_000, 21_912_000]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut table: Vec<TmdsClock> = WRPLL_TMDS_CLOCK_TABLE[..40].to_vec();
        table[3].dividers.p += 2;
        table[17].dividers.n2 += 1;

        let seq = verify_table(&table, None);
        let par = verify_table_parallel(&table, None);
        assert_eq!(seq, par);
        assert_eq!(seq.mismatches.len(), 2);
    }

    #[test]
    fn empty_table_succeeds() {
        let report = verify_table_parallel(&[], None);
        assert_eq!(report.checked, 0);
        assert!(report.is_success());
    }
}

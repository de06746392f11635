//! Divider search for the WRPLL.
//!
//! The search walks every candidate of [`Candidates`](crate::Candidates) and
//! folds it into a running best with [`update_rnp`]. The candidate space is
//! small (about 177k triplets), so the exhaustive walk is the whole
//! algorithm; what matters is that the fold reproduces the reference table
//! bit for bit, which is why everything stays in `u64` integers.
//!
//! # Bounds
//!
//! - **r2**: `LC_FREQ * 2 / REF_MAX < r2 <= LC_FREQ * 2 / REF_MIN`, keeping the
//!   reference `LC_FREQ / R` in `[REF_MIN, REF_MAX]`.
//! - **n2**: `VCO_MIN * r2 / LC_FREQ < n2 <= VCO_MAX * r2 / LC_FREQ`, keeping
//!   the VCO `N * LC_FREQ / R` in `[VCO_MIN, VCO_MAX]`.
//! - **p**: even post dividers from `P_MIN` to `P_MAX`.

use log::{debug, trace};

use crate::budget::budget_for_clock;
use crate::config::{bypass, HZ_PER_FREQ2K};
use crate::iterators::Candidates;
use crate::{PllError, WrpllDividers};

pub mod update;

pub use update::update_rnp;

/// Computes the WRPLL dividers for a pixel clock in Hz.
///
/// The clock is truncated to freq2k units (100 Hz) before the search, exactly
/// as the reference table was derived. A freq2k of 5,400,000 (540 MHz) skips
/// the WRPLL and returns [`WrpllDividers::BYPASS`].
///
/// Returns the zero sentinel triplet if no candidate was examined. Use
/// [`try_compute_rnp`] to get that case as an error.
///
/// # Example
/// ```
/// use wrpll_core::compute_rnp;
///
/// let d = compute_rnp(108_000_000);
/// assert_eq!((d.r2, d.n2, d.p), (15, 24, 8));
/// ```
pub fn compute_rnp(clock_hz: u32) -> WrpllDividers {
    search(clock_hz).unwrap_or_default()
}

/// Divider search with explicit error handling.
///
/// # Errors
/// * `PllError::ZeroClock` if `clock_hz` is 0.
/// * `PllError::NoCandidate` if the search space yielded nothing.
///
/// # Example
/// ```
/// use wrpll_core::{try_compute_rnp, PllError};
///
/// assert!(try_compute_rnp(27_000_000).is_ok());
/// assert_eq!(try_compute_rnp(0), Err(PllError::ZeroClock));
/// ```
pub fn try_compute_rnp(clock_hz: u32) -> Result<WrpllDividers, PllError> {
    if clock_hz == 0 {
        return Err(PllError::ZeroClock);
    }
    search(clock_hz).ok_or(PllError::NoCandidate { clock_hz })
}

fn search(clock_hz: u32) -> Option<WrpllDividers> {
    let freq2k = u64::from(clock_hz / HZ_PER_FREQ2K);

    if freq2k == bypass::FREQ2K {
        trace!("{} Hz: bypassing WRPLL, passing LC PLL through", clock_hz);
        return Some(WrpllDividers::BYPASS);
    }

    let budget = budget_for_clock(clock_hz);
    let best = search_candidates(freq2k, budget, Candidates::new());

    match best {
        Some(d) => debug!(
            "{} Hz (freq2k {}, budget {}): r2={} n2={} p={}",
            clock_hz, freq2k, budget, d.r2, d.n2, d.p
        ),
        None => debug!("{} Hz: no candidate in search space", clock_hz),
    }
    best
}

/// Folds `candidates` into the best triplet for `freq2k` under `budget`.
pub(crate) fn search_candidates<I>(freq2k: u64, budget: u32, candidates: I) -> Option<WrpllDividers>
where
    I: IntoIterator<Item = WrpllDividers>,
{
    let mut best = None;
    for candidate in candidates {
        update_rnp(freq2k, budget, candidate, &mut best);
    }
    best
}

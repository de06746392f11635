use std::iter::{FusedIterator, StepBy};
use std::ops::RangeInclusive;

use crate::config::{lc::LC_FREQ, limits, post_divider};
use crate::WrpllDividers;

// ============================================================================
// Divider Bounds
// ============================================================================

/// Doubled reference dividers keeping the WRPLL reference in `[REF_MIN, REF_MAX]`.
///
/// `LC_FREQ * 2 / REF_MAX < r2 <= LC_FREQ * 2 / REF_MIN`
#[inline]
pub fn r2_range() -> RangeInclusive<u16> {
    limits::R2_MIN..=limits::R2_MAX
}

/// Doubled feedback dividers keeping the VCO in `[VCO_MIN, VCO_MAX]` for `r2`.
///
/// `VCO_MIN * r2 / LC_FREQ < n2 <= VCO_MAX * r2 / LC_FREQ`
#[inline]
pub fn n2_range(r2: u16) -> RangeInclusive<u16> {
    let r2 = u64::from(r2);
    // Both bounds are below 200 for any r2 in r2_range().
    let first = limits::VCO_MIN * r2 / LC_FREQ + 1;
    let last = limits::VCO_MAX * r2 / LC_FREQ;
    (first as u16)..=(last as u16)
}

/// Post dividers `P_MIN, P_MIN + P_INC, ..., P_MAX`.
#[inline]
pub fn post_dividers() -> StepBy<RangeInclusive<u16>> {
    (post_divider::P_MIN..=post_divider::P_MAX).step_by(usize::from(post_divider::P_INC))
}

// ============================================================================
// Lazy Candidate Iterator
// ============================================================================

/// Lazy iterator over every `(r2, n2, p)` candidate of the search space.
///
/// Candidates come out in nested order: r2 ascending, then n2 ascending for
/// that r2, then p ascending. The selection policy is order sensitive, so
/// this order is part of the contract.
///
/// # Example
/// ```
/// use wrpll_core::Candidates;
///
/// let first = Candidates::new().next().unwrap();
/// assert_eq!((first.r2, first.n2, first.p), (14, 13, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Candidates {
    r2: u16,
    n2: u16,
    n2_last: u16,
    p: u16,
}

impl Candidates {
    /// Creates an iterator positioned on the first candidate.
    pub fn new() -> Self {
        let r2 = limits::R2_MIN;
        let n2 = n2_range(r2);
        Self {
            r2,
            n2: *n2.start(),
            n2_last: *n2.end(),
            p: post_divider::P_MIN,
        }
    }

    /// Moves to the first n2 of the next r2.
    fn advance_r2(&mut self) {
        self.r2 += 1;
        if self.r2 <= limits::R2_MAX {
            let n2 = n2_range(self.r2);
            self.n2 = *n2.start();
            self.n2_last = *n2.end();
        }
        self.p = post_divider::P_MIN;
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Candidates {
    type Item = WrpllDividers;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.r2 > limits::R2_MAX {
                return None;
            }
            if self.n2 > self.n2_last {
                self.advance_r2();
                continue;
            }
            if self.p > post_divider::P_MAX {
                self.n2 += 1;
                self.p = post_divider::P_MIN;
                continue;
            }

            let candidate = WrpllDividers {
                p: self.p,
                n2: self.n2,
                r2: self.r2,
            };
            self.p += post_divider::P_INC;
            return Some(candidate);
        }
    }
}

impl FusedIterator for Candidates {}

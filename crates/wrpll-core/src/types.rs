use std::fmt::Display;

use crate::config::{lc, limits, post_divider, HZ_PER_FREQ2K};
use crate::iterators::n2_range;

/// Error type for divider searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PllError {
    /// A zero target clock has no relative error to budget against.
    ZeroClock,
    /// The candidate space was empty, leaving the sentinel triplet.
    NoCandidate { clock_hz: u32 },
}

impl Display for PllError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PllError::ZeroClock => write!(f, "Target clock must be non-zero"),
            PllError::NoCandidate { clock_hz } => {
                write!(f, "No valid divider triplet for {} Hz", clock_hz)
            }
        }
    }
}

impl std::error::Error for PllError {}

// ============================================================================
// Divider Triplet
// ============================================================================

/// WRPLL divider triplet.
///
/// `r2` and `n2` are the reference and feedback dividers doubled, so that
/// half-integer dividers stay in integer arithmetic. `p` is the post divider.
///
/// The all-zero value (`Default`) is the sentinel returned by a search that
/// never saw a candidate; it is not a usable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrpllDividers {
    /// Post divider.
    pub p: u16,
    /// Feedback divider, doubled.
    pub n2: u16,
    /// Reference divider, doubled.
    pub r2: u16,
}

impl WrpllDividers {
    /// Triplet programmed for the 540 MHz bypass path.
    pub const BYPASS: WrpllDividers = WrpllDividers {
        p: 1,
        n2: 2,
        r2: 2,
    };

    /// Returns true for the zero triplet left by an empty search.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.p == 0
    }

    /// Dividers widened for the search arithmetic, as `(p, n2, r2)`.
    #[inline]
    pub(crate) fn widened(&self) -> (u64, u64, u64) {
        (u64::from(self.p), u64::from(self.n2), u64::from(self.r2))
    }

    /// Output clock in Hz produced by this triplet.
    ///
    /// Same relation the search compares against: `LC_FREQ_2K * n2 / (p * r2)`
    /// in freq2k units.
    pub fn output_hz(&self) -> f64 {
        let (p, n2, r2) = self.widened();
        if p == 0 || r2 == 0 {
            return 0.0;
        }
        (lc::LC_FREQ_2K * u64::from(HZ_PER_FREQ2K) * n2) as f64 / (p * r2) as f64
    }

    /// Relative deviation of the output clock from `clock_hz`, in PPM.
    pub fn deviation_ppm(&self, clock_hz: u32) -> f64 {
        if clock_hz == 0 {
            return 0.0;
        }
        let target = f64::from(clock_hz);
        (self.output_hz() - target) * 1e6 / target
    }

    /// Reference frequency seen by the WRPLL, in MHz.
    pub fn ref_mhz(&self) -> f64 {
        if self.r2 == 0 {
            return 0.0;
        }
        (lc::LC_FREQ * 2) as f64 / f64::from(self.r2)
    }

    /// VCO frequency, in MHz.
    pub fn vco_mhz(&self) -> f64 {
        if self.r2 == 0 {
            return 0.0;
        }
        (lc::LC_FREQ * u64::from(self.n2)) as f64 / f64::from(self.r2)
    }

    /// Returns true if every divider lies inside the searched bounds.
    ///
    /// The bypass triplet is outside them by construction.
    pub fn is_within_limits(&self) -> bool {
        (limits::R2_MIN..=limits::R2_MAX).contains(&self.r2)
            && n2_range(self.r2).contains(&self.n2)
            && (post_divider::P_MIN..=post_divider::P_MAX).contains(&self.p)
            && (self.p - post_divider::P_MIN) % post_divider::P_INC == 0
    }
}

impl Display for WrpllDividers {
    /// Formats as `(r2,n2,p)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.r2, self.n2, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sentinel() {
        assert!(WrpllDividers::default().is_sentinel());
        assert!(!WrpllDividers::BYPASS.is_sentinel());
    }

    #[test]
    fn bypass_outputs_540_mhz() {
        assert_eq!(WrpllDividers::BYPASS.output_hz(), 540_000_000.0);
        assert!(!WrpllDividers::BYPASS.is_within_limits());
    }

    #[test]
    fn output_and_stage_frequencies() {
        let d = WrpllDividers {
            p: 2,
            n2: 14,
            r2: 14,
        };
        assert_eq!(d.output_hz(), 270_000_000.0);
        assert_eq!(d.deviation_ppm(270_000_000), 0.0);
        assert!((d.ref_mhz() - 385.714).abs() < 1e-3);
        assert_eq!(d.vco_mhz(), 2700.0);
        assert!(d.is_within_limits());
    }

    #[test]
    fn sentinel_has_no_output() {
        let d = WrpllDividers::default();
        assert_eq!(d.output_hz(), 0.0);
        assert_eq!(d.ref_mhz(), 0.0);
        assert!(!d.is_within_limits());
    }

    #[test]
    fn odd_post_divider_is_out_of_limits() {
        let d = WrpllDividers {
            p: 3,
            n2: 14,
            r2: 14,
        };
        assert!(!d.is_within_limits());
    }

    #[test]
    fn display_is_r2_n2_p() {
        let d = WrpllDividers {
            p: 38,
            n2: 25,
            r2: 18,
        };
        assert_eq!(d.to_string(), "(18,25,38)");
    }

    #[test]
    fn error_messages() {
        assert_eq!(PllError::ZeroClock.to_string(), "Target clock must be non-zero");
        assert_eq!(
            PllError::NoCandidate { clock_hz: 42 }.to_string(),
            "No valid divider triplet for 42 Hz"
        );
    }
}

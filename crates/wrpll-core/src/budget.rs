//! Error budget classification of target clocks.
//!
//! The budget is the PPM deviation a candidate may have before the search
//! stops favoring signal quality and starts chasing the exact clock. Clocks
//! are classified by exact equality on the Hz value; anything unlisted gets
//! [`budget::DEFAULT`](crate::config::budget::DEFAULT).

use crate::config::budget::DEFAULT;

/// Returns the error budget for `clock_hz`.
///
/// Total over all inputs. The result is always one of
/// [`budget::TIERS`](crate::config::budget::TIERS).
///
/// # Example
/// ```
/// use wrpll_core::budget_for_clock;
///
/// assert_eq!(budget_for_clock(148_500_000), 0);
/// assert_eq!(budget_for_clock(270_000_000), 4000);
/// assert_eq!(budget_for_clock(65_000_000), 1000);
/// ```
pub fn budget_for_clock(clock_hz: u32) -> u32 {
    match clock_hz {
        // Standard CEA/DMT clocks and their 1.001 variants must be exact.
        25_175_000 | 25_200_000 | 27_000_000 | 27_027_000 | 37_762_500 | 37_800_000
        | 40_500_000 | 40_541_000 | 54_000_000 | 54_054_000 | 59_341_000 | 59_400_000
        | 72_000_000 | 74_176_000 | 74_250_000 | 81_000_000 | 81_081_000 | 89_012_000
        | 89_100_000 | 108_000_000 | 108_108_000 | 111_264_000 | 111_375_000
        | 148_352_000 | 148_500_000 | 162_000_000 | 162_162_000 | 222_525_000
        | 222_750_000 | 296_703_000 | 297_000_000 => 0,
        233_500_000 | 245_250_000 | 247_750_000 | 253_250_000 | 298_000_000 => 1500,
        169_128_000 | 169_500_000 | 179_500_000 | 202_000_000 => 2000,
        256_250_000 | 262_500_000 | 270_000_000 | 272_500_000 | 273_750_000
        | 280_750_000 | 281_250_000 | 286_000_000 | 291_750_000 => 4000,
        267_250_000 | 268_500_000 => 5000,
        _ => DEFAULT,
    }
}

//! Fixed hardware constants for the WRPLL divider search.
//!
//! This module centralizes every constant the search depends on so that the
//! bounds derivation, the selection policy and the verification harness all
//! agree on the same configuration.
//!
//! # Units
//!
//! Frequencies of the PLL stages (`LC_FREQ`, `REF_*`, `VCO_*`) are in MHz.
//! Target clocks enter the search in units of 100 Hz ("freq2k"), obtained by
//! truncating division of the Hz value.

/// Number of Hz in one freq2k unit.
pub const HZ_PER_FREQ2K: u32 = 100;

/// LC PLL, the fixed upstream reference of the WRPLL.
pub mod lc {
    /// LC PLL frequency in MHz.
    pub const LC_FREQ: u64 = 2700;

    /// LC PLL frequency scaled to compare against freq2k values.
    ///
    /// `LC_FREQ_2K * n2 / (p * r2)` is the output clock in freq2k units.
    pub const LC_FREQ_2K: u64 = LC_FREQ * 2000;
}

/// Post divider sequence.
pub mod post_divider {
    /// Smallest post divider.
    pub const P_MIN: u16 = 2;

    /// Largest post divider.
    pub const P_MAX: u16 = 64;

    /// Post divider step; only even dividers are programmed.
    pub const P_INC: u16 = 2;
}

/// Constraints for PLL good behavior.
pub mod limits {
    use super::lc::LC_FREQ;

    /// Lowest reference frequency seen by the WRPLL, in MHz.
    pub const REF_MIN: u64 = 48;

    /// Highest reference frequency seen by the WRPLL, in MHz.
    pub const REF_MAX: u64 = 400;

    /// Lowest VCO frequency, in MHz.
    pub const VCO_MIN: u64 = 2400;

    /// Highest VCO frequency, in MHz.
    pub const VCO_MAX: u64 = 4800;

    /// First doubled reference divider keeping `LC_FREQ / (r2 / 2) <= REF_MAX`.
    pub const R2_MIN: u16 = (LC_FREQ * 2 / REF_MAX + 1) as u16;

    /// Last doubled reference divider keeping `LC_FREQ / (r2 / 2) >= REF_MIN`.
    pub const R2_MAX: u16 = (LC_FREQ * 2 / REF_MIN) as u16;
}

/// Error budget tiers.
pub mod budget {
    /// Budget for any clock not listed in a tier.
    pub const DEFAULT: u32 = 1000;

    /// Every value the budget selector can return.
    pub const TIERS: [u32; 6] = [0, 1000, 1500, 2000, 4000, 5000];

    /// Scale applied to the absolute error so the comparison reads as PPM.
    pub const PPM_SCALE: u64 = 1_000_000;
}

/// Bypass path for the 540 MHz pixel clock.
pub mod bypass {
    /// freq2k value that skips the WRPLL and passes the LC PLL through.
    pub const FREQ2K: u64 = 5_400_000;
}

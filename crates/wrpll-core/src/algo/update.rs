use crate::config::{budget::PPM_SCALE, lc::LC_FREQ_2K};
use crate::WrpllDividers;

/// Folds `candidate` into the running best triplet for `freq2k`.
///
/// `best` is `None` until the first candidate, which is adopted as is.
///
/// # Selection Policy
///
/// The output clock is `LC_FREQ_2K * n2 / (p * r2)` in freq2k units, so the
/// relative deviation in PPM is
///
/// $$\delta = 10^6 \cdot \frac{|freq2k \cdot p \cdot r2 - LC\_FREQ\_2K \cdot n2|}{freq2k \cdot p \cdot r2}$$
///
/// and a triplet is within budget when $\delta \le budget$. Both sides are
/// multiplied out so the test stays in integers:
///
/// - both over budget: keep the closer one;
/// - only the current best over budget: take the candidate;
/// - only the candidate over budget: keep the best;
/// - both within budget: maximize `Ref * VCO`, that is `n2 / r2^2`.
///
/// Ties always keep the current best, so earlier candidates win.
///
/// # Example
/// ```
/// use wrpll_core::{update_rnp, WrpllDividers};
///
/// let mut best = None;
/// let exact = WrpllDividers { p: 2, n2: 14, r2: 14 };
/// update_rnp(2_700_000, 1000, exact, &mut best);
/// assert_eq!(best, Some(exact));
/// ```
pub fn update_rnp(
    freq2k: u64,
    budget: u32,
    candidate: WrpllDividers,
    best: &mut Option<WrpllDividers>,
) {
    // No best (r2, n2, p) yet
    let Some(current) = *best else {
        *best = Some(candidate);
        return;
    };

    let budget = u64::from(budget);
    let (p, n2, r2) = candidate.widened();
    let (best_p, best_n2, best_r2) = current.widened();

    let a = freq2k * budget * p * r2;
    let b = freq2k * budget * best_p * best_r2;
    let diff = (freq2k * p * r2).abs_diff(LC_FREQ_2K * n2);
    let diff_best = (freq2k * best_p * best_r2).abs_diff(LC_FREQ_2K * best_n2);
    let c = PPM_SCALE * diff;
    let d = PPM_SCALE * diff_best;

    let replace = match (a < c, b < d) {
        // Both above the budget: pick the closer.
        (true, true) => best_p * best_r2 * diff < p * r2 * diff_best,
        (false, true) => true,
        (true, false) => false,
        // Both within the budget: pick the higher n2 / r2^2.
        (false, false) => n2 * best_r2 * best_r2 > best_n2 * r2 * r2,
    };

    if replace {
        *best = Some(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 270 MHz in freq2k units.
    const FREQ2K_270: u64 = 2_700_000;

    fn rnp(r2: u16, n2: u16, p: u16) -> WrpllDividers {
        WrpllDividers { p, n2, r2 }
    }

    fn run(budget: u32, best: WrpllDividers, candidate: WrpllDividers) -> WrpllDividers {
        let mut slot = Some(best);
        update_rnp(FREQ2K_270, budget, candidate, &mut slot);
        slot.unwrap()
    }

    #[test]
    fn first_candidate_is_adopted() {
        let mut best = None;
        // Wildly off target, still adopted.
        update_rnp(FREQ2K_270, 0, rnp(112, 199, 64), &mut best);
        assert_eq!(best, Some(rnp(112, 199, 64)));
    }

    #[test]
    fn both_within_budget_prefers_higher_n2_over_r2_squared() {
        // Both exact: 2 * n2 == p * r2.
        let high = rnp(14, 14, 2); // 14 / 196
        let low = rnp(28, 28, 2); // 28 / 784
        assert_eq!(run(1000, low, high), high);
        assert_eq!(run(1000, high, low), high);
    }

    #[test]
    fn both_within_budget_tie_keeps_best() {
        // Both exact with identical n2 / r2^2: 14 / 14^2 == 56 / 28^2.
        let first = rnp(14, 14, 2);
        let second = rnp(28, 56, 4);
        let mut slot = Some(first);
        update_rnp(FREQ2K_270, 1000, second, &mut slot);
        assert_eq!(slot, Some(first));
    }

    #[test]
    fn in_budget_candidate_replaces_out_of_budget_best() {
        let within = rnp(28, 28, 2);
        let over = rnp(14, 15, 2); // ~7% off
        // The within-budget one has the lower n2 / r2^2 ratio.
        assert_eq!(run(1000, over, within), within);
        assert_eq!(run(5000, over, within), within);
    }

    #[test]
    fn out_of_budget_candidate_never_replaces_in_budget_best() {
        let within = rnp(28, 28, 2);
        let over = rnp(14, 15, 2);
        assert_eq!(run(1000, within, over), within);
    }

    #[test]
    fn both_over_budget_prefers_closer() {
        let closer = rnp(14, 15, 2); // diff 5.4e6 on 75.6e6
        let farther = rnp(14, 16, 2); // diff 10.8e6 on 75.6e6
        assert_eq!(run(1000, farther, closer), closer);
        assert_eq!(run(1000, closer, farther), closer);
    }

    #[test]
    fn both_over_budget_equal_error_keeps_best() {
        let above = rnp(14, 15, 2); // output above target
        let below = rnp(14, 13, 2); // output below target, same distance
        assert_eq!(run(1000, above, below), above);
        assert_eq!(run(1000, below, above), below);
    }

    #[test]
    fn zero_budget_accepts_only_exact() {
        let exact = rnp(28, 28, 2);
        // 1 freq2k unit off still counts as over budget at 0 PPM.
        let mut slot = Some(rnp(14, 15, 2));
        update_rnp(FREQ2K_270, 0, exact, &mut slot);
        assert_eq!(slot, Some(exact));

        let mut slot = Some(exact);
        update_rnp(FREQ2K_270 + 1, 0, rnp(14, 14, 2), &mut slot);
        // Neither is exact for 270.0001 MHz; the same-distance tie keeps best.
        assert_eq!(slot, Some(exact));
    }

    #[test]
    fn budget_threshold_is_inclusive() {
        // 625 MHz with (r2=16, n2=37, p=2): output 624.375 MHz, exactly 1000 PPM low.
        let freq2k: u64 = 6_250_000;
        let on_threshold = rnp(16, 37, 2);
        let diff = (freq2k * 32).abs_diff(LC_FREQ_2K * 37);
        assert_eq!(PPM_SCALE * diff, freq2k * 1000 * 32);

        // On the threshold counts as within budget, so it beats an over-budget best
        // that has the higher n2 / r2^2.
        let mut slot = Some(rnp(16, 40, 2));
        update_rnp(freq2k, 1000, on_threshold, &mut slot);
        assert_eq!(slot, Some(on_threshold));

        // One PPM tighter and it is over budget: the closer of the two wins.
        let mut slot = Some(rnp(16, 40, 2));
        update_rnp(freq2k, 999, on_threshold, &mut slot);
        assert_eq!(slot, Some(on_threshold));
        let mut slot = Some(on_threshold);
        update_rnp(freq2k, 999, rnp(16, 40, 2), &mut slot);
        assert_eq!(slot, Some(on_threshold));
    }
}

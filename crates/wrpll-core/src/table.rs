//! Reference WRPLL divider table for TMDS pixel clocks.
//!
//! Known-good `(p, n2, r2)` values for each clock, used to check the search
//! against. The table is sorted by clock with no duplicates, which
//! [`lookup`] relies on.

use crate::WrpllDividers;

/// Reference dividers for one pixel clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmdsClock {
    /// Pixel clock in Hz.
    pub clock_hz: u32,
    /// Expected dividers.
    pub dividers: WrpllDividers,
}

/// Table row in `(clock, p, n2, r2)` column order.
const fn tmds(clock_hz: u32, p: u16, n2: u16, r2: u16) -> TmdsClock {
    TmdsClock {
        clock_hz,
        dividers: WrpllDividers { p, n2, r2 },
    }
}

/// Finds the reference entry for `clock_hz`.
///
/// # Example
/// ```
/// use wrpll_core::table::lookup;
///
/// let entry = lookup(27_000_000).unwrap();
/// assert_eq!(entry.dividers.p, 30);
/// assert!(lookup(27_000_001).is_none());
/// ```
pub fn lookup(clock_hz: u32) -> Option<&'static TmdsClock> {
    WRPLL_TMDS_CLOCK_TABLE
        .binary_search_by_key(&clock_hz, |entry| entry.clock_hz)
        .ok()
        .map(|index| &WRPLL_TMDS_CLOCK_TABLE[index])
}

/// WRPLL dividers for every supported TMDS clock, sorted by clock.
#[rustfmt::skip]
pub static WRPLL_TMDS_CLOCK_TABLE: &[TmdsClock] = &[
    tmds(19_750_000, 38, 25, 18),
    tmds(20_000_000, 48, 32, 18),
    tmds(21_000_000, 36, 21, 15),
    tmds(21_912_000, 42, 29, 17),
    tmds(22_000_000, 36, 22, 15),
    tmds(23_000_000, 36, 23, 15),
    tmds(23_500_000, 40, 40, 23),
    tmds(23_750_000, 26, 16, 14),
    tmds(24_000_000, 36, 24, 15),
    tmds(25_000_000, 36, 25, 15),
    tmds(25_175_000, 26, 40, 33),
    tmds(25_200_000, 30, 21, 15),
    tmds(26_000_000, 36, 26, 15),
    tmds(27_000_000, 30, 21, 14),
    tmds(27_027_000, 18, 100, 111),
    tmds(27_500_000, 30, 29, 19),
    tmds(28_000_000, 34, 30, 17),
    tmds(28_320_000, 26, 30, 22),
    tmds(28_322_000, 32, 42, 25),
    tmds(28_750_000, 24, 23, 18),
    tmds(29_000_000, 30, 29, 18),
    tmds(29_750_000, 32, 30, 17),
    tmds(30_000_000, 30, 25, 15),
    tmds(30_750_000, 30, 41, 24),
    tmds(31_000_000, 30, 31, 18),
    tmds(31_500_000, 30, 28, 16),
    tmds(32_000_000, 30, 32, 18),
    tmds(32_500_000, 28, 32, 19),
    tmds(33_000_000, 24, 22, 15),
    tmds(34_000_000, 28, 30, 17),
    tmds(35_000_000, 26, 32, 19),
    tmds(35_500_000, 24, 30, 19),
    tmds(36_000_000, 26, 26, 15),
    tmds(36_750_000, 26, 46, 26),
    tmds(37_000_000, 24, 23, 14),
    tmds(37_762_500, 22, 40, 26),
    tmds(37_800_000, 20, 21, 15),
    tmds(38_000_000, 24, 27, 16),
    tmds(38_250_000, 24, 34, 20),
    tmds(39_000_000, 24, 26, 15),
    tmds(40_000_000, 24, 32, 18),
    tmds(40_500_000, 20, 21, 14),
    tmds(40_541_000, 22, 147, 89),
    tmds(40_750_000, 18, 19, 14),
    tmds(41_000_000, 16, 17, 14),
    tmds(41_500_000, 22, 44, 26),
    tmds(41_540_000, 22, 44, 26),
    tmds(42_000_000, 18, 21, 15),
    tmds(42_500_000, 22, 45, 26),
    tmds(43_000_000, 20, 43, 27),
    tmds(43_163_000, 20, 24, 15),
    tmds(44_000_000, 18, 22, 15),
    tmds(44_900_000, 20, 108, 65),
    tmds(45_000_000, 20, 25, 15),
    tmds(45_250_000, 20, 52, 31),
    tmds(46_000_000, 18, 23, 15),
    tmds(46_750_000, 20, 45, 26),
    tmds(47_000_000, 20, 40, 23),
    tmds(48_000_000, 18, 24, 15),
    tmds(49_000_000, 18, 49, 30),
    tmds(49_500_000, 16, 22, 15),
    tmds(50_000_000, 18, 25, 15),
    tmds(50_500_000, 18, 32, 19),
    tmds(51_000_000, 18, 34, 20),
    tmds(52_000_000, 18, 26, 15),
    tmds(52_406_000, 14, 34, 25),
    tmds(53_000_000, 16, 22, 14),
    tmds(54_000_000, 16, 24, 15),
    tmds(54_054_000, 16, 173, 108),
    tmds(54_500_000, 14, 24, 17),
    tmds(55_000_000, 12, 22, 18),
    tmds(56_000_000, 14, 45, 31),
    tmds(56_250_000, 16, 25, 15),
    tmds(56_750_000, 14, 25, 17),
    tmds(57_000_000, 16, 27, 16),
    tmds(58_000_000, 16, 43, 25),
    tmds(58_250_000, 16, 38, 22),
    tmds(58_750_000, 16, 40, 23),
    tmds(59_000_000, 14, 26, 17),
    tmds(59_341_000, 14, 40, 26),
    tmds(59_400_000, 16, 44, 25),
    tmds(60_000_000, 16, 32, 18),
    tmds(60_500_000, 12, 39, 29),
    tmds(61_000_000, 14, 49, 31),
    tmds(62_000_000, 14, 37, 23),
    tmds(62_250_000, 14, 42, 26),
    tmds(63_000_000, 12, 21, 15),
    tmds(63_500_000, 14, 28, 17),
    tmds(64_000_000, 12, 27, 19),
    tmds(65_000_000, 14, 32, 19),
    tmds(65_250_000, 12, 29, 20),
    tmds(65_500_000, 12, 32, 22),
    tmds(66_000_000, 12, 22, 15),
    tmds(66_667_000, 14, 38, 22),
    tmds(66_750_000, 10, 21, 17),
    tmds(67_000_000, 14, 33, 19),
    tmds(67_750_000, 14, 58, 33),
    tmds(68_000_000, 14, 30, 17),
    tmds(68_179_000, 14, 46, 26),
    tmds(68_250_000, 14, 46, 26),
    tmds(69_000_000, 12, 23, 15),
    tmds(70_000_000, 12, 28, 18),
    tmds(71_000_000, 12, 30, 19),
    tmds(72_000_000, 12, 24, 15),
    tmds(73_000_000, 10, 23, 17),
    tmds(74_000_000, 12, 23, 14),
    tmds(74_176_000, 8, 100, 91),
    tmds(74_250_000, 10, 22, 16),
    tmds(74_481_000, 12, 43, 26),
    tmds(74_500_000, 10, 29, 21),
    tmds(75_000_000, 12, 25, 15),
    tmds(75_250_000, 10, 39, 28),
    tmds(76_000_000, 12, 27, 16),
    tmds(77_000_000, 12, 53, 31),
    tmds(78_000_000, 12, 26, 15),
    tmds(78_750_000, 12, 28, 16),
    tmds(79_000_000, 10, 38, 26),
    tmds(79_500_000, 10, 28, 19),
    tmds(80_000_000, 12, 32, 18),
    tmds(81_000_000, 10, 21, 14),
    tmds(81_081_000, 6, 100, 111),
    tmds(81_624_000, 8, 29, 24),
    tmds(82_000_000, 8, 17, 14),
    tmds(83_000_000, 10, 40, 26),
    tmds(83_950_000, 10, 28, 18),
    tmds(84_000_000, 10, 28, 18),
    tmds(84_750_000, 6, 16, 17),
    tmds(85_000_000, 6, 17, 18),
    tmds(85_250_000, 10, 30, 19),
    tmds(85_750_000, 10, 27, 17),
    tmds(86_000_000, 10, 43, 27),
    tmds(87_000_000, 10, 29, 18),
    tmds(88_000_000, 10, 44, 27),
    tmds(88_500_000, 10, 41, 25),
    tmds(89_000_000, 10, 28, 17),
    tmds(89_012_000, 6, 90, 91),
    tmds(89_100_000, 10, 33, 20),
    tmds(90_000_000, 10, 25, 15),
    tmds(91_000_000, 10, 32, 19),
    tmds(92_000_000, 10, 46, 27),
    tmds(93_000_000, 10, 31, 18),
    tmds(94_000_000, 10, 40, 23),
    tmds(94_500_000, 10, 28, 16),
    tmds(95_000_000, 10, 44, 25),
    tmds(95_654_000, 10, 39, 22),
    tmds(95_750_000, 10, 39, 22),
    tmds(96_000_000, 10, 32, 18),
    tmds(97_000_000, 8, 23, 16),
    tmds(97_750_000, 8, 42, 29),
    tmds(98_000_000, 8, 45, 31),
    tmds(99_000_000, 8, 22, 15),
    tmds(99_750_000, 8, 34, 23),
    tmds(100_000_000, 6, 20, 18),
    tmds(100_500_000, 6, 19, 17),
    tmds(101_000_000, 6, 37, 33),
    tmds(101_250_000, 8, 21, 14),
    tmds(102_000_000, 6, 17, 15),
    tmds(102_250_000, 6, 25, 22),
    tmds(103_000_000, 8, 29, 19),
    tmds(104_000_000, 8, 37, 24),
    tmds(105_000_000, 8, 28, 18),
    tmds(106_000_000, 8, 22, 14),
    tmds(107_000_000, 8, 46, 29),
    tmds(107_214_000, 8, 27, 17),
    tmds(108_000_000, 8, 24, 15),
    tmds(108_108_000, 8, 173, 108),
    tmds(109_000_000, 6, 23, 19),
    tmds(110_000_000, 6, 22, 18),
    tmds(110_013_000, 6, 22, 18),
    tmds(110_250_000, 8, 49, 30),
    tmds(110_500_000, 8, 36, 22),
    tmds(111_000_000, 8, 23, 14),
    tmds(111_264_000, 8, 150, 91),
    tmds(111_375_000, 8, 33, 20),
    tmds(112_000_000, 8, 63, 38),
    tmds(112_500_000, 8, 25, 15),
    tmds(113_100_000, 8, 57, 34),
    tmds(113_309_000, 8, 42, 25),
    tmds(114_000_000, 8, 27, 16),
    tmds(115_000_000, 6, 23, 18),
    tmds(116_000_000, 8, 43, 25),
    tmds(117_000_000, 8, 26, 15),
    tmds(117_500_000, 8, 40, 23),
    tmds(118_000_000, 6, 38, 29),
    tmds(119_000_000, 8, 30, 17),
    tmds(119_500_000, 8, 46, 26),
    tmds(119_651_000, 8, 39, 22),
    tmds(120_000_000, 8, 32, 18),
    tmds(121_000_000, 6, 39, 29),
    tmds(121_250_000, 6, 31, 23),
    tmds(121_750_000, 6, 23, 17),
    tmds(122_000_000, 6, 42, 31),
    tmds(122_614_000, 6, 30, 22),
    tmds(123_000_000, 6, 41, 30),
    tmds(123_379_000, 6, 37, 27),
    tmds(124_000_000, 6, 51, 37),
    tmds(125_000_000, 6, 25, 18),
    tmds(125_250_000, 4, 13, 14),
    tmds(125_750_000, 4, 27, 29),
    tmds(126_000_000, 6, 21, 15),
    tmds(127_000_000, 6, 24, 17),
    tmds(127_250_000, 6, 41, 29),
    tmds(128_000_000, 6, 27, 19),
    tmds(129_000_000, 6, 43, 30),
    tmds(129_859_000, 4, 25, 26),
    tmds(130_000_000, 6, 26, 18),
    tmds(130_250_000, 6, 42, 29),
    tmds(131_000_000, 6, 32, 22),
    tmds(131_500_000, 6, 38, 26),
    tmds(131_850_000, 6, 41, 28),
    tmds(132_000_000, 6, 22, 15),
    tmds(132_750_000, 6, 28, 19),
    tmds(133_000_000, 6, 34, 23),
    tmds(133_330_000, 6, 37, 25),
    tmds(134_000_000, 6, 61, 41),
    tmds(135_000_000, 6, 21, 14),
    tmds(135_250_000, 6, 167, 111),
    tmds(136_000_000, 6, 62, 41),
    tmds(137_000_000, 6, 35, 23),
    tmds(138_000_000, 6, 23, 15),
    tmds(138_500_000, 6, 40, 26),
    tmds(138_750_000, 6, 37, 24),
    tmds(139_000_000, 6, 34, 22),
    tmds(139_050_000, 6, 34, 22),
    tmds(139_054_000, 6, 34, 22),
    tmds(140_000_000, 6, 28, 18),
    tmds(141_000_000, 6, 36, 23),
    tmds(141_500_000, 6, 22, 14),
    tmds(142_000_000, 6, 30, 19),
    tmds(143_000_000, 6, 27, 17),
    tmds(143_472_000, 4, 17, 16),
    tmds(144_000_000, 6, 24, 15),
    tmds(145_000_000, 6, 29, 18),
    tmds(146_000_000, 6, 47, 29),
    tmds(146_250_000, 6, 26, 16),
    tmds(147_000_000, 6, 49, 30),
    tmds(147_891_000, 6, 23, 14),
    tmds(148_000_000, 6, 23, 14),
    tmds(148_250_000, 6, 28, 17),
    tmds(148_352_000, 4, 100, 91),
    tmds(148_500_000, 6, 33, 20),
    tmds(149_000_000, 6, 48, 29),
    tmds(150_000_000, 6, 25, 15),
    tmds(151_000_000, 4, 19, 17),
    tmds(152_000_000, 6, 27, 16),
    tmds(152_280_000, 6, 44, 26),
    tmds(153_000_000, 6, 34, 20),
    tmds(154_000_000, 6, 53, 31),
    tmds(155_000_000, 6, 31, 18),
    tmds(155_250_000, 6, 50, 29),
    tmds(155_750_000, 6, 45, 26),
    tmds(156_000_000, 6, 26, 15),
    tmds(157_000_000, 6, 61, 35),
    tmds(157_500_000, 6, 28, 16),
    tmds(158_000_000, 6, 65, 37),
    tmds(158_250_000, 6, 44, 25),
    tmds(159_000_000, 6, 53, 30),
    tmds(159_500_000, 6, 39, 22),
    tmds(160_000_000, 6, 32, 18),
    tmds(161_000_000, 4, 31, 26),
    tmds(162_000_000, 4, 18, 15),
    tmds(162_162_000, 4, 131, 109),
    tmds(162_500_000, 4, 53, 44),
    tmds(163_000_000, 4, 29, 24),
    tmds(164_000_000, 4, 17, 14),
    tmds(165_000_000, 4, 22, 18),
    tmds(166_000_000, 4, 32, 26),
    tmds(167_000_000, 4, 26, 21),
    tmds(168_000_000, 4, 46, 37),
    tmds(169_000_000, 4, 104, 83),
    tmds(169_128_000, 4, 64, 51),
    tmds(169_500_000, 4, 39, 31),
    tmds(170_000_000, 4, 34, 27),
    tmds(171_000_000, 4, 19, 15),
    tmds(172_000_000, 4, 51, 40),
    tmds(172_750_000, 4, 32, 25),
    tmds(172_800_000, 4, 32, 25),
    tmds(173_000_000, 4, 41, 32),
    tmds(174_000_000, 4, 49, 38),
    tmds(174_787_000, 4, 22, 17),
    tmds(175_000_000, 4, 35, 27),
    tmds(176_000_000, 4, 30, 23),
    tmds(177_000_000, 4, 38, 29),
    tmds(178_000_000, 4, 29, 22),
    tmds(178_500_000, 4, 37, 28),
    tmds(179_000_000, 4, 53, 40),
    tmds(179_500_000, 4, 73, 55),
    tmds(180_000_000, 4, 20, 15),
    tmds(181_000_000, 4, 55, 41),
    tmds(182_000_000, 4, 31, 23),
    tmds(183_000_000, 4, 42, 31),
    tmds(184_000_000, 4, 30, 22),
    tmds(184_750_000, 4, 26, 19),
    tmds(185_000_000, 4, 37, 27),
    tmds(186_000_000, 4, 51, 37),
    tmds(187_000_000, 4, 36, 26),
    tmds(188_000_000, 4, 32, 23),
    tmds(189_000_000, 4, 21, 15),
    tmds(190_000_000, 4, 38, 27),
    tmds(190_960_000, 4, 41, 29),
    tmds(191_000_000, 4, 41, 29),
    tmds(192_000_000, 4, 27, 19),
    tmds(192_250_000, 4, 37, 26),
    tmds(193_000_000, 4, 20, 14),
    tmds(193_250_000, 4, 53, 37),
    tmds(194_000_000, 4, 23, 16),
    tmds(194_208_000, 4, 23, 16),
    tmds(195_000_000, 4, 26, 18),
    tmds(196_000_000, 4, 45, 31),
    tmds(197_000_000, 4, 35, 24),
    tmds(197_750_000, 4, 41, 28),
    tmds(198_000_000, 4, 22, 15),
    tmds(198_500_000, 4, 25, 17),
    tmds(199_000_000, 4, 28, 19),
    tmds(200_000_000, 4, 37, 25),
    tmds(201_000_000, 4, 61, 41),
    tmds(202_000_000, 4, 112, 75),
    tmds(202_500_000, 4, 21, 14),
    tmds(203_000_000, 4, 146, 97),
    tmds(204_000_000, 4, 62, 41),
    tmds(204_750_000, 4, 44, 29),
    tmds(205_000_000, 4, 38, 25),
    tmds(206_000_000, 4, 29, 19),
    tmds(207_000_000, 4, 23, 15),
    tmds(207_500_000, 4, 40, 26),
    tmds(208_000_000, 4, 37, 24),
    tmds(208_900_000, 4, 48, 31),
    tmds(209_000_000, 4, 48, 31),
    tmds(209_250_000, 4, 31, 20),
    tmds(210_000_000, 4, 28, 18),
    tmds(211_000_000, 4, 25, 16),
    tmds(212_000_000, 4, 22, 14),
    tmds(213_000_000, 4, 30, 19),
    tmds(213_750_000, 4, 38, 24),
    tmds(214_000_000, 4, 46, 29),
    tmds(214_750_000, 4, 35, 22),
    tmds(215_000_000, 4, 43, 27),
    tmds(216_000_000, 4, 24, 15),
    tmds(217_000_000, 4, 37, 23),
    tmds(218_000_000, 4, 42, 26),
    tmds(218_250_000, 4, 42, 26),
    tmds(218_750_000, 4, 34, 21),
    tmds(219_000_000, 4, 47, 29),
    tmds(220_000_000, 4, 44, 27),
    tmds(220_640_000, 4, 49, 30),
    tmds(220_750_000, 4, 36, 22),
    tmds(221_000_000, 4, 36, 22),
    tmds(222_000_000, 4, 23, 14),
    tmds(222_525_000, 4, 150, 91),
    tmds(222_750_000, 4, 33, 20),
    tmds(227_000_000, 4, 37, 22),
    tmds(230_250_000, 4, 29, 17),
    tmds(233_500_000, 4, 38, 22),
    tmds(235_000_000, 4, 40, 23),
    tmds(238_000_000, 4, 30, 17),
    tmds(241_500_000, 2, 17, 19),
    tmds(245_250_000, 2, 20, 22),
    tmds(247_750_000, 2, 22, 24),
    tmds(253_250_000, 2, 15, 16),
    tmds(256_250_000, 2, 18, 19),
    tmds(262_500_000, 2, 31, 32),
    tmds(267_250_000, 2, 66, 67),
    tmds(268_500_000, 2, 94, 95),
    tmds(270_000_000, 2, 14, 14),
    tmds(272_500_000, 2, 77, 76),
    tmds(273_750_000, 2, 57, 56),
    tmds(280_750_000, 2, 24, 23),
    tmds(281_250_000, 2, 23, 22),
    tmds(286_000_000, 2, 17, 16),
    tmds(291_750_000, 2, 26, 24),
    tmds(296_703_000, 2, 100, 91),
    tmds(297_000_000, 2, 22, 20),
    tmds(298_000_000, 2, 21, 19),
];

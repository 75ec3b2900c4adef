//! Truncated VSOP87D heliocentric tables for the Earth.
//!
//! Ecliptic and equinox of date. Amplitudes are in units of 1e-8 radian
//! (L, B) or 1e-8 AU (R); phases in radians; frequencies in radians per
//! Julian millennium.
//!
//! Source: Bretagnon & Francou (1988) VSOP87D, truncated as in Meeus,
//! "Astronomical Algorithms" (2nd ed), Appendix III.

use crate::series::VsopTerm;

/// Scale from tabulated amplitude to radians / AU.
pub const AMPLITUDE_SCALE: f64 = 1e-8;

pub const EARTH_L0: &[VsopTerm] = &[
    VsopTerm::new(175_347_046.0, 0.0, 0.0),
    VsopTerm::new(3_341_656.0, 4.6692568, 6283.07585),
    VsopTerm::new(34_894.0, 4.6261, 12566.1517),
    VsopTerm::new(3497.0, 2.7441, 5753.3849),
    VsopTerm::new(3418.0, 2.8289, 3.5231),
    VsopTerm::new(3136.0, 3.6277, 77713.7715),
    VsopTerm::new(2676.0, 4.4181, 7860.4194),
    VsopTerm::new(2343.0, 6.1352, 3930.2097),
    VsopTerm::new(1324.0, 0.7425, 11506.7698),
    VsopTerm::new(1273.0, 2.0371, 529.691),
    VsopTerm::new(1199.0, 1.1096, 1577.3435),
    VsopTerm::new(990.0, 5.233, 5884.927),
    VsopTerm::new(902.0, 2.045, 26.298),
    VsopTerm::new(857.0, 3.508, 398.149),
    VsopTerm::new(780.0, 1.179, 5223.694),
    VsopTerm::new(753.0, 2.533, 5507.553),
    VsopTerm::new(505.0, 4.583, 18849.228),
    VsopTerm::new(492.0, 4.205, 775.523),
    VsopTerm::new(357.0, 2.92, 0.067),
    VsopTerm::new(317.0, 5.849, 11790.629),
    VsopTerm::new(284.0, 1.899, 796.298),
    VsopTerm::new(271.0, 0.315, 10977.079),
    VsopTerm::new(243.0, 0.345, 5486.778),
    VsopTerm::new(206.0, 4.806, 2544.314),
    VsopTerm::new(205.0, 1.869, 5573.143),
    VsopTerm::new(202.0, 2.458, 6069.777),
    VsopTerm::new(156.0, 0.833, 213.299),
    VsopTerm::new(132.0, 3.411, 2942.463),
    VsopTerm::new(126.0, 1.083, 20.775),
    VsopTerm::new(115.0, 0.645, 0.98),
    VsopTerm::new(103.0, 0.636, 4694.003),
    VsopTerm::new(102.0, 0.976, 15720.839),
    VsopTerm::new(102.0, 4.267, 7.114),
    VsopTerm::new(99.0, 6.21, 2146.17),
    VsopTerm::new(98.0, 0.68, 155.42),
    VsopTerm::new(86.0, 5.98, 161000.69),
    VsopTerm::new(85.0, 1.3, 6275.96),
    VsopTerm::new(85.0, 3.67, 71430.7),
    VsopTerm::new(80.0, 1.81, 17260.15),
    VsopTerm::new(79.0, 3.04, 12036.46),
    VsopTerm::new(75.0, 1.76, 5088.63),
    VsopTerm::new(74.0, 3.5, 3154.69),
    VsopTerm::new(74.0, 4.68, 801.82),
    VsopTerm::new(70.0, 0.83, 9437.76),
    VsopTerm::new(62.0, 3.98, 8827.39),
    VsopTerm::new(61.0, 1.82, 7084.9),
    VsopTerm::new(57.0, 2.78, 6286.6),
    VsopTerm::new(56.0, 4.39, 14143.5),
    VsopTerm::new(56.0, 3.47, 6279.55),
    VsopTerm::new(52.0, 0.19, 12139.55),
    VsopTerm::new(52.0, 1.33, 1748.02),
    VsopTerm::new(51.0, 0.28, 5856.48),
    VsopTerm::new(49.0, 0.49, 1194.45),
    VsopTerm::new(41.0, 5.37, 8429.24),
    VsopTerm::new(41.0, 2.4, 19651.05),
    VsopTerm::new(39.0, 6.17, 10447.39),
    VsopTerm::new(37.0, 6.04, 10213.29),
    VsopTerm::new(37.0, 2.57, 1059.38),
    VsopTerm::new(36.0, 1.71, 2352.87),
    VsopTerm::new(36.0, 1.78, 6812.77),
    VsopTerm::new(33.0, 0.59, 17789.85),
    VsopTerm::new(30.0, 0.44, 83996.85),
    VsopTerm::new(30.0, 2.74, 1349.87),
    VsopTerm::new(25.0, 3.16, 4690.48),
];

pub const EARTH_L1: &[VsopTerm] = &[
    VsopTerm::new(628_331_966_747.0, 0.0, 0.0),
    VsopTerm::new(206_059.0, 2.678235, 6283.07585),
    VsopTerm::new(4303.0, 2.6351, 12566.1517),
    VsopTerm::new(425.0, 1.59, 3.523),
    VsopTerm::new(119.0, 5.796, 26.298),
    VsopTerm::new(109.0, 2.966, 1577.344),
    VsopTerm::new(93.0, 2.59, 18849.23),
    VsopTerm::new(72.0, 1.14, 529.69),
    VsopTerm::new(68.0, 1.87, 398.15),
    VsopTerm::new(67.0, 4.41, 5507.55),
    VsopTerm::new(59.0, 2.89, 5223.69),
    VsopTerm::new(56.0, 2.17, 155.42),
    VsopTerm::new(45.0, 0.4, 796.3),
    VsopTerm::new(36.0, 0.47, 775.52),
    VsopTerm::new(29.0, 2.65, 7.11),
    VsopTerm::new(21.0, 5.34, 0.98),
    VsopTerm::new(19.0, 1.85, 5486.78),
    VsopTerm::new(19.0, 4.97, 213.3),
    VsopTerm::new(17.0, 2.99, 6275.96),
    VsopTerm::new(16.0, 0.03, 2544.31),
    VsopTerm::new(16.0, 1.43, 2146.17),
    VsopTerm::new(15.0, 1.21, 10977.08),
    VsopTerm::new(12.0, 2.83, 1748.02),
    VsopTerm::new(12.0, 3.26, 5088.63),
    VsopTerm::new(12.0, 5.27, 1194.45),
    VsopTerm::new(12.0, 2.08, 4694.0),
    VsopTerm::new(11.0, 0.77, 553.57),
    VsopTerm::new(10.0, 1.3, 6286.6),
    VsopTerm::new(10.0, 4.24, 1349.87),
    VsopTerm::new(9.0, 2.7, 242.73),
    VsopTerm::new(9.0, 5.64, 951.72),
    VsopTerm::new(8.0, 5.3, 2352.87),
    VsopTerm::new(6.0, 2.65, 9437.76),
    VsopTerm::new(6.0, 4.67, 4690.48),
];

pub const EARTH_L2: &[VsopTerm] = &[
    VsopTerm::new(52_919.0, 0.0, 0.0),
    VsopTerm::new(8720.0, 1.0721, 6283.0758),
    VsopTerm::new(309.0, 0.867, 12566.152),
    VsopTerm::new(27.0, 0.05, 3.52),
    VsopTerm::new(16.0, 5.19, 26.3),
    VsopTerm::new(16.0, 3.68, 155.42),
    VsopTerm::new(10.0, 0.76, 18849.23),
    VsopTerm::new(9.0, 2.06, 77713.77),
    VsopTerm::new(7.0, 0.83, 775.52),
    VsopTerm::new(5.0, 4.66, 1577.34),
    VsopTerm::new(4.0, 1.03, 7.11),
    VsopTerm::new(4.0, 3.44, 5573.14),
    VsopTerm::new(3.0, 5.14, 796.3),
    VsopTerm::new(3.0, 6.05, 5507.55),
    VsopTerm::new(3.0, 1.19, 242.73),
    VsopTerm::new(3.0, 6.12, 529.69),
    VsopTerm::new(3.0, 0.31, 398.15),
    VsopTerm::new(3.0, 2.28, 553.57),
    VsopTerm::new(2.0, 4.38, 5223.69),
    VsopTerm::new(2.0, 3.75, 0.98),
];

pub const EARTH_L3: &[VsopTerm] = &[
    VsopTerm::new(289.0, 5.844, 6283.076),
    VsopTerm::new(35.0, 0.0, 0.0),
    VsopTerm::new(17.0, 5.49, 12566.15),
    VsopTerm::new(3.0, 5.2, 155.42),
    VsopTerm::new(1.0, 4.72, 3.52),
    VsopTerm::new(1.0, 5.3, 18849.23),
    VsopTerm::new(1.0, 5.97, 242.73),
];

pub const EARTH_L4: &[VsopTerm] = &[
    VsopTerm::new(114.0, 3.142, 0.0),
    VsopTerm::new(8.0, 4.13, 6283.08),
    VsopTerm::new(1.0, 3.84, 12566.15),
];

pub const EARTH_L5: &[VsopTerm] = &[
    VsopTerm::new(1.0, 3.14, 0.0),
];

pub const EARTH_B0: &[VsopTerm] = &[
    VsopTerm::new(280.0, 3.199, 84334.662),
    VsopTerm::new(102.0, 5.422, 5507.553),
    VsopTerm::new(80.0, 3.88, 5223.69),
    VsopTerm::new(44.0, 3.7, 2352.87),
    VsopTerm::new(32.0, 4.0, 1577.34),
];

pub const EARTH_B1: &[VsopTerm] = &[
    VsopTerm::new(9.0, 3.9, 5507.55),
    VsopTerm::new(6.0, 1.73, 5223.69),
];

pub const EARTH_B2: &[VsopTerm] = &[
    VsopTerm::new(0.227777, 3.413766, 6283.07585),
];

pub const EARTH_R0: &[VsopTerm] = &[
    VsopTerm::new(100_013_989.0, 0.0, 0.0),
    VsopTerm::new(1_670_700.0, 3.0984635, 6283.07585),
    VsopTerm::new(13_956.0, 3.05525, 12566.1517),
    VsopTerm::new(3084.0, 5.1985, 77713.7715),
    VsopTerm::new(1628.0, 1.1739, 5753.3849),
    VsopTerm::new(1576.0, 2.8469, 7860.4194),
    VsopTerm::new(925.0, 5.453, 11506.77),
    VsopTerm::new(542.0, 4.564, 3930.21),
    VsopTerm::new(472.0, 3.661, 5884.927),
    VsopTerm::new(346.0, 0.964, 5507.553),
    VsopTerm::new(329.0, 5.9, 5223.694),
    VsopTerm::new(307.0, 0.299, 5573.143),
    VsopTerm::new(243.0, 4.273, 11790.629),
    VsopTerm::new(212.0, 5.847, 1577.344),
    VsopTerm::new(186.0, 5.022, 10977.079),
    VsopTerm::new(175.0, 3.012, 18849.228),
    VsopTerm::new(110.0, 5.055, 5486.778),
    VsopTerm::new(98.0, 0.89, 6069.78),
    VsopTerm::new(86.0, 5.69, 15720.84),
    VsopTerm::new(86.0, 1.27, 161000.69),
    VsopTerm::new(65.0, 0.27, 17260.15),
    VsopTerm::new(63.0, 0.92, 529.69),
    VsopTerm::new(57.0, 2.01, 83996.85),
    VsopTerm::new(56.0, 5.24, 71430.7),
    VsopTerm::new(49.0, 3.25, 2544.31),
    VsopTerm::new(47.0, 2.58, 775.52),
    VsopTerm::new(45.0, 5.54, 9437.76),
    VsopTerm::new(43.0, 6.01, 6275.96),
    VsopTerm::new(39.0, 5.36, 4694.0),
    VsopTerm::new(38.0, 2.39, 8827.39),
    VsopTerm::new(37.0, 0.83, 19651.05),
    VsopTerm::new(37.0, 4.9, 12139.55),
    VsopTerm::new(36.0, 1.67, 12036.46),
    VsopTerm::new(35.0, 1.84, 2942.46),
    VsopTerm::new(33.0, 0.24, 7084.9),
    VsopTerm::new(32.0, 0.18, 5088.63),
    VsopTerm::new(32.0, 1.78, 398.15),
    VsopTerm::new(28.0, 1.21, 6286.6),
    VsopTerm::new(28.0, 1.9, 6279.55),
    VsopTerm::new(26.0, 4.59, 10447.39),
];

pub const EARTH_R1: &[VsopTerm] = &[
    VsopTerm::new(103_019.0, 1.10749, 6283.07585),
    VsopTerm::new(1721.0, 1.0644, 12566.1517),
    VsopTerm::new(702.0, 3.142, 0.0),
    VsopTerm::new(32.0, 1.02, 18849.23),
    VsopTerm::new(31.0, 2.84, 5507.55),
    VsopTerm::new(25.0, 1.32, 5223.69),
    VsopTerm::new(18.0, 1.42, 1577.34),
    VsopTerm::new(10.0, 5.91, 10977.08),
    VsopTerm::new(9.0, 1.42, 6275.96),
    VsopTerm::new(9.0, 0.27, 5486.78),
];

pub const EARTH_R2: &[VsopTerm] = &[
    VsopTerm::new(4359.0, 5.7846, 6283.0758),
    VsopTerm::new(124.0, 5.579, 12566.152),
    VsopTerm::new(12.0, 3.14, 0.0),
    VsopTerm::new(9.0, 3.63, 77713.77),
    VsopTerm::new(6.0, 1.87, 5573.14),
    VsopTerm::new(3.0, 5.47, 18849.23),
];

pub const EARTH_R3: &[VsopTerm] = &[
    VsopTerm::new(145.0, 4.273, 6283.076),
    VsopTerm::new(7.0, 3.92, 12566.15),
];

pub const EARTH_R4: &[VsopTerm] = &[
    VsopTerm::new(4.0, 2.56, 6283.08),
];

/// Heliocentric longitude L, levels 0–5.
pub const EARTH_L: &[&[VsopTerm]] =
    &[EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_L5];

/// Heliocentric latitude B, levels 0–2.
pub const EARTH_B: &[&[VsopTerm]] = &[EARTH_B0, EARTH_B1, EARTH_B2];

/// Radius vector R, levels 0–4.
pub const EARTH_R: &[&[VsopTerm]] = &[EARTH_R0, EARTH_R1, EARTH_R2, EARTH_R3, EARTH_R4];

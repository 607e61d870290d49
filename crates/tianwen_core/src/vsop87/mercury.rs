//! Mercury: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 38] = [
    t(440250710.0, 0.0, 0.0),
    t(40989415.0, 1.48302034, 26087.90314157),
    t(5046294.0, 4.4778549, 52175.8062831),
    t(855347.0, 1.165203, 78263.709425),
    t(165590.0, 4.119692, 104351.612566),
    t(34562.0, 0.77931, 130439.51571),
    t(7583.0, 3.7135, 156527.4188),
    t(3560.0, 1.5120, 1109.3786),
    t(1803.0, 4.1033, 5661.3320),
    t(1726.0, 0.3583, 182615.3220),
    t(1590.0, 2.9951, 25028.5212),
    t(1365.0, 4.5992, 27197.2817),
    t(1017.0, 0.8803, 31749.2352),
    t(714.0, 1.541, 24978.525),
    t(644.0, 5.303, 21535.950),
    t(451.0, 6.050, 51116.424),
    t(404.0, 3.282, 208703.225),
    t(352.0, 5.242, 20426.571),
    t(345.0, 2.792, 15874.618),
    t(343.0, 5.765, 955.600),
    t(339.0, 5.863, 25558.212),
    t(325.0, 1.337, 53285.185),
    t(273.0, 2.495, 529.691),
    t(264.0, 3.917, 57837.138),
    t(260.0, 0.987, 4551.953),
    t(239.0, 0.113, 1059.382),
    t(235.0, 0.267, 11322.664),
    t(217.0, 0.660, 13521.751),
    t(209.0, 2.092, 47623.853),
    t(183.0, 2.629, 27043.503),
    t(182.0, 2.434, 25661.305),
    t(176.0, 4.536, 51066.428),
    t(173.0, 2.452, 24498.830),
    t(142.0, 3.360, 37410.567),
    t(138.0, 0.291, 10213.286),
    t(125.0, 3.721, 39609.655),
    t(118.0, 2.781, 77204.327),
    t(106.0, 4.206, 19804.827),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 16] = [
    t(2608814706223.0, 0.0, 0.0),
    t(1126008.0, 6.2170397, 26087.9031416),
    t(303471.0, 3.055655, 52175.806283),
    t(80538.0, 6.10455, 78263.70942),
    t(21245.0, 2.83532, 104351.61257),
    t(5592.0, 5.8268, 130439.5157),
    t(1472.0, 2.5185, 156527.4188),
    t(388.0, 5.480, 182615.322),
    t(352.0, 3.052, 1109.379),
    t(103.0, 2.149, 24978.525),
    t(94.0, 6.12, 27197.28),
    t(91.0, 0.00, 20426.57),
    t(52.0, 5.62, 5661.33),
    t(44.0, 4.57, 208703.23),
    t(28.0, 3.04, 51066.43),
    t(27.0, 5.09, 234791.13),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 10] = [
    t(53050.0, 0.0, 0.0),
    t(16904.0, 4.69072, 26087.90314),
    t(7397.0, 1.3474, 52175.8063),
    t(3018.0, 4.4564, 78263.7094),
    t(1107.0, 1.2623, 104351.6126),
    t(378.0, 4.320, 130439.516),
    t(123.0, 1.069, 156527.419),
    t(39.0, 4.08, 182615.32),
    t(15.0, 4.63, 1109.38),
    t(12.0, 0.79, 208703.23),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 8] = [
    t(188.0, 0.035, 52175.806),
    t(142.0, 3.125, 26087.903),
    t(97.0, 3.00, 78263.71),
    t(44.0, 6.02, 104351.61),
    t(35.0, 0.0, 0.0),
    t(18.0, 2.78, 130439.52),
    t(7.0, 5.82, 156527.42),
    t(3.0, 2.57, 182615.32),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 7] = [
    t(114.0, 3.1416, 0.0),
    t(29.0, 5.71, 26087.90),
    t(24.0, 5.57, 52175.81),
    t(11.0, 5.93, 78263.71),
    t(9.0, 1.22, 104351.61),
    t(4.0, 6.08, 130439.52),
    t(2.0, 2.42, 156527.42),
];

#[rustfmt::skip]
static L5: [PeriodicTerm; 1] = [
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 14] = [
    t(11737529.0, 1.98357499, 26087.90314157),
    t(2388077.0, 5.0373896, 52175.8062831),
    t(1222840.0, 3.1415927, 0.0),
    t(543252.0, 1.796444, 78263.709425),
    t(129779.0, 4.832325, 104351.612566),
    t(31867.0, 1.58088, 130439.51571),
    t(7963.0, 4.6097, 156527.4188),
    t(2014.0, 1.3532, 182615.3220),
    t(514.0, 4.378, 208703.225),
    t(209.0, 2.020, 24978.525),
    t(208.0, 4.918, 27197.282),
    t(132.0, 1.119, 234791.128),
    t(121.0, 1.813, 53285.185),
    t(100.0, 5.657, 20426.571),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 11] = [
    t(429151.0, 3.501698, 26087.903142),
    t(146234.0, 3.141593, 0.0),
    t(22675.0, 0.01515, 52175.80628),
    t(10895.0, 0.48540, 78263.70942),
    t(6353.0, 3.4294, 104351.6126),
    t(2496.0, 0.1605, 130439.5157),
    t(860.0, 3.185, 156527.419),
    t(278.0, 6.210, 182615.322),
    t(86.0, 2.95, 208703.23),
    t(28.0, 0.29, 27197.28),
    t(26.0, 3.37, 234791.13),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 9] = [
    t(11831.0, 4.79066, 26087.90314),
    t(1914.0, 0.0, 0.0),
    t(1045.0, 1.2122, 52175.8063),
    t(266.0, 4.434, 78263.709),
    t(170.0, 1.623, 104351.613),
    t(96.0, 4.80, 130439.52),
    t(45.0, 1.61, 156527.42),
    t(18.0, 4.67, 182615.32),
    t(7.0, 1.43, 208703.23),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 7] = [
    t(235.0, 0.354, 26087.903),
    t(161.0, 0.0, 0.0),
    t(19.0, 4.36, 52175.81),
    t(6.0, 2.51, 78263.71),
    t(5.0, 6.14, 104351.61),
    t(3.0, 3.14, 156527.42),
    t(2.0, 6.27, 130439.52),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 2] = [
    t(4.0, 1.75, 26087.90),
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 13] = [
    t(39528272.0, 0.0, 0.0),
    t(7834132.0, 6.1923372, 26087.9031416),
    t(795526.0, 2.959897, 52175.806283),
    t(121282.0, 6.010642, 78263.709425),
    t(21922.0, 2.77820, 104351.61257),
    t(4354.0, 5.8289, 130439.5157),
    t(918.0, 2.597, 156527.419),
    t(290.0, 1.424, 25028.521),
    t(260.0, 3.028, 27197.282),
    t(202.0, 5.647, 182615.322),
    t(201.0, 5.592, 31749.235),
    t(142.0, 6.253, 24978.525),
    t(100.0, 3.734, 21535.950),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 8] = [
    t(217348.0, 4.656172, 26087.903142),
    t(44142.0, 1.42386, 52175.80628),
    t(10094.0, 4.47466, 78263.70942),
    t(2433.0, 1.2423, 104351.6126),
    t(1624.0, 0.0, 0.0),
    t(604.0, 4.293, 130439.516),
    t(153.0, 1.061, 156527.419),
    t(39.0, 4.11, 182615.32),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 7] = [
    t(3118.0, 3.0823, 26087.9031),
    t(1245.0, 6.1518, 52175.8063),
    t(425.0, 2.926, 78263.709),
    t(136.0, 5.980, 104351.613),
    t(42.0, 2.75, 130439.52),
    t(22.0, 3.14, 0.0),
    t(13.0, 5.80, 156527.42),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 5] = [
    t(33.0, 1.68, 26087.90),
    t(24.0, 4.63, 52175.81),
    t(12.0, 1.39, 78263.71),
    t(5.0, 4.44, 104351.61),
    t(2.0, 1.21, 130439.52),
];

static L_ORDERS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

static B_ORDERS: [&[PeriodicTerm]; 5] = [&B0, &B1, &B2, &B3, &B4];

static R_ORDERS: [&[PeriodicTerm]; 4] = [&R0, &R1, &R2, &R3];

pub static MERCURY: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

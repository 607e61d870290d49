//! Neptune: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 38] = [
    t(531188633.0, 0.0, 0.0),
    t(1798476.0, 2.9010127, 38.1330356),
    t(1019728.0, 0.4858092, 1.4844727),
    t(124532.0, 4.830081, 36.648563),
    t(42064.0, 5.41055, 2.96895),
    t(37715.0, 6.09222, 35.16409),
    t(33785.0, 1.24489, 76.26607),
    t(16483.0, 0.00008, 491.55793),
    t(9199.0, 4.9375, 39.6175),
    t(8994.0, 0.2746, 175.1661),
    t(4216.0, 1.9871, 73.2971),
    t(3365.0, 1.0359, 33.6796),
    t(2285.0, 4.2061, 4.4534),
    t(1434.0, 2.7834, 74.7816),
    t(900.0, 2.076, 109.946),
    t(745.0, 3.190, 71.813),
    t(506.0, 5.748, 114.399),
    t(400.0, 0.350, 1021.249),
    t(345.0, 3.462, 41.102),
    t(340.0, 3.304, 77.751),
    t(323.0, 2.248, 32.195),
    t(306.0, 0.497, 0.521),
    t(287.0, 4.505, 0.048),
    t(282.0, 2.246, 146.594),
    t(267.0, 4.889, 0.963),
    t(252.0, 5.782, 388.465),
    t(245.0, 1.247, 9.561),
    t(233.0, 2.505, 137.033),
    t(227.0, 1.797, 453.425),
    t(170.0, 3.324, 108.461),
    t(151.0, 2.192, 33.940),
    t(150.0, 2.997, 5.938),
    t(148.0, 0.859, 111.430),
    t(119.0, 3.677, 2.448),
    t(109.0, 2.416, 183.243),
    t(103.0, 0.041, 0.261),
    t(103.0, 4.404, 70.328),
    t(102.0, 5.705, 0.112),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 18] = [
    t(3837687717.0, 0.0, 0.0),
    t(16604.0, 4.86319, 1.48447),
    t(15807.0, 2.27923, 38.13304),
    t(3335.0, 3.6820, 76.2661),
    t(1306.0, 3.6732, 2.9689),
    t(605.0, 1.505, 35.164),
    t(179.0, 3.453, 39.618),
    t(107.0, 2.451, 4.453),
    t(106.0, 2.755, 33.680),
    t(73.0, 5.49, 36.65),
    t(57.0, 1.86, 114.40),
    t(57.0, 5.22, 0.52),
    t(35.0, 4.52, 74.78),
    t(32.0, 5.90, 77.75),
    t(30.0, 3.67, 388.47),
    t(29.0, 5.17, 9.56),
    t(29.0, 5.17, 2.45),
    t(26.0, 5.25, 168.05),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 7] = [
    t(53893.0, 0.0, 0.0),
    t(296.0, 1.855, 1.484),
    t(281.0, 1.191, 38.133),
    t(270.0, 5.721, 76.266),
    t(23.0, 1.21, 2.97),
    t(9.0, 4.43, 35.16),
    t(7.0, 0.54, 2.45),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 4] = [
    t(31.0, 0.0, 0.0),
    t(15.0, 1.35, 76.27),
    t(12.0, 6.04, 1.48),
    t(12.0, 6.11, 38.13),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 1] = [
    t(114.0, 3.142, 0.0),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 17] = [
    t(3088623.0, 1.4410437, 38.1330356),
    t(27780.0, 5.91272, 76.26607),
    t(27624.0, 0.0, 0.0),
    t(15448.0, 3.50877, 39.61751),
    t(15355.0, 2.52124, 36.64856),
    t(2000.0, 1.5100, 74.7816),
    t(1968.0, 4.3778, 1.4845),
    t(1015.0, 3.2156, 35.1641),
    t(606.0, 2.802, 73.297),
    t(595.0, 2.129, 41.102),
    t(589.0, 3.187, 2.969),
    t(402.0, 4.169, 114.399),
    t(280.0, 1.682, 77.751),
    t(262.0, 3.767, 213.299),
    t(254.0, 3.271, 453.425),
    t(206.0, 4.257, 529.691),
    t(140.0, 3.530, 137.033),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 13] = [
    t(227279.0, 3.807931, 38.133036),
    t(1803.0, 1.9758, 76.2661),
    t(1433.0, 3.1416, 0.0),
    t(1386.0, 4.8256, 36.6486),
    t(1073.0, 6.0805, 39.6175),
    t(148.0, 3.858, 74.782),
    t(136.0, 0.478, 1.484),
    t(70.0, 6.19, 35.16),
    t(52.0, 5.05, 73.30),
    t(43.0, 0.31, 114.40),
    t(37.0, 4.89, 41.10),
    t(37.0, 5.76, 2.97),
    t(26.0, 5.22, 213.30),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 6] = [
    t(9691.0, 5.5712, 38.1330),
    t(79.0, 3.63, 76.27),
    t(72.0, 0.45, 36.65),
    t(59.0, 3.14, 0.0),
    t(30.0, 1.61, 39.62),
    t(6.0, 5.61, 74.78),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 4] = [
    t(273.0, 1.017, 38.133),
    t(2.0, 0.0, 0.0),
    t(2.0, 2.37, 36.65),
    t(2.0, 5.33, 76.27),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 1] = [
    t(6.0, 2.67, 38.13),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 32] = [
    t(3007013206.0, 0.0, 0.0),
    t(27062259.0, 1.32999459, 38.13303564),
    t(1691764.0, 3.2518614, 36.6485629),
    t(807831.0, 5.185928, 76.266071),
    t(537761.0, 4.521139, 35.164090),
    t(495726.0, 1.571057, 491.557929),
    t(274572.0, 1.845523, 175.166060),
    t(135134.0, 3.372206, 39.617508),
    t(121802.0, 5.797544, 76.266071),
    t(100895.0, 0.377027, 73.297126),
    t(69792.0, 3.796166, 2.968945),
    t(46688.0, 5.749378, 33.679618),
    t(24594.0, 0.508017, 109.945689),
    t(16939.0, 1.594222, 71.812653),
    t(14230.0, 1.077863, 74.781599),
    t(12012.0, 1.920621, 1021.248895),
    t(8395.0, 0.6782, 146.5943),
    t(7572.0, 1.0715, 388.4652),
    t(5721.0, 2.5906, 4.4534),
    t(4840.0, 1.9069, 41.1020),
    t(4483.0, 2.9057, 529.6910),
    t(4421.0, 1.7499, 108.4612),
    t(4354.0, 0.6799, 32.1951),
    t(4270.0, 3.4134, 453.4249),
    t(3381.0, 0.8481, 183.2428),
    t(2881.0, 1.9860, 137.0330),
    t(2879.0, 3.6742, 350.3321),
    t(2636.0, 3.0976, 213.2991),
    t(2530.0, 5.7984, 490.0735),
    t(2523.0, 0.4863, 493.0424),
    t(2306.0, 2.8096, 70.3282),
    t(2087.0, 0.6186, 33.9402),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 15] = [
    t(236339.0, 0.704980, 38.133036),
    t(13220.0, 3.32015, 1.48447),
    t(8622.0, 6.2163, 35.1641),
    t(2702.0, 1.8814, 39.6175),
    t(2155.0, 2.0943, 2.9689),
    t(2153.0, 5.1687, 76.2661),
    t(1603.0, 0.0, 0.0),
    t(1464.0, 1.1842, 33.6796),
    t(1136.0, 3.9189, 36.6486),
    t(898.0, 5.241, 388.465),
    t(790.0, 0.533, 168.053),
    t(760.0, 0.021, 182.280),
    t(607.0, 1.077, 1021.249),
    t(572.0, 3.401, 484.444),
    t(561.0, 2.887, 498.671),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 5] = [
    t(4247.0, 5.8991, 38.1330),
    t(218.0, 0.346, 1.484),
    t(163.0, 2.239, 168.053),
    t(156.0, 4.594, 182.280),
    t(127.0, 2.848, 35.164),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 1] = [
    t(166.0, 4.552, 38.133),
];

static L_ORDERS: [&[PeriodicTerm]; 5] = [&L0, &L1, &L2, &L3, &L4];

static B_ORDERS: [&[PeriodicTerm]; 5] = [&B0, &B1, &B2, &B3, &B4];

static R_ORDERS: [&[PeriodicTerm]; 4] = [&R0, &R1, &R2, &R3];

pub static NEPTUNE: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

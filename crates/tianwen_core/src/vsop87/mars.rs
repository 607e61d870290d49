//! Mars: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 69] = [
    t(620347712.0, 0.0, 0.0),
    t(18656368.0, 5.05037100, 3340.61242670),
    t(1108217.0, 5.4009984, 6681.2248534),
    t(91798.0, 5.75479, 10021.83728),
    t(27745.0, 5.97050, 3.52312),
    t(12316.0, 0.84956, 2810.92146),
    t(10610.0, 2.93959, 2281.23050),
    t(8927.0, 4.1570, 0.0173),
    t(8716.0, 6.1101, 13362.4497),
    t(7775.0, 3.3397, 5621.8429),
    t(6798.0, 0.3646, 398.1490),
    t(4161.0, 0.2281, 2942.4634),
    t(3575.0, 1.6619, 2544.3144),
    t(3075.0, 0.8570, 191.4483),
    t(2938.0, 6.0789, 0.0673),
    t(2628.0, 0.6481, 3337.0893),
    t(2580.0, 0.0300, 3344.1355),
    t(2389.0, 5.0390, 796.2980),
    t(1799.0, 0.6563, 529.6910),
    t(1546.0, 2.9158, 1751.5395),
    t(1528.0, 1.1498, 6151.5339),
    t(1286.0, 3.0680, 2146.1654),
    t(1264.0, 3.6228, 5092.1520),
    t(1025.0, 3.6933, 8962.4553),
    t(892.0, 0.183, 16703.062),
    t(859.0, 2.401, 2914.014),
    t(833.0, 4.495, 3340.630),
    t(833.0, 2.464, 3340.595),
    t(749.0, 3.822, 155.420),
    t(724.0, 0.675, 3738.761),
    t(713.0, 3.663, 1059.382),
    t(655.0, 0.489, 3127.313),
    t(636.0, 2.922, 8432.764),
    t(553.0, 4.475, 1748.016),
    t(550.0, 3.810, 0.980),
    t(472.0, 3.625, 1194.447),
    t(426.0, 0.554, 6283.076),
    t(415.0, 0.497, 213.299),
    t(312.0, 0.999, 6677.702),
    t(307.0, 0.381, 6684.748),
    t(302.0, 4.486, 3532.061),
    t(299.0, 2.783, 6254.627),
    t(293.0, 4.221, 20.775),
    t(284.0, 5.769, 3149.164),
    t(281.0, 5.882, 1349.867),
    t(274.0, 0.542, 3340.545),
    t(274.0, 0.134, 3340.680),
    t(239.0, 5.372, 4136.910),
    t(236.0, 5.755, 3333.499),
    t(231.0, 1.282, 3870.303),
    t(221.0, 3.505, 382.897),
    t(204.0, 2.821, 1221.849),
    t(193.0, 3.357, 3.590),
    t(189.0, 1.491, 9492.146),
    t(179.0, 1.006, 951.718),
    t(174.0, 2.414, 553.569),
    t(172.0, 0.439, 5486.778),
    t(160.0, 3.949, 4562.461),
    t(144.0, 1.419, 135.065),
    t(140.0, 3.326, 2700.715),
    t(138.0, 4.301, 7.114),
    t(131.0, 4.045, 12303.068),
    t(128.0, 2.208, 1592.596),
    t(128.0, 1.807, 5088.629),
    t(117.0, 3.128, 7903.073),
    t(113.0, 3.701, 1589.073),
    t(110.0, 1.052, 242.729),
    t(105.0, 0.785, 8827.390),
    t(100.0, 3.243, 11773.377),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 46] = [
    t(334085627474.0, 0.0, 0.0),
    t(1458227.0, 3.6042605, 3340.6124267),
    t(164901.0, 3.926313, 6681.224853),
    t(19963.0, 4.26594, 10021.83728),
    t(3452.0, 4.7321, 3.5231),
    t(2485.0, 4.6128, 13362.4497),
    t(842.0, 4.459, 2281.230),
    t(538.0, 5.016, 398.149),
    t(521.0, 4.994, 3344.136),
    t(433.0, 2.561, 191.448),
    t(430.0, 5.316, 155.420),
    t(382.0, 3.539, 796.298),
    t(314.0, 4.963, 16703.062),
    t(283.0, 3.160, 2544.314),
    t(206.0, 4.569, 2146.165),
    t(169.0, 1.329, 3337.089),
    t(158.0, 4.185, 1751.540),
    t(134.0, 2.233, 0.980),
    t(134.0, 5.974, 1748.016),
    t(118.0, 6.024, 6151.534),
    t(117.0, 2.213, 1059.382),
    t(114.0, 2.129, 1194.447),
    t(114.0, 5.428, 3738.761),
    t(91.0, 1.10, 1349.87),
    t(85.0, 3.91, 553.57),
    t(83.0, 5.30, 6684.75),
    t(81.0, 4.43, 529.69),
    t(80.0, 2.25, 8962.46),
    t(73.0, 2.50, 951.72),
    t(73.0, 5.84, 242.73),
    t(71.0, 3.86, 2914.01),
    t(68.0, 5.02, 382.90),
    t(65.0, 1.02, 3340.60),
    t(65.0, 3.05, 3340.63),
    t(62.0, 4.15, 3149.16),
    t(57.0, 3.89, 4136.91),
    t(48.0, 4.87, 213.30),
    t(48.0, 1.18, 3333.50),
    t(47.0, 1.31, 3185.19),
    t(41.0, 0.71, 1592.60),
    t(40.0, 2.73, 7.11),
    t(40.0, 5.32, 20043.67),
    t(33.0, 5.41, 6283.08),
    t(28.0, 0.05, 9492.15),
    t(27.0, 3.89, 1221.85),
    t(27.0, 5.11, 2700.72),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 33] = [
    t(58016.0, 2.04979, 3340.61243),
    t(54188.0, 0.0, 0.0),
    t(13908.0, 2.45742, 6681.22485),
    t(2465.0, 2.8000, 10021.8373),
    t(398.0, 3.141, 13362.450),
    t(222.0, 3.194, 3.523),
    t(121.0, 0.543, 155.420),
    t(62.0, 3.49, 16703.06),
    t(54.0, 3.54, 3344.14),
    t(34.0, 6.00, 2281.23),
    t(32.0, 4.14, 191.45),
    t(30.0, 2.00, 796.30),
    t(23.0, 4.33, 242.73),
    t(22.0, 3.45, 398.15),
    t(20.0, 5.42, 553.57),
    t(16.0, 0.66, 0.98),
    t(16.0, 6.11, 2146.17),
    t(16.0, 1.22, 1748.02),
    t(15.0, 6.10, 3185.19),
    t(14.0, 4.02, 951.72),
    t(14.0, 2.62, 1349.87),
    t(13.0, 0.60, 1194.45),
    t(12.0, 3.86, 6684.75),
    t(11.0, 4.72, 2544.31),
    t(10.0, 0.25, 382.90),
    t(9.0, 0.68, 1059.38),
    t(9.0, 3.83, 20043.67),
    t(9.0, 3.88, 3738.76),
    t(8.0, 5.46, 1751.54),
    t(7.0, 2.58, 3149.16),
    t(7.0, 2.38, 4136.91),
    t(6.0, 5.48, 1592.60),
    t(6.0, 2.34, 3097.88),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 12] = [
    t(1482.0, 0.4443, 3340.6124),
    t(662.0, 0.885, 6681.225),
    t(188.0, 1.288, 10021.837),
    t(41.0, 1.65, 13362.45),
    t(26.0, 0.0, 0.0),
    t(23.0, 2.05, 155.42),
    t(10.0, 1.58, 3.52),
    t(8.0, 2.00, 16703.06),
    t(5.0, 2.82, 242.73),
    t(4.0, 2.02, 3344.14),
    t(3.0, 4.59, 3185.19),
    t(3.0, 0.65, 553.57),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 8] = [
    t(114.0, 3.1416, 0.0),
    t(29.0, 5.64, 6681.22),
    t(24.0, 5.14, 3340.61),
    t(11.0, 6.03, 10021.84),
    t(3.0, 0.13, 13362.45),
    t(3.0, 3.56, 155.42),
    t(1.0, 0.49, 16703.06),
    t(1.0, 1.32, 242.73),
];

#[rustfmt::skip]
static L5: [PeriodicTerm; 2] = [
    t(1.0, 3.14, 0.0),
    t(1.0, 4.04, 6681.22),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 16] = [
    t(3197135.0, 3.7683204, 3340.6124267),
    t(298033.0, 4.106170, 6681.224853),
    t(289105.0, 0.0, 0.0),
    t(31366.0, 4.44651, 10021.83728),
    t(3484.0, 4.7881, 13362.4497),
    t(443.0, 5.026, 3344.136),
    t(443.0, 5.652, 3337.089),
    t(399.0, 5.131, 16703.062),
    t(293.0, 3.793, 2281.230),
    t(182.0, 6.136, 6151.534),
    t(163.0, 4.264, 529.691),
    t(160.0, 2.232, 1059.382),
    t(149.0, 2.165, 5621.843),
    t(143.0, 1.182, 3340.595),
    t(143.0, 3.213, 3340.630),
    t(139.0, 2.418, 8962.455),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 9] = [
    t(350069.0, 5.368478, 3340.612427),
    t(14116.0, 3.14159, 0.0),
    t(9671.0, 5.4788, 6681.2249),
    t(1472.0, 3.2021, 10021.8373),
    t(426.0, 3.408, 13362.450),
    t(102.0, 0.776, 3337.089),
    t(79.0, 3.72, 16703.06),
    t(33.0, 3.46, 5621.84),
    t(26.0, 2.48, 2281.23),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 7] = [
    t(16727.0, 0.60221, 3340.61243),
    t(4987.0, 3.1416, 0.0),
    t(302.0, 5.559, 6681.225),
    t(26.0, 1.90, 13362.45),
    t(21.0, 0.92, 10021.84),
    t(12.0, 2.24, 3340.60),
    t(8.0, 2.25, 16703.06),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 4] = [
    t(607.0, 1.981, 3340.612),
    t(43.0, 0.0, 0.0),
    t(14.0, 1.80, 6681.22),
    t(3.0, 3.45, 10021.84),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 3] = [
    t(13.0, 0.0, 0.0),
    t(11.0, 3.46, 3340.61),
    t(1.0, 0.50, 6681.22),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 45] = [
    t(153033488.0, 0.0, 0.0),
    t(14184953.0, 3.47971284, 3340.61242670),
    t(660776.0, 3.817834, 6681.224853),
    t(46179.0, 4.15595, 10021.83728),
    t(8110.0, 5.5596, 2810.9215),
    t(7485.0, 1.7724, 5621.8429),
    t(5523.0, 1.3644, 2281.2305),
    t(3825.0, 4.4941, 13362.4497),
    t(2484.0, 4.9255, 2942.4634),
    t(2307.0, 0.0908, 2544.3144),
    t(1999.0, 5.3606, 3337.0893),
    t(1960.0, 4.7425, 3344.1355),
    t(1167.0, 2.1126, 5092.1520),
    t(1103.0, 5.0091, 398.1490),
    t(992.0, 5.839, 6151.534),
    t(899.0, 4.408, 529.691),
    t(807.0, 2.102, 1059.382),
    t(798.0, 3.448, 796.298),
    t(741.0, 1.499, 2146.165),
    t(726.0, 1.245, 8432.764),
    t(692.0, 2.134, 8962.455),
    t(633.0, 0.894, 3340.595),
    t(633.0, 2.924, 3340.630),
    t(630.0, 1.287, 1751.540),
    t(574.0, 0.829, 2914.014),
    t(526.0, 5.383, 3738.761),
    t(473.0, 5.199, 3127.313),
    t(348.0, 4.832, 16703.062),
    t(284.0, 2.907, 3532.061),
    t(280.0, 5.257, 6283.076),
    t(276.0, 1.218, 6254.627),
    t(275.0, 2.908, 1748.016),
    t(270.0, 3.764, 5884.927),
    t(239.0, 2.037, 1194.447),
    t(234.0, 5.105, 5486.778),
    t(228.0, 3.255, 6872.673),
    t(223.0, 4.199, 3149.164),
    t(219.0, 5.583, 191.448),
    t(208.0, 5.255, 3340.545),
    t(208.0, 4.846, 3340.680),
    t(186.0, 5.699, 6677.702),
    t(183.0, 5.081, 6684.748),
    t(179.0, 4.184, 3333.499),
    t(176.0, 5.953, 3870.303),
    t(164.0, 3.799, 4136.910),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 27] = [
    t(1107433.0, 2.0325052, 3340.6124267),
    t(103176.0, 2.370718, 6681.224853),
    t(12877.0, 0.0, 0.0),
    t(10816.0, 2.70888, 10021.83728),
    t(1195.0, 3.0470, 13362.4497),
    t(439.0, 2.888, 2281.230),
    t(396.0, 3.423, 3344.136),
    t(183.0, 1.584, 2544.314),
    t(136.0, 3.385, 16703.062),
    t(128.0, 6.043, 3337.089),
    t(128.0, 0.630, 1059.382),
    t(127.0, 1.954, 796.298),
    t(118.0, 2.998, 2146.165),
    t(88.0, 3.42, 398.15),
    t(83.0, 3.86, 3738.76),
    t(76.0, 4.45, 6151.53),
    t(72.0, 2.76, 529.69),
    t(67.0, 2.55, 1751.54),
    t(66.0, 4.41, 1748.02),
    t(58.0, 0.54, 1194.45),
    t(54.0, 0.68, 8962.46),
    t(51.0, 3.73, 6684.75),
    t(49.0, 5.73, 3340.60),
    t(49.0, 1.48, 3340.63),
    t(48.0, 2.58, 3149.16),
    t(48.0, 2.29, 2914.01),
    t(39.0, 2.32, 4136.91),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 11] = [
    t(44242.0, 0.47931, 3340.61243),
    t(8138.0, 0.8700, 6681.2249),
    t(1275.0, 1.2259, 10021.8373),
    t(187.0, 1.573, 13362.450),
    t(52.0, 3.14, 0.0),
    t(41.0, 1.97, 3344.14),
    t(27.0, 1.92, 16703.06),
    t(18.0, 4.43, 2281.23),
    t(12.0, 4.53, 3185.19),
    t(10.0, 5.39, 1059.38),
    t(10.0, 0.42, 796.30),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 6] = [
    t(1113.0, 5.1499, 3340.6124),
    t(424.0, 5.613, 6681.225),
    t(100.0, 5.997, 10021.837),
    t(20.0, 0.08, 13362.45),
    t(5.0, 3.14, 0.0),
    t(3.0, 0.43, 16703.06),
];

#[rustfmt::skip]
static R4: [PeriodicTerm; 4] = [
    t(20.0, 3.58, 3340.61),
    t(16.0, 4.05, 6681.22),
    t(6.0, 4.46, 10021.84),
    t(2.0, 4.84, 13362.45),
];

static L_ORDERS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

static B_ORDERS: [&[PeriodicTerm]; 5] = [&B0, &B1, &B2, &B3, &B4];

static R_ORDERS: [&[PeriodicTerm]; 5] = [&R0, &R1, &R2, &R3, &R4];

pub static MARS: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

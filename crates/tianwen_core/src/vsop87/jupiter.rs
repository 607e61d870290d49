//! Jupiter: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 64] = [
    t(59954691.0, 0.0, 0.0),
    t(9695899.0, 5.0619179, 529.6909651),
    t(573610.0, 1.444062, 7.113547),
    t(306389.0, 5.417347, 1059.381930),
    t(97178.0, 4.14265, 632.78374),
    t(72903.0, 3.64043, 522.57742),
    t(64264.0, 3.41145, 103.09277),
    t(39806.0, 2.29377, 419.48464),
    t(38858.0, 1.27232, 316.39187),
    t(27965.0, 1.78455, 536.80451),
    t(13590.0, 5.77481, 1589.07290),
    t(8769.0, 3.6300, 949.1756),
    t(8246.0, 3.5823, 206.1855),
    t(7368.0, 5.0810, 735.8765),
    t(6263.0, 0.0250, 213.2991),
    t(6114.0, 4.5132, 1162.4747),
    t(5305.0, 4.1863, 1052.2684),
    t(5305.0, 1.3067, 14.2271),
    t(4905.0, 1.3208, 110.2063),
    t(4647.0, 4.6996, 3.9322),
    t(3045.0, 4.3168, 426.5982),
    t(2610.0, 1.5667, 846.0828),
    t(2028.0, 1.0638, 3.1814),
    t(1921.0, 0.9717, 639.8973),
    t(1765.0, 2.1415, 1066.4955),
    t(1723.0, 3.8804, 1265.5675),
    t(1633.0, 3.5820, 515.4639),
    t(1432.0, 4.2968, 625.6702),
    t(973.0, 4.098, 95.979),
    t(884.0, 2.437, 412.371),
    t(733.0, 6.085, 838.969),
    t(731.0, 3.806, 1581.959),
    t(709.0, 1.293, 742.990),
    t(692.0, 6.134, 2118.764),
    t(614.0, 4.109, 1478.867),
    t(582.0, 4.540, 309.278),
    t(495.0, 3.756, 323.505),
    t(441.0, 2.958, 454.909),
    t(417.0, 1.036, 2.448),
    t(390.0, 4.897, 1692.166),
    t(376.0, 4.703, 1368.660),
    t(341.0, 5.715, 533.623),
    t(330.0, 4.740, 0.048),
    t(262.0, 1.877, 0.963),
    t(261.0, 0.820, 380.128),
    t(257.0, 3.724, 199.072),
    t(244.0, 5.220, 728.763),
    t(235.0, 1.227, 909.819),
    t(220.0, 1.651, 543.918),
    t(207.0, 1.855, 525.759),
    t(202.0, 1.807, 1375.774),
    t(197.0, 5.293, 1155.361),
    t(175.0, 3.730, 942.062),
    t(175.0, 3.226, 1898.351),
    t(175.0, 5.910, 956.289),
    t(158.0, 4.365, 1795.258),
    t(151.0, 3.906, 74.782),
    t(149.0, 4.377, 1685.052),
    t(141.0, 3.136, 491.558),
    t(138.0, 1.318, 1169.588),
    t(131.0, 4.169, 1045.155),
    t(117.0, 2.500, 1596.186),
    t(117.0, 3.389, 0.521),
    t(106.0, 4.554, 526.510),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 43] = [
    t(52993480757.0, 0.0, 0.0),
    t(489741.0, 4.220667, 529.690965),
    t(228919.0, 6.026475, 7.113547),
    t(27655.0, 4.57266, 1059.38193),
    t(20721.0, 5.45939, 522.57742),
    t(12106.0, 0.16986, 536.80451),
    t(6068.0, 4.4242, 103.0928),
    t(5434.0, 3.9848, 419.4846),
    t(4238.0, 5.8901, 14.2271),
    t(2212.0, 5.2677, 206.1855),
    t(1746.0, 4.9267, 1589.0729),
    t(1296.0, 5.5513, 3.1814),
    t(1173.0, 5.8565, 1052.2684),
    t(1163.0, 0.5145, 3.9322),
    t(1099.0, 5.3070, 515.4639),
    t(1007.0, 0.4648, 735.8765),
    t(1004.0, 3.1504, 426.5982),
    t(848.0, 5.758, 110.206),
    t(827.0, 4.803, 213.299),
    t(816.0, 0.586, 1066.495),
    t(725.0, 5.518, 639.897),
    t(568.0, 5.989, 625.670),
    t(474.0, 4.132, 412.371),
    t(413.0, 5.737, 95.979),
    t(345.0, 4.242, 632.784),
    t(336.0, 3.732, 1162.475),
    t(234.0, 4.035, 949.176),
    t(234.0, 6.243, 309.278),
    t(199.0, 1.505, 838.969),
    t(195.0, 2.219, 323.505),
    t(187.0, 6.086, 742.990),
    t(184.0, 6.280, 543.918),
    t(171.0, 5.417, 199.072),
    t(131.0, 0.626, 728.763),
    t(115.0, 0.680, 846.083),
    t(115.0, 5.286, 2118.764),
    t(108.0, 4.493, 956.289),
    t(80.0, 5.82, 1045.15),
    t(72.0, 5.34, 942.06),
    t(70.0, 5.97, 532.87),
    t(67.0, 5.73, 21.34),
    t(66.0, 0.13, 526.51),
    t(65.0, 6.09, 1581.96),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 57] = [
    t(47234.0, 4.32148, 7.11355),
    t(38966.0, 0.0, 0.0),
    t(30629.0, 2.93021, 529.69097),
    t(3189.0, 1.0550, 522.5774),
    t(2729.0, 4.8455, 536.8045),
    t(2723.0, 3.4141, 1059.3819),
    t(1721.0, 4.1873, 14.2271),
    t(383.0, 5.768, 419.485),
    t(378.0, 0.760, 515.464),
    t(367.0, 6.055, 103.093),
    t(337.0, 3.786, 3.181),
    t(308.0, 0.694, 206.186),
    t(218.0, 3.814, 1589.073),
    t(199.0, 5.340, 1066.495),
    t(197.0, 2.484, 3.932),
    t(156.0, 1.406, 1052.268),
    t(146.0, 3.814, 639.897),
    t(142.0, 1.634, 426.598),
    t(130.0, 5.837, 412.371),
    t(117.0, 1.414, 625.670),
    t(97.0, 4.03, 110.21),
    t(91.0, 1.11, 95.98),
    t(87.0, 2.52, 632.78),
    t(79.0, 4.64, 543.92),
    t(72.0, 2.22, 735.88),
    t(58.0, 0.83, 199.07),
    t(57.0, 3.12, 213.30),
    t(49.0, 1.67, 309.28),
    t(40.0, 4.02, 21.34),
    t(40.0, 0.62, 323.51),
    t(36.0, 2.33, 728.76),
    t(29.0, 3.61, 10.29),
    t(28.0, 3.24, 838.97),
    t(26.0, 4.50, 742.99),
    t(26.0, 2.51, 1162.47),
    t(25.0, 1.22, 1045.15),
    t(24.0, 3.01, 956.29),
    t(19.0, 4.29, 532.87),
    t(18.0, 0.81, 508.35),
    t(17.0, 4.20, 2118.76),
    t(17.0, 1.83, 526.51),
    t(15.0, 5.81, 1596.19),
    t(15.0, 0.68, 942.06),
    t(15.0, 4.00, 117.32),
    t(14.0, 5.95, 316.39),
    t(14.0, 1.80, 302.16),
    t(13.0, 2.52, 88.87),
    t(13.0, 4.37, 1169.59),
    t(11.0, 4.44, 525.76),
    t(10.0, 1.72, 1581.96),
    t(9.0, 2.18, 1155.36),
    t(9.0, 3.29, 220.41),
    t(9.0, 3.32, 831.86),
    t(8.0, 5.76, 846.08),
    t(8.0, 2.71, 533.62),
    t(7.0, 2.18, 1265.57),
    t(6.0, 0.50, 949.18),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 28] = [
    t(6502.0, 2.5986, 7.1135),
    t(1357.0, 1.3464, 529.6910),
    t(471.0, 2.475, 14.227),
    t(417.0, 3.245, 536.805),
    t(353.0, 2.974, 522.577),
    t(155.0, 2.076, 1059.382),
    t(87.0, 2.51, 515.46),
    t(44.0, 0.0, 0.0),
    t(34.0, 3.83, 1066.50),
    t(28.0, 2.45, 206.19),
    t(24.0, 1.28, 412.37),
    t(23.0, 2.98, 543.92),
    t(20.0, 2.10, 639.90),
    t(20.0, 1.40, 419.48),
    t(19.0, 1.59, 103.09),
    t(17.0, 2.30, 21.34),
    t(17.0, 2.60, 1589.07),
    t(16.0, 3.15, 625.67),
    t(16.0, 3.36, 1052.27),
    t(13.0, 2.76, 95.98),
    t(13.0, 2.54, 199.07),
    t(13.0, 6.27, 426.60),
    t(9.0, 1.76, 10.29),
    t(9.0, 2.27, 110.21),
    t(7.0, 3.43, 309.28),
    t(7.0, 4.04, 728.76),
    t(6.0, 2.52, 508.35),
    t(5.0, 2.91, 1045.15),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 18] = [
    t(669.0, 0.853, 7.114),
    t(114.0, 3.142, 0.0),
    t(100.0, 0.743, 14.227),
    t(50.0, 1.65, 536.80),
    t(44.0, 5.82, 529.69),
    t(32.0, 4.86, 522.58),
    t(15.0, 4.29, 515.46),
    t(9.0, 0.71, 1059.38),
    t(5.0, 1.30, 543.92),
    t(4.0, 2.32, 1066.50),
    t(4.0, 0.48, 21.34),
    t(3.0, 3.00, 412.37),
    t(2.0, 0.40, 639.90),
    t(2.0, 4.26, 199.07),
    t(2.0, 4.91, 625.67),
    t(2.0, 4.26, 206.19),
    t(2.0, 5.25, 1052.27),
    t(2.0, 4.07, 103.09),
];

#[rustfmt::skip]
static L5: [PeriodicTerm; 5] = [
    t(50.0, 5.26, 7.11),
    t(16.0, 5.25, 14.23),
    t(4.0, 0.01, 536.80),
    t(2.0, 1.10, 522.58),
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 26] = [
    t(2268616.0, 3.5585261, 529.6909651),
    t(110090.0, 0.0, 0.0),
    t(109972.0, 3.908093, 1059.381930),
    t(8101.0, 3.6051, 522.5774),
    t(6438.0, 0.3063, 536.8045),
    t(6044.0, 4.2588, 1589.0729),
    t(1107.0, 2.9853, 1162.4747),
    t(944.0, 1.675, 426.598),
    t(942.0, 2.936, 1052.268),
    t(894.0, 1.754, 7.114),
    t(836.0, 5.179, 103.093),
    t(767.0, 2.155, 632.784),
    t(684.0, 3.678, 213.299),
    t(629.0, 0.643, 1066.495),
    t(559.0, 0.014, 846.083),
    t(532.0, 2.703, 110.206),
    t(464.0, 1.173, 949.176),
    t(431.0, 2.608, 419.485),
    t(351.0, 4.611, 2118.764),
    t(132.0, 4.778, 742.990),
    t(123.0, 3.350, 1692.166),
    t(116.0, 1.387, 323.505),
    t(115.0, 5.049, 316.392),
    t(104.0, 3.701, 515.464),
    t(103.0, 2.319, 1478.867),
    t(102.0, 3.153, 1581.959),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 22] = [
    t(177352.0, 5.701665, 529.690965),
    t(3230.0, 5.7794, 1059.3819),
    t(3081.0, 5.4746, 522.5774),
    t(2212.0, 4.7348, 536.8045),
    t(1694.0, 3.1416, 0.0),
    t(346.0, 4.746, 1052.268),
    t(234.0, 5.189, 1066.495),
    t(196.0, 6.186, 7.114),
    t(150.0, 3.927, 1589.073),
    t(114.0, 3.439, 632.784),
    t(97.0, 2.91, 949.18),
    t(82.0, 5.08, 1162.47),
    t(77.0, 2.51, 103.09),
    t(77.0, 0.61, 419.48),
    t(74.0, 5.50, 515.46),
    t(61.0, 5.45, 213.30),
    t(50.0, 3.95, 735.88),
    t(46.0, 0.54, 110.21),
    t(45.0, 1.90, 846.08),
    t(37.0, 4.70, 543.92),
    t(36.0, 6.11, 316.39),
    t(32.0, 4.92, 1581.96),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 14] = [
    t(8094.0, 1.4632, 529.6910),
    t(813.0, 3.1416, 0.0),
    t(742.0, 0.957, 522.577),
    t(399.0, 2.899, 536.805),
    t(342.0, 1.447, 1059.382),
    t(74.0, 0.41, 1052.27),
    t(46.0, 3.48, 1066.50),
    t(30.0, 1.93, 1589.07),
    t(29.0, 0.99, 515.46),
    t(23.0, 4.27, 7.11),
    t(14.0, 2.92, 543.92),
    t(12.0, 5.22, 632.78),
    t(11.0, 4.88, 949.18),
    t(6.0, 6.21, 1045.15),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 7] = [
    t(252.0, 3.381, 529.691),
    t(122.0, 2.733, 522.577),
    t(49.0, 1.04, 536.80),
    t(11.0, 2.31, 1066.50),
    t(8.0, 2.77, 515.46),
    t(7.0, 4.25, 1059.38),
    t(6.0, 1.78, 1052.27),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 6] = [
    t(15.0, 4.53, 522.58),
    t(5.0, 4.47, 529.69),
    t(4.0, 5.44, 536.80),
    t(3.0, 0.0, 0.0),
    t(2.0, 4.52, 515.46),
    t(1.0, 4.20, 1052.27),
];

#[rustfmt::skip]
static B5: [PeriodicTerm; 1] = [
    t(1.0, 0.09, 522.58),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 46] = [
    t(520887429.0, 0.0, 0.0),
    t(25209327.0, 3.49108640, 529.69096509),
    t(610600.0, 3.841154, 1059.381930),
    t(282029.0, 2.574199, 632.783739),
    t(187647.0, 2.075904, 522.577418),
    t(86793.0, 0.71001, 419.48464),
    t(72063.0, 0.21466, 536.80451),
    t(65517.0, 5.97996, 316.39187),
    t(30135.0, 2.16132, 949.17561),
    t(29135.0, 1.67759, 103.09277),
    t(23947.0, 0.27458, 7.11355),
    t(23453.0, 3.54023, 735.87651),
    t(22284.0, 4.19363, 1589.07290),
    t(13033.0, 2.96043, 1162.47470),
    t(12749.0, 2.71550, 1052.26838),
    t(9703.0, 1.9067, 206.1855),
    t(9161.0, 4.4135, 213.2991),
    t(7895.0, 2.4791, 426.5982),
    t(7058.0, 2.1818, 1265.5675),
    t(6138.0, 6.2642, 846.0828),
    t(5477.0, 5.6573, 639.8973),
    t(4170.0, 2.0161, 515.4639),
    t(4137.0, 2.7222, 625.6702),
    t(3503.0, 0.5653, 1066.4955),
    t(2617.0, 2.0099, 1581.9593),
    t(2500.0, 4.5518, 838.9693),
    t(2128.0, 6.1275, 742.9901),
    t(1912.0, 0.8562, 412.3711),
    t(1611.0, 3.0887, 1368.6603),
    t(1479.0, 2.6803, 1478.8666),
    t(1231.0, 1.8904, 323.5054),
    t(1217.0, 1.8017, 110.2063),
    t(1015.0, 1.3867, 454.9094),
    t(999.0, 2.872, 309.278),
    t(961.0, 4.549, 2118.764),
    t(886.0, 4.148, 533.623),
    t(821.0, 1.593, 1898.351),
    t(812.0, 5.941, 909.819),
    t(777.0, 3.677, 728.763),
    t(727.0, 3.988, 1155.361),
    t(655.0, 2.791, 1685.052),
    t(654.0, 3.382, 1692.166),
    t(621.0, 4.823, 956.289),
    t(615.0, 2.276, 942.062),
    t(562.0, 0.081, 543.918),
    t(542.0, 0.284, 525.759),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 43] = [
    t(1271802.0, 2.6493751, 529.6909651),
    t(61662.0, 3.00076, 1059.38193),
    t(53444.0, 3.89718, 522.57742),
    t(41390.0, 0.0, 0.0),
    t(31185.0, 4.88277, 536.80451),
    t(11847.0, 2.41330, 419.48464),
    t(9166.0, 4.7598, 7.1135),
    t(3404.0, 3.3469, 1589.0729),
    t(3203.0, 5.2108, 735.8765),
    t(3176.0, 2.7930, 103.0928),
    t(2806.0, 3.7422, 515.4639),
    t(2677.0, 4.3305, 1052.2684),
    t(2600.0, 3.6344, 206.1855),
    t(2412.0, 1.4695, 426.5982),
    t(2101.0, 3.9276, 639.8973),
    t(1646.0, 5.3095, 1066.4955),
    t(1641.0, 4.4163, 625.6702),
    t(1050.0, 3.1611, 213.2991),
    t(1025.0, 2.5543, 412.3711),
    t(806.0, 2.678, 632.784),
    t(741.0, 2.171, 1162.475),
    t(677.0, 6.250, 838.969),
    t(567.0, 4.577, 742.990),
    t(485.0, 2.469, 949.176),
    t(469.0, 4.710, 543.918),
    t(445.0, 0.403, 323.505),
    t(416.0, 5.368, 728.763),
    t(402.0, 4.605, 309.278),
    t(347.0, 4.681, 14.227),
    t(338.0, 3.168, 956.289),
    t(261.0, 5.343, 846.083),
    t(247.0, 3.923, 942.062),
    t(220.0, 4.842, 1368.660),
    t(203.0, 5.600, 1155.361),
    t(200.0, 4.439, 1045.155),
    t(197.0, 3.706, 2118.764),
    t(196.0, 3.759, 199.072),
    t(184.0, 4.265, 95.979),
    t(180.0, 4.402, 532.872),
    t(170.0, 4.846, 526.510),
    t(146.0, 6.130, 533.623),
    t(133.0, 1.322, 110.206),
    t(132.0, 4.512, 525.759),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 36] = [
    t(79645.0, 1.35866, 529.69097),
    t(8252.0, 5.7777, 522.5774),
    t(7030.0, 3.2748, 536.8045),
    t(5314.0, 1.8384, 1059.3819),
    t(1861.0, 2.9768, 7.1135),
    t(964.0, 5.480, 515.464),
    t(836.0, 4.199, 419.485),
    t(498.0, 3.142, 0.0),
    t(427.0, 2.228, 639.897),
    t(406.0, 3.783, 1066.495),
    t(377.0, 2.242, 1589.073),
    t(363.0, 5.368, 206.186),
    t(342.0, 6.099, 1052.268),
    t(339.0, 6.127, 625.670),
    t(333.0, 0.003, 426.598),
    t(280.0, 4.262, 412.371),
    t(257.0, 0.963, 632.784),
    t(230.0, 0.705, 735.877),
    t(201.0, 3.069, 543.918),
    t(200.0, 4.429, 103.093),
    t(139.0, 2.932, 14.227),
    t(114.0, 0.787, 728.763),
    t(95.0, 1.70, 838.97),
    t(86.0, 5.14, 323.51),
    t(83.0, 0.06, 309.28),
    t(80.0, 2.98, 742.99),
    t(75.0, 1.60, 956.29),
    t(70.0, 1.51, 213.30),
    t(67.0, 5.47, 199.07),
    t(62.0, 6.10, 1045.15),
    t(56.0, 0.96, 1162.47),
    t(52.0, 5.58, 942.06),
    t(50.0, 2.72, 532.87),
    t(45.0, 5.52, 508.35),
    t(44.0, 0.27, 526.51),
    t(40.0, 5.95, 95.98),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 28] = [
    t(3519.0, 6.0580, 529.6910),
    t(1073.0, 1.6732, 536.8045),
    t(916.0, 1.413, 522.577),
    t(342.0, 0.523, 1059.382),
    t(255.0, 1.196, 7.114),
    t(222.0, 0.952, 515.464),
    t(90.0, 3.14, 0.0),
    t(69.0, 2.27, 1066.50),
    t(58.0, 1.41, 543.92),
    t(58.0, 0.53, 639.90),
    t(51.0, 5.98, 412.37),
    t(47.0, 1.58, 625.67),
    t(43.0, 6.12, 419.48),
    t(37.0, 1.18, 14.23),
    t(34.0, 1.67, 1052.27),
    t(34.0, 0.85, 206.19),
    t(31.0, 1.04, 1589.07),
    t(30.0, 4.63, 426.60),
    t(21.0, 2.50, 728.76),
    t(15.0, 0.89, 199.07),
    t(14.0, 0.96, 508.35),
    t(13.0, 1.50, 1045.15),
    t(12.0, 2.61, 735.88),
    t(12.0, 3.56, 323.51),
    t(11.0, 1.79, 309.28),
    t(11.0, 6.28, 956.29),
    t(10.0, 6.26, 103.09),
    t(9.0, 3.45, 838.97),
];

#[rustfmt::skip]
static R4: [PeriodicTerm; 6] = [
    t(129.0, 0.084, 536.805),
    t(113.0, 4.249, 529.691),
    t(83.0, 3.30, 522.58),
    t(38.0, 2.73, 515.46),
    t(27.0, 5.69, 7.11),
    t(11.0, 5.20, 1059.38),
];

#[rustfmt::skip]
static R5: [PeriodicTerm; 6] = [
    t(11.0, 4.75, 536.80),
    t(4.0, 5.92, 522.58),
    t(2.0, 5.57, 515.46),
    t(2.0, 4.30, 543.92),
    t(2.0, 3.69, 7.11),
    t(2.0, 4.13, 1059.38),
];

static L_ORDERS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

static B_ORDERS: [&[PeriodicTerm]; 6] = [&B0, &B1, &B2, &B3, &B4, &B5];

static R_ORDERS: [&[PeriodicTerm]; 6] = [&R0, &R1, &R2, &R3, &R4, &R5];

pub static JUPITER: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

//! Saturn: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 70] = [
    t(87401354.0, 0.0, 0.0),
    t(11107660.0, 3.96205090, 213.29909544),
    t(1414151.0, 4.5858152, 7.1135470),
    t(398379.0, 0.521120, 206.185548),
    t(350769.0, 3.303299, 426.598191),
    t(206816.0, 0.246584, 103.092774),
    t(79271.0, 3.84007, 220.41264),
    t(23990.0, 4.66977, 110.20632),
    t(16574.0, 0.43719, 419.48464),
    t(15820.0, 0.93809, 632.78374),
    t(15054.0, 2.71670, 639.89729),
    t(14907.0, 5.76903, 316.39187),
    t(14610.0, 1.56519, 3.93215),
    t(13160.0, 4.44891, 14.22709),
    t(13005.0, 5.98119, 11.04570),
    t(10725.0, 3.12940, 202.25340),
    t(6126.0, 1.7633, 277.0350),
    t(5863.0, 0.2366, 529.6910),
    t(5228.0, 4.2078, 3.1814),
    t(5020.0, 3.1779, 433.7117),
    t(4593.0, 0.6198, 199.0720),
    t(4006.0, 2.2448, 63.7359),
    t(3874.0, 3.2228, 138.5175),
    t(3269.0, 0.7749, 949.1756),
    t(2954.0, 0.9828, 95.9792),
    t(2461.0, 2.0316, 735.8765),
    t(1758.0, 3.2658, 522.5774),
    t(1640.0, 5.5050, 846.0828),
    t(1581.0, 4.3727, 309.2783),
    t(1391.0, 4.0233, 323.5054),
    t(1124.0, 2.8373, 415.5525),
    t(1087.0, 4.1834, 2.4477),
    t(1017.0, 3.7170, 227.5262),
    t(957.0, 0.507, 1265.567),
    t(853.0, 3.421, 175.166),
    t(849.0, 3.191, 209.367),
    t(789.0, 5.007, 0.963),
    t(749.0, 2.144, 853.196),
    t(744.0, 5.253, 224.345),
    t(687.0, 1.747, 1052.268),
    t(654.0, 1.599, 0.048),
    t(634.0, 2.299, 412.371),
    t(625.0, 0.970, 210.118),
    t(580.0, 3.093, 74.782),
    t(546.0, 2.127, 350.332),
    t(543.0, 1.518, 9.561),
    t(530.0, 4.449, 117.320),
    t(478.0, 2.965, 137.033),
    t(474.0, 5.475, 742.990),
    t(452.0, 1.044, 490.334),
    t(449.0, 1.290, 127.472),
    t(372.0, 2.278, 217.231),
    t(355.0, 3.013, 838.969),
    t(347.0, 1.539, 340.771),
    t(343.0, 0.246, 0.521),
    t(330.0, 0.247, 1581.959),
    t(322.0, 0.961, 203.738),
    t(322.0, 2.572, 647.011),
    t(309.0, 3.495, 216.480),
    t(287.0, 2.370, 351.817),
    t(278.0, 0.400, 211.815),
    t(249.0, 1.470, 1368.660),
    t(227.0, 4.910, 12.530),
    t(220.0, 4.204, 200.769),
    t(209.0, 1.345, 625.670),
    t(208.0, 0.483, 1162.475),
    t(208.0, 1.283, 39.357),
    t(204.0, 6.011, 265.989),
    t(185.0, 1.437, 284.149),
    t(184.0, 3.743, 1.484),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 79] = [
    t(21354295596.0, 0.0, 0.0),
    t(1296855.0, 1.8282054, 213.2990954),
    t(564348.0, 2.885001, 7.113547),
    t(107679.0, 2.277699, 206.185548),
    t(98323.0, 1.08070, 426.59819),
    t(40255.0, 2.04128, 220.41264),
    t(19942.0, 1.27955, 103.09277),
    t(10512.0, 2.74880, 14.22709),
    t(6939.0, 0.4049, 639.8973),
    t(4803.0, 2.4419, 419.4846),
    t(4056.0, 2.9217, 110.2063),
    t(3769.0, 3.6497, 3.9322),
    t(3385.0, 2.4169, 3.1814),
    t(3302.0, 1.2626, 433.7117),
    t(3071.0, 2.3274, 199.0720),
    t(1953.0, 3.5639, 11.0457),
    t(1249.0, 2.6280, 95.9792),
    t(922.0, 1.961, 227.526),
    t(706.0, 4.417, 529.691),
    t(650.0, 6.174, 202.253),
    t(628.0, 6.111, 309.278),
    t(487.0, 6.040, 853.196),
    t(479.0, 4.988, 522.577),
    t(468.0, 4.617, 63.736),
    t(417.0, 2.117, 323.505),
    t(408.0, 1.299, 209.367),
    t(352.0, 2.317, 632.784),
    t(344.0, 3.959, 412.371),
    t(340.0, 3.634, 316.392),
    t(336.0, 3.772, 735.877),
    t(332.0, 2.861, 210.118),
    t(289.0, 2.733, 117.320),
    t(281.0, 5.744, 2.448),
    t(266.0, 0.543, 647.011),
    t(230.0, 1.644, 216.480),
    t(192.0, 2.965, 224.345),
    t(173.0, 4.077, 846.083),
    t(167.0, 2.597, 21.341),
    t(136.0, 2.286, 10.295),
    t(131.0, 3.441, 742.990),
    t(128.0, 4.095, 217.231),
    t(109.0, 6.161, 415.552),
    t(98.0, 4.73, 838.97),
    t(94.0, 3.48, 1052.27),
    t(92.0, 3.95, 88.87),
    t(87.0, 1.22, 440.83),
    t(83.0, 3.11, 625.67),
    t(78.0, 6.24, 302.16),
    t(67.0, 0.29, 4.67),
    t(66.0, 5.65, 9.56),
    t(62.0, 4.29, 127.47),
    t(62.0, 1.83, 195.14),
    t(58.0, 2.48, 191.96),
    t(57.0, 5.02, 137.03),
    t(55.0, 0.28, 74.78),
    t(54.0, 5.13, 490.33),
    t(51.0, 1.46, 536.80),
    t(47.0, 1.18, 149.56),
    t(47.0, 5.15, 515.46),
    t(46.0, 2.23, 956.29),
    t(44.0, 2.71, 5.42),
    t(40.0, 0.41, 269.92),
    t(40.0, 3.89, 728.76),
    t(38.0, 0.65, 422.67),
    t(38.0, 2.53, 12.53),
    t(37.0, 3.78, 2.92),
    t(35.0, 6.08, 5.63),
    t(34.0, 3.21, 1368.66),
    t(33.0, 4.64, 277.03),
    t(33.0, 5.43, 1066.50),
    t(33.0, 0.30, 351.82),
    t(32.0, 4.39, 1155.36),
    t(31.0, 2.43, 52.69),
    t(30.0, 2.84, 203.00),
    t(30.0, 6.19, 284.15),
    t(30.0, 3.39, 1059.38),
    t(29.0, 2.03, 330.62),
    t(28.0, 2.74, 265.99),
    t(26.0, 4.51, 340.77),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 34] = [
    t(116441.0, 1.179879, 7.113547),
    t(91921.0, 0.07425, 213.29910),
    t(90592.0, 0.0, 0.0),
    t(15277.0, 4.06492, 206.18555),
    t(10631.0, 0.25778, 220.41264),
    t(10605.0, 5.40964, 426.59819),
    t(4265.0, 1.0460, 14.2271),
    t(1216.0, 2.9186, 103.0928),
    t(1165.0, 4.6094, 639.8973),
    t(1082.0, 5.6913, 433.7117),
    t(1045.0, 4.0421, 199.0720),
    t(1020.0, 0.6337, 3.1814),
    t(634.0, 4.388, 419.485),
    t(549.0, 5.573, 3.932),
    t(457.0, 1.268, 110.206),
    t(425.0, 0.209, 227.526),
    t(274.0, 4.288, 95.979),
    t(162.0, 1.381, 11.046),
    t(129.0, 1.566, 309.278),
    t(117.0, 3.881, 853.196),
    t(105.0, 4.900, 647.011),
    t(101.0, 0.893, 21.341),
    t(96.0, 2.91, 316.39),
    t(95.0, 5.63, 412.37),
    t(85.0, 5.73, 209.37),
    t(83.0, 6.05, 216.48),
    t(82.0, 1.02, 117.32),
    t(75.0, 4.76, 210.12),
    t(67.0, 0.46, 522.58),
    t(66.0, 0.48, 10.29),
    t(64.0, 0.35, 632.78),
    t(61.0, 4.88, 295.05),
    t(54.0, 3.81, 202.25),
    t(54.0, 4.53, 217.23),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 44] = [
    t(16039.0, 5.73945, 7.11355),
    t(4250.0, 4.5854, 213.2991),
    t(1907.0, 4.7608, 220.4126),
    t(1466.0, 5.9133, 206.1855),
    t(1162.0, 5.6197, 14.2271),
    t(1067.0, 3.6082, 426.5982),
    t(239.0, 3.861, 433.712),
    t(237.0, 5.768, 199.072),
    t(166.0, 5.116, 3.181),
    t(151.0, 2.736, 639.897),
    t(131.0, 4.743, 227.526),
    t(63.0, 0.23, 419.48),
    t(62.0, 4.74, 103.09),
    t(40.0, 5.47, 21.34),
    t(40.0, 5.96, 95.98),
    t(39.0, 5.83, 110.21),
    t(28.0, 3.01, 647.01),
    t(25.0, 0.99, 3.93),
    t(19.0, 1.92, 853.20),
    t(18.0, 4.97, 10.29),
    t(18.0, 1.03, 412.37),
    t(18.0, 4.20, 216.48),
    t(18.0, 3.32, 309.28),
    t(16.0, 3.90, 440.83),
    t(16.0, 5.62, 117.32),
    t(13.0, 1.18, 88.87),
    t(11.0, 5.58, 11.05),
    t(11.0, 5.93, 191.96),
    t(10.0, 3.95, 209.37),
    t(9.0, 3.39, 302.16),
    t(8.0, 4.88, 323.51),
    t(7.0, 0.38, 632.78),
    t(6.0, 2.25, 522.58),
    t(6.0, 1.06, 210.12),
    t(5.0, 4.64, 234.64),
    t(4.0, 3.14, 0.0),
    t(4.0, 2.31, 515.46),
    t(3.0, 2.20, 860.31),
    t(3.0, 0.59, 529.69),
    t(3.0, 4.93, 224.34),
    t(3.0, 0.42, 625.67),
    t(2.0, 4.77, 330.62),
    t(2.0, 3.35, 518.65),
    t(2.0, 3.20, 202.25),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 27] = [
    t(1662.0, 3.9983, 7.1135),
    t(257.0, 2.984, 220.413),
    t(236.0, 3.902, 14.227),
    t(149.0, 2.741, 213.299),
    t(114.0, 3.142, 0.0),
    t(110.0, 1.515, 206.186),
    t(68.0, 1.72, 426.60),
    t(40.0, 2.05, 433.71),
    t(38.0, 1.24, 199.07),
    t(31.0, 3.01, 227.53),
    t(15.0, 0.83, 639.90),
    t(9.0, 3.71, 21.34),
    t(6.0, 2.42, 419.48),
    t(6.0, 1.16, 647.01),
    t(4.0, 1.45, 95.98),
    t(4.0, 2.12, 440.83),
    t(3.0, 4.09, 110.21),
    t(3.0, 2.77, 412.37),
    t(3.0, 3.01, 88.87),
    t(3.0, 0.00, 853.20),
    t(3.0, 0.39, 103.09),
    t(2.0, 3.78, 117.32),
    t(2.0, 2.83, 234.64),
    t(2.0, 5.08, 309.28),
    t(2.0, 2.24, 216.48),
    t(2.0, 5.19, 302.16),
    t(1.0, 1.55, 191.96),
];

#[rustfmt::skip]
static L5: [PeriodicTerm; 12] = [
    t(124.0, 2.259, 7.114),
    t(34.0, 2.16, 14.23),
    t(28.0, 1.20, 220.41),
    t(6.0, 1.22, 227.53),
    t(5.0, 0.24, 433.71),
    t(4.0, 6.23, 426.60),
    t(3.0, 2.97, 199.07),
    t(3.0, 4.29, 206.19),
    t(2.0, 6.25, 213.30),
    t(1.0, 5.28, 639.90),
    t(1.0, 0.24, 440.83),
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 34] = [
    t(4330678.0, 3.6028443, 213.2990954),
    t(240348.0, 2.852385, 426.598191),
    t(84746.0, 0.0, 0.0),
    t(34116.0, 0.57297, 206.18555),
    t(30863.0, 3.48442, 220.41264),
    t(14734.0, 2.11847, 639.89729),
    t(9917.0, 5.7900, 419.4846),
    t(6994.0, 4.7360, 7.1135),
    t(4808.0, 5.4331, 316.3919),
    t(4788.0, 4.9651, 110.2063),
    t(3432.0, 2.7326, 433.7117),
    t(1506.0, 6.0130, 103.0928),
    t(1060.0, 5.6310, 529.6910),
    t(969.0, 5.204, 632.784),
    t(942.0, 1.396, 853.196),
    t(708.0, 3.803, 323.505),
    t(552.0, 5.131, 202.253),
    t(400.0, 3.359, 227.526),
    t(319.0, 3.626, 209.367),
    t(316.0, 1.997, 647.011),
    t(314.0, 0.465, 217.231),
    t(284.0, 4.886, 224.345),
    t(236.0, 2.139, 11.046),
    t(215.0, 5.950, 846.083),
    t(209.0, 2.120, 415.552),
    t(207.0, 0.730, 199.072),
    t(179.0, 2.954, 63.736),
    t(141.0, 0.644, 490.334),
    t(139.0, 4.595, 14.227),
    t(139.0, 1.998, 735.877),
    t(135.0, 5.245, 742.990),
    t(122.0, 3.115, 522.577),
    t(116.0, 3.109, 216.480),
    t(114.0, 0.963, 210.118),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 32] = [
    t(397555.0, 5.332900, 213.299095),
    t(49479.0, 3.14159, 0.0),
    t(18572.0, 6.09919, 426.59819),
    t(14801.0, 2.30586, 206.18555),
    t(9644.0, 1.6967, 220.4126),
    t(3757.0, 1.2543, 419.4846),
    t(2717.0, 5.9117, 639.8973),
    t(1455.0, 0.8516, 433.7117),
    t(1291.0, 2.9177, 7.1135),
    t(853.0, 0.436, 316.392),
    t(298.0, 0.919, 632.784),
    t(292.0, 5.316, 853.196),
    t(284.0, 1.619, 227.526),
    t(275.0, 3.889, 103.093),
    t(172.0, 0.052, 647.011),
    t(166.0, 2.444, 199.072),
    t(158.0, 5.209, 110.206),
    t(128.0, 1.207, 529.691),
    t(110.0, 2.457, 217.231),
    t(82.0, 2.76, 210.12),
    t(81.0, 2.86, 14.23),
    t(69.0, 1.66, 202.25),
    t(65.0, 1.26, 216.48),
    t(61.0, 1.25, 209.37),
    t(59.0, 1.82, 323.51),
    t(46.0, 0.82, 440.83),
    t(36.0, 1.82, 224.34),
    t(34.0, 2.84, 117.32),
    t(33.0, 1.31, 412.37),
    t(32.0, 1.19, 846.08),
    t(27.0, 4.65, 1066.50),
    t(27.0, 4.44, 11.05),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 29] = [
    t(20630.0, 0.50482, 213.29910),
    t(3720.0, 3.9983, 206.1855),
    t(1627.0, 6.1819, 220.4126),
    t(1346.0, 0.0, 0.0),
    t(706.0, 3.039, 419.485),
    t(365.0, 5.099, 426.598),
    t(330.0, 5.279, 433.712),
    t(219.0, 3.828, 639.897),
    t(139.0, 1.043, 7.114),
    t(104.0, 6.157, 227.526),
    t(93.0, 1.98, 316.39),
    t(71.0, 4.15, 199.07),
    t(52.0, 2.88, 632.78),
    t(49.0, 4.43, 647.01),
    t(41.0, 3.16, 853.20),
    t(29.0, 4.53, 210.12),
    t(24.0, 1.12, 14.23),
    t(21.0, 4.35, 217.23),
    t(20.0, 5.31, 440.83),
    t(18.0, 0.85, 110.21),
    t(17.0, 5.68, 216.48),
    t(16.0, 4.26, 103.09),
    t(14.0, 3.00, 412.37),
    t(12.0, 2.53, 529.69),
    t(8.0, 3.32, 202.25),
    t(7.0, 5.56, 209.37),
    t(7.0, 0.29, 323.51),
    t(6.0, 1.16, 117.32),
    t(6.0, 3.61, 860.31),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 11] = [
    t(666.0, 1.990, 213.299),
    t(632.0, 5.698, 206.186),
    t(398.0, 0.0, 0.0),
    t(188.0, 4.338, 220.413),
    t(92.0, 4.84, 419.48),
    t(52.0, 3.42, 433.71),
    t(42.0, 2.38, 426.60),
    t(26.0, 4.40, 227.53),
    t(21.0, 5.85, 199.07),
    t(18.0, 1.99, 639.90),
    t(11.0, 5.37, 7.11),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 12] = [
    t(80.0, 1.12, 206.19),
    t(32.0, 3.12, 213.30),
    t(17.0, 2.48, 220.41),
    t(12.0, 3.14, 0.0),
    t(9.0, 0.38, 419.48),
    t(6.0, 1.56, 433.71),
    t(5.0, 2.63, 227.53),
    t(5.0, 1.28, 199.07),
    t(1.0, 1.43, 426.60),
    t(1.0, 0.67, 647.01),
    t(1.0, 1.72, 440.83),
    t(1.0, 6.18, 639.90),
];

#[rustfmt::skip]
static B5: [PeriodicTerm; 2] = [
    t(8.0, 2.82, 206.19),
    t(1.0, 0.51, 220.41),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 44] = [
    t(955758136.0, 0.0, 0.0),
    t(52921382.0, 2.39226220, 213.29909544),
    t(1873680.0, 5.2354961, 206.1855484),
    t(1464664.0, 1.6476305, 426.5981909),
    t(821891.0, 5.935200, 316.391870),
    t(547507.0, 5.015326, 103.092774),
    t(371684.0, 2.271148, 220.412642),
    t(361778.0, 3.139043, 7.113547),
    t(140618.0, 5.704067, 632.783739),
    t(108975.0, 3.293136, 110.206321),
    t(69007.0, 5.94100, 419.48464),
    t(61053.0, 0.94038, 639.89729),
    t(48913.0, 1.55733, 202.25340),
    t(34144.0, 0.19519, 277.03499),
    t(32402.0, 5.47085, 949.17561),
    t(20937.0, 0.46349, 735.87651),
    t(20839.0, 1.52103, 433.71174),
    t(20747.0, 5.33256, 199.07200),
    t(15298.0, 3.05944, 529.69097),
    t(14296.0, 2.60434, 323.50542),
    t(12884.0, 1.64892, 138.51750),
    t(11993.0, 5.98051, 846.08283),
    t(11380.0, 1.73106, 522.57742),
    t(9796.0, 5.2048, 1265.5675),
    t(7753.0, 5.8519, 95.9792),
    t(6771.0, 3.0043, 14.2271),
    t(6466.0, 0.1773, 1052.2684),
    t(5850.0, 1.4552, 415.5525),
    t(5307.0, 0.5974, 63.7359),
    t(4696.0, 2.1492, 227.5262),
    t(4044.0, 1.6401, 209.3669),
    t(3688.0, 0.7802, 412.3711),
    t(3461.0, 1.8509, 175.1661),
    t(3420.0, 4.9455, 1581.9593),
    t(3401.0, 0.5539, 350.3321),
    t(3376.0, 3.6953, 224.3448),
    t(2976.0, 5.6847, 210.1177),
    t(2885.0, 1.3876, 838.9693),
    t(2881.0, 0.1796, 853.1964),
    t(2508.0, 3.5385, 742.9901),
    t(2448.0, 6.1841, 1368.6603),
    t(2406.0, 2.9656, 117.3199),
    t(2174.0, 0.0151, 340.7709),
    t(2024.0, 5.0541, 11.0457),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 38] = [
    t(6182981.0, 0.2584352, 213.2990954),
    t(506578.0, 0.711147, 206.185548),
    t(341394.0, 5.796358, 426.598191),
    t(188491.0, 0.472157, 220.412642),
    t(186262.0, 3.141593, 0.0),
    t(143891.0, 1.407449, 7.113547),
    t(49621.0, 6.01744, 103.09277),
    t(20928.0, 5.09246, 639.89729),
    t(19953.0, 1.17560, 419.48464),
    t(18840.0, 1.60820, 110.20632),
    t(13877.0, 0.75886, 199.07200),
    t(12893.0, 5.94330, 433.71174),
    t(5397.0, 1.2885, 14.2271),
    t(4869.0, 0.8679, 323.5054),
    t(4247.0, 0.3930, 227.5262),
    t(3252.0, 1.2585, 95.9792),
    t(3081.0, 3.4366, 522.5774),
    t(2909.0, 4.6068, 202.2534),
    t(2856.0, 2.1673, 735.8765),
    t(1988.0, 2.4505, 412.3711),
    t(1941.0, 6.0239, 209.3669),
    t(1581.0, 1.2919, 210.1177),
    t(1340.0, 4.3080, 853.1964),
    t(1316.0, 1.2530, 117.3199),
    t(1203.0, 1.8665, 316.3919),
    t(1091.0, 0.0753, 216.4805),
    t(966.0, 0.480, 632.784),
    t(954.0, 5.152, 647.011),
    t(898.0, 0.983, 529.691),
    t(882.0, 1.885, 1052.268),
    t(874.0, 1.402, 224.345),
    t(785.0, 3.064, 838.969),
    t(740.0, 1.382, 625.670),
    t(658.0, 4.144, 309.278),
    t(650.0, 1.725, 742.990),
    t(613.0, 3.033, 63.736),
    t(599.0, 2.549, 217.231),
    t(503.0, 2.130, 3.932),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 32] = [
    t(436902.0, 4.786717, 213.299095),
    t(71923.0, 2.50070, 206.18555),
    t(49767.0, 4.97168, 220.41264),
    t(43221.0, 3.86940, 426.59819),
    t(29646.0, 5.96310, 7.11355),
    t(4721.0, 2.4753, 199.0720),
    t(4142.0, 4.1067, 433.7117),
    t(3789.0, 3.0977, 639.8973),
    t(2964.0, 1.3721, 103.0928),
    t(2556.0, 2.8507, 419.4846),
    t(2327.0, 0.0, 0.0),
    t(2208.0, 6.2759, 110.2063),
    t(2188.0, 5.8555, 14.2271),
    t(1957.0, 4.9245, 227.5262),
    t(924.0, 5.464, 323.505),
    t(706.0, 2.971, 95.979),
    t(546.0, 4.129, 412.371),
    t(431.0, 5.178, 522.577),
    t(405.0, 4.173, 209.367),
    t(391.0, 4.481, 216.480),
    t(374.0, 5.834, 117.320),
    t(361.0, 3.277, 647.011),
    t(356.0, 3.192, 210.118),
    t(326.0, 2.269, 853.196),
    t(207.0, 4.022, 735.877),
    t(204.0, 0.088, 202.253),
    t(180.0, 3.597, 632.784),
    t(178.0, 4.097, 440.825),
    t(154.0, 3.135, 625.670),
    t(148.0, 0.136, 302.165),
    t(133.0, 2.594, 191.958),
    t(132.0, 5.933, 309.278),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 21] = [
    t(20315.0, 3.02187, 213.29910),
    t(8924.0, 3.1914, 220.4126),
    t(6909.0, 4.3517, 206.1855),
    t(4087.0, 4.2241, 7.1135),
    t(3879.0, 2.0106, 426.5982),
    t(1071.0, 4.2036, 199.0720),
    t(907.0, 2.283, 433.712),
    t(606.0, 3.175, 227.526),
    t(597.0, 4.135, 14.227),
    t(483.0, 1.173, 639.897),
    t(393.0, 0.0, 0.0),
    t(229.0, 4.698, 419.485),
    t(188.0, 4.590, 110.206),
    t(150.0, 3.202, 103.093),
    t(121.0, 3.768, 323.505),
    t(102.0, 4.710, 95.979),
    t(101.0, 5.819, 412.371),
    t(93.0, 1.44, 647.01),
    t(84.0, 2.63, 216.48),
    t(73.0, 4.15, 117.32),
    t(62.0, 2.31, 440.83),
];

#[rustfmt::skip]
static R4: [PeriodicTerm; 23] = [
    t(1202.0, 1.4150, 220.4126),
    t(708.0, 1.162, 213.299),
    t(516.0, 6.240, 206.186),
    t(427.0, 2.469, 7.114),
    t(268.0, 0.187, 426.598),
    t(170.0, 5.959, 199.072),
    t(150.0, 0.480, 433.712),
    t(145.0, 1.442, 227.526),
    t(121.0, 2.405, 14.227),
    t(47.0, 5.57, 639.90),
    t(19.0, 5.86, 647.01),
    t(17.0, 0.53, 440.83),
    t(16.0, 2.90, 110.21),
    t(15.0, 0.30, 419.48),
    t(14.0, 1.30, 412.37),
    t(13.0, 2.09, 323.51),
    t(11.0, 0.22, 95.98),
    t(11.0, 2.46, 117.32),
    t(10.0, 3.14, 0.0),
    t(9.0, 1.56, 88.87),
    t(9.0, 2.28, 21.34),
    t(9.0, 0.68, 216.48),
    t(8.0, 1.27, 234.64),
];

#[rustfmt::skip]
static R5: [PeriodicTerm; 18] = [
    t(129.0, 5.913, 220.413),
    t(32.0, 0.69, 7.11),
    t(27.0, 5.91, 227.53),
    t(20.0, 4.95, 433.71),
    t(20.0, 0.67, 14.23),
    t(14.0, 2.67, 206.19),
    t(14.0, 1.46, 199.07),
    t(13.0, 4.59, 426.60),
    t(7.0, 4.63, 213.30),
    t(5.0, 3.61, 639.90),
    t(4.0, 4.90, 440.83),
    t(3.0, 4.07, 647.01),
    t(3.0, 4.66, 191.96),
    t(3.0, 0.49, 323.51),
    t(3.0, 3.18, 419.48),
    t(2.0, 3.70, 88.87),
    t(2.0, 3.32, 95.98),
    t(2.0, 0.56, 117.32),
];

static L_ORDERS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

static B_ORDERS: [&[PeriodicTerm]; 6] = [&B0, &B1, &B2, &B3, &B4, &B5];

static R_ORDERS: [&[PeriodicTerm]; 6] = [&R0, &R1, &R2, &R3, &R4, &R5];

pub static SATURN: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

//! Venus: truncated VSOP87D series (Meeus, _Astronomical Algorithms_, App. III).
//!
//! Heliocentric ecliptic coordinates referred to the mean ecliptic and
//! equinox of date. Amplitudes in 10⁻⁸ rad (L, B) or 10⁻⁸ AU (R).

use tianwen_frames::PeriodicTerm;

use super::t;
use crate::theory::TheoryTable;

#[rustfmt::skip]
static L0: [PeriodicTerm; 24] = [
    t(317614667.0, 0.0, 0.0),
    t(1353968.0, 5.5931332, 10213.2855462),
    t(89892.0, 5.30650, 20426.57109),
    t(5477.0, 4.4163, 7860.4194),
    t(3456.0, 2.6996, 11790.6291),
    t(2372.0, 2.9938, 3930.2097),
    t(1664.0, 4.2502, 1577.3435),
    t(1438.0, 4.1575, 9683.5946),
    t(1317.0, 5.1867, 26.2983),
    t(1201.0, 6.1536, 30639.8566),
    t(769.0, 0.816, 9437.763),
    t(761.0, 1.950, 529.691),
    t(708.0, 1.065, 775.523),
    t(585.0, 3.998, 191.448),
    t(500.0, 4.123, 15720.839),
    t(429.0, 3.586, 19367.189),
    t(327.0, 5.677, 5507.553),
    t(326.0, 4.591, 10404.734),
    t(232.0, 3.163, 9153.904),
    t(180.0, 4.653, 1109.379),
    t(155.0, 5.570, 19651.048),
    t(128.0, 4.226, 20.775),
    t(128.0, 0.962, 5661.332),
    t(106.0, 1.537, 801.821),
];

#[rustfmt::skip]
static L1: [PeriodicTerm; 12] = [
    t(1021352943053.0, 0.0, 0.0),
    t(95708.0, 2.46424, 10213.28555),
    t(14445.0, 0.51625, 20426.57109),
    t(213.0, 1.795, 30639.857),
    t(174.0, 2.655, 26.298),
    t(152.0, 6.106, 1577.344),
    t(82.0, 5.70, 191.45),
    t(70.0, 2.68, 9437.76),
    t(52.0, 3.60, 775.52),
    t(38.0, 1.03, 529.69),
    t(30.0, 1.25, 5507.55),
    t(25.0, 6.11, 10404.73),
];

#[rustfmt::skip]
static L2: [PeriodicTerm; 8] = [
    t(54127.0, 0.0, 0.0),
    t(3891.0, 0.3451, 10213.2855),
    t(1338.0, 2.0201, 20426.5711),
    t(24.0, 2.05, 26.30),
    t(19.0, 3.54, 30639.86),
    t(10.0, 3.97, 775.52),
    t(7.0, 1.52, 1577.34),
    t(6.0, 1.00, 191.45),
];

#[rustfmt::skip]
static L3: [PeriodicTerm; 3] = [
    t(136.0, 4.804, 10213.286),
    t(78.0, 3.67, 20426.57),
    t(26.0, 0.0, 0.0),
];

#[rustfmt::skip]
static L4: [PeriodicTerm; 3] = [
    t(114.0, 3.1416, 0.0),
    t(3.0, 5.21, 20426.57),
    t(2.0, 2.51, 10213.29),
];

#[rustfmt::skip]
static L5: [PeriodicTerm; 1] = [
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static B0: [PeriodicTerm; 9] = [
    t(5923638.0, 0.2670278, 10213.2855462),
    t(40108.0, 1.14737, 20426.57109),
    t(32815.0, 3.14159, 0.0),
    t(1011.0, 1.0895, 30639.8566),
    t(149.0, 6.254, 18073.705),
    t(138.0, 0.860, 1577.344),
    t(130.0, 3.672, 9437.763),
    t(120.0, 3.705, 2352.866),
    t(108.0, 4.539, 22003.915),
];

#[rustfmt::skip]
static B1: [PeriodicTerm; 4] = [
    t(513348.0, 1.803643, 10213.285546),
    t(4380.0, 3.3862, 20426.5711),
    t(199.0, 0.0, 0.0),
    t(197.0, 2.530, 30639.857),
];

#[rustfmt::skip]
static B2: [PeriodicTerm; 4] = [
    t(22378.0, 3.38509, 10213.28555),
    t(282.0, 0.0, 0.0),
    t(173.0, 5.256, 20426.571),
    t(27.0, 3.87, 30639.86),
];

#[rustfmt::skip]
static B3: [PeriodicTerm; 4] = [
    t(647.0, 4.992, 10213.286),
    t(20.0, 3.14, 0.0),
    t(6.0, 0.77, 20426.57),
    t(3.0, 5.44, 30639.86),
];

#[rustfmt::skip]
static B4: [PeriodicTerm; 1] = [
    t(14.0, 0.32, 10213.29),
];

#[rustfmt::skip]
static R0: [PeriodicTerm; 12] = [
    t(72334821.0, 0.0, 0.0),
    t(489824.0, 4.021518, 10213.285546),
    t(1658.0, 4.9021, 20426.5711),
    t(1632.0, 2.8455, 7860.4194),
    t(1378.0, 1.1285, 11790.6291),
    t(498.0, 2.587, 9683.595),
    t(374.0, 1.423, 3930.210),
    t(264.0, 5.529, 9437.763),
    t(237.0, 2.551, 15720.839),
    t(222.0, 2.013, 19367.189),
    t(126.0, 2.728, 1577.344),
    t(119.0, 3.020, 10404.734),
];

#[rustfmt::skip]
static R1: [PeriodicTerm; 3] = [
    t(34551.0, 0.89199, 10213.28555),
    t(234.0, 1.772, 20426.571),
    t(234.0, 3.142, 0.0),
];

#[rustfmt::skip]
static R2: [PeriodicTerm; 3] = [
    t(1407.0, 5.0637, 10213.2855),
    t(16.0, 5.47, 20426.57),
    t(13.0, 0.0, 0.0),
];

#[rustfmt::skip]
static R3: [PeriodicTerm; 1] = [
    t(50.0, 3.22, 10213.29),
];

#[rustfmt::skip]
static R4: [PeriodicTerm; 1] = [
    t(1.0, 0.92, 10213.29),
];

static L_ORDERS: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

static B_ORDERS: [&[PeriodicTerm]; 5] = [&B0, &B1, &B2, &B3, &B4];

static R_ORDERS: [&[PeriodicTerm]; 5] = [&R0, &R1, &R2, &R3, &R4];

pub static VENUS: TheoryTable = TheoryTable::vsop87(&L_ORDERS, &B_ORDERS, &R_ORDERS);

//! Types for solar-term and equinox/solstice search.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset};

/// The 24 solar terms, indexed by apparent solar longitude / 15°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarTerm {
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
}

/// All 24 terms in longitude order (0° first).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
];

impl SolarTerm {
    /// 0-based index; equals longitude / 15.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(index as usize).copied()
    }

    /// Target apparent solar longitude in degrees.
    pub fn longitude_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "Spring Equinox",
            Self::PureBrightness => "Pure Brightness",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainBuds => "Grain Buds",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostDescent => "Frost's Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
        }
    }

    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "春分",
            Self::PureBrightness => "清明",
            Self::GrainRain => "谷雨",
            Self::StartOfSummer => "立夏",
            Self::GrainBuds => "小满",
            Self::GrainInEar => "芒种",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::StartOfAutumn => "立秋",
            Self::EndOfHeat => "处暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostDescent => "霜降",
            Self::StartOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
            Self::StartOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "惊蛰",
        }
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Equinoxes and solstices, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl Season {
    pub const ALL: [Self; 4] = [
        Self::MarchEquinox,
        Self::JuneSolstice,
        Self::SeptemberEquinox,
        Self::DecemberSolstice,
    ];

    /// The solar term at the same longitude.
    pub const fn term(self) -> SolarTerm {
        match self {
            Self::MarchEquinox => SolarTerm::SpringEquinox,
            Self::JuneSolstice => SolarTerm::SummerSolstice,
            Self::SeptemberEquinox => SolarTerm::AutumnEquinox,
            Self::DecemberSolstice => SolarTerm::WinterSolstice,
        }
    }
}

/// Calendar window (UTC) in which a term's crossing is expected every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedBracket {
    pub month: u32,
    /// First day of the window, searched from 0h UT.
    pub first_day: u32,
    /// Last day of the window, searched through 24h UT.
    pub last_day: u32,
}

impl SeedBracket {
    pub const fn new(month: u32, first_day: u32, last_day: u32) -> Self {
        Self {
            month,
            first_day,
            last_day,
        }
    }
}

/// Seed windows indexed by [`SolarTerm::index`].
pub static SOLAR_TERM_BRACKETS: [SeedBracket; 24] = [
    SeedBracket::new(3, 18, 24),
    SeedBracket::new(4, 2, 8),
    SeedBracket::new(4, 17, 23),
    SeedBracket::new(5, 3, 9),
    SeedBracket::new(5, 18, 24),
    SeedBracket::new(6, 3, 9),
    SeedBracket::new(6, 19, 25),
    SeedBracket::new(7, 4, 10),
    SeedBracket::new(7, 20, 26),
    SeedBracket::new(8, 5, 11),
    SeedBracket::new(8, 20, 26),
    SeedBracket::new(9, 5, 11),
    SeedBracket::new(9, 20, 26),
    SeedBracket::new(10, 6, 12),
    SeedBracket::new(10, 21, 27),
    SeedBracket::new(11, 5, 11),
    SeedBracket::new(11, 20, 26),
    SeedBracket::new(12, 5, 11),
    SeedBracket::new(12, 19, 25),
    SeedBracket::new(1, 3, 9),
    SeedBracket::new(1, 18, 24),
    SeedBracket::new(2, 2, 8),
    SeedBracket::new(2, 16, 22),
    SeedBracket::new(3, 3, 9),
];

/// Configuration for the golden-section longitude-crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermConfig {
    /// Fraction of the bracket at which each candidate is placed (default 0.618).
    pub golden_ratio: f64,
    /// Stop once the bracket is narrower than this, days (default 1e-4, ~8.6 s).
    pub convergence_days: f64,
    /// Iteration budget (default 64).
    pub max_iterations: u32,
    /// Fixed shift added to the converged instant, minutes (default 2).
    pub correction_minutes: f64,
    /// Largest accepted |λ − target| at the converged instant, degrees (default 0.01).
    pub verify_tolerance_deg: f64,
    /// Seed windows, indexed by term.
    pub brackets: &'static [SeedBracket; 24],
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            golden_ratio: 0.618,
            convergence_days: 1e-4,
            max_iterations: 64,
            correction_minutes: 2.0,
            verify_tolerance_deg: 0.01,
            brackets: &SOLAR_TERM_BRACKETS,
        }
    }
}

impl SolarTermConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.golden_ratio.is_finite() || self.golden_ratio <= 0.0 || self.golden_ratio >= 1.0 {
            return Err("golden_ratio must be within (0, 1)");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.correction_minutes.is_finite() {
            return Err("correction_minutes must be finite");
        }
        if !self.verify_tolerance_deg.is_finite() || self.verify_tolerance_deg <= 0.0 {
            return Err("verify_tolerance_deg must be positive");
        }
        for b in self.brackets.iter() {
            if !(1..=12).contains(&b.month) {
                return Err("bracket month must be within 1..=12");
            }
            if b.first_day == 0 || b.last_day > 31 || b.first_day > b.last_day {
                return Err("bracket days must satisfy 1 <= first_day <= last_day <= 31");
            }
        }
        Ok(())
    }
}

/// Raw result of one golden-section search, before the fixed correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingSearch {
    /// Midpoint of the final bracket, JD (UT).
    pub jd: f64,
    /// Number of candidates evaluated.
    pub iterations: u32,
    /// Apparent solar longitude at `jd`, degrees in [0, 360).
    pub longitude_deg: f64,
}

/// A located solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Corrected instant, JD (UT).
    pub jd: f64,
    /// Corrected instant in the requested zone.
    pub local: DateTime<FixedOffset>,
    /// The uncorrected search result.
    pub search: CrossingSearch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_indices_match_longitude() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(t.longitude_deg(), i as f64 * 15.0);
            assert_eq!(SolarTerm::from_index(i as u8), Some(*t));
        }
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::WinterSolstice.chinese_name(), "冬至");
        assert_eq!(SolarTerm::StartOfSpring.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::GrainRain.to_string(), "Grain Rain");
    }

    #[test]
    fn seasons_map_to_cardinal_terms() {
        let lons: Vec<f64> = Season::ALL.iter().map(|s| s.term().longitude_deg()).collect();
        assert_eq!(lons, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn default_config_is_valid() {
        let c = SolarTermConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.golden_ratio, 0.618);
        assert_eq!(c.convergence_days, 1e-4);
    }

    #[test]
    fn rejects_bad_ratio() {
        let c = SolarTermConfig {
            golden_ratio: 1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_bracket() {
        let mut bad = SOLAR_TERM_BRACKETS;
        bad[3] = SeedBracket::new(13, 1, 5);
        let c = SolarTermConfig {
            brackets: Box::leak(Box::new(bad)),
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn brackets_follow_longitude_through_the_year() {
        // Consecutive terms are ~15 days apart, so windows never go backwards
        // except at the January wrap.
        let mut prev = SOLAR_TERM_BRACKETS[19];
        for i in (20..24).chain(0..19) {
            let b = SOLAR_TERM_BRACKETS[i];
            assert!(
                (b.month, b.first_day) > (prev.month, prev.first_day),
                "term {i} window precedes term before it"
            );
            prev = b;
        }
    }
}

//! Solar terms and equinox/solstice instants in civil time.
//!
//! All instants are treated as UT; no ΔT is applied to the theory time.

use chrono::{DateTime, FixedOffset};
use tianwen_time::{SECONDS_PER_DAY, Zone, calendar_to_jd};

use crate::crossing::{golden_section_crossing, longitude_offset_deg};
use crate::equinox::equinox_solstice_jde;
use crate::error::SearchError;
use crate::solar_term_types::{
    ALL_SOLAR_TERMS, Season, SolarTerm, SolarTermConfig, SolarTermEvent,
};

/// The four equinoxes and solstices of `year` in `zone`, in calendar order.
///
/// Uses the closed-form tables; valid for years −1000..=3000.
pub fn get_equinox_and_solstice(
    year: i32,
    zone: &Zone,
) -> Result<[DateTime<FixedOffset>; 4], SearchError> {
    let at = |season| -> Result<DateTime<FixedOffset>, SearchError> {
        Ok(zone.local(equinox_solstice_jde(year, season)?)?)
    };
    Ok([
        at(Season::MarchEquinox)?,
        at(Season::JuneSolstice)?,
        at(Season::SeptemberEquinox)?,
        at(Season::DecemberSolstice)?,
    ])
}

/// Locate one solar term of `year` with the golden-section search.
///
/// The search runs over the term's seed window (UTC) in `year`, then the
/// converged instant is shifted by `config.correction_minutes` and
/// expressed in `zone`.
pub fn get_solar_term_with_config(
    year: i32,
    term: SolarTerm,
    zone: &Zone,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let bracket = config.brackets[term.index() as usize];
    let l_jd = calendar_to_jd(year, bracket.month, bracket.first_day as f64);
    let r_jd = calendar_to_jd(year, bracket.month, bracket.last_day as f64 + 1.0);

    let target = term.longitude_deg();
    let search = golden_section_crossing(target, l_jd, r_jd, config)?;
    if longitude_offset_deg(search.longitude_deg, target).abs() > config.verify_tolerance_deg {
        return Err(SearchError::NotBracketed { term, year });
    }

    let jd = search.jd + config.correction_minutes * 60.0 / SECONDS_PER_DAY;
    Ok(SolarTermEvent {
        term,
        jd,
        local: zone.local(jd)?,
        search,
    })
}

/// Locate one solar term of `year` with the default configuration.
pub fn get_solar_term(
    year: i32,
    term: SolarTerm,
    zone: &Zone,
) -> Result<SolarTermEvent, SearchError> {
    get_solar_term_with_config(year, term, zone, &SolarTermConfig::default())
}

/// All 24 solar terms whose seed window falls in `year`, in chronological
/// order (Minor Cold in January first).
pub fn solar_terms_for_year(year: i32, zone: &Zone) -> Result<Vec<SolarTermEvent>, SearchError> {
    solar_terms_for_year_with_config(year, zone, &SolarTermConfig::default())
}

pub fn solar_terms_for_year_with_config(
    year: i32,
    zone: &Zone,
    config: &SolarTermConfig,
) -> Result<Vec<SolarTermEvent>, SearchError> {
    let mut events = ALL_SOLAR_TERMS
        .iter()
        .map(|&t| get_solar_term_with_config(year, t, zone, config))
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by(|a, b| a.jd.total_cmp(&b.jd));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar_term_types::{SOLAR_TERM_BRACKETS, SeedBracket};

    #[test]
    fn misplaced_bracket_is_reported() {
        // Seed the spring equinox with the Grain Rain window.
        let mut wrong = SOLAR_TERM_BRACKETS;
        wrong[0] = SeedBracket::new(4, 17, 23);
        let config = SolarTermConfig {
            brackets: Box::leak(Box::new(wrong)),
            ..Default::default()
        };
        let r = get_solar_term_with_config(2024, SolarTerm::SpringEquinox, &Zone::utc(), &config);
        assert_eq!(
            r,
            Err(SearchError::NotBracketed {
                term: SolarTerm::SpringEquinox,
                year: 2024
            })
        );
    }

    #[test]
    fn correction_is_applied() {
        let e = get_solar_term(2024, SolarTerm::SummerSolstice, &Zone::utc()).unwrap();
        assert!((e.jd - e.search.jd - 2.0 / 1440.0).abs() < 1e-12);
    }

    #[test]
    fn zero_correction_keeps_search_instant() {
        let config = SolarTermConfig {
            correction_minutes: 0.0,
            ..Default::default()
        };
        let e = get_solar_term_with_config(2024, SolarTerm::ColdDew, &Zone::utc(), &config)
            .unwrap();
        assert_eq!(e.jd, e.search.jd);
    }
}

use clap::{Parser, Subcommand};
use tianwen_horizon::RiseTransitSet;
use tianwen_rs::{
    BodyReport, Dms, Hms, Observer, Zone, body_by_name, get_equinox_and_solstice, get_solar_term,
    observe, observe_all, parse_instant, solar_terms_for_year,
};
use tianwen_search::{ALL_SOLAR_TERMS, Season, SolarTerm};

#[derive(Parser)]
#[command(name = "tianwen", about = "Tianwen ephemeris CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Positions, rise/transit/set and horizon coordinates of the bodies
    Bodies {
        /// Geographic latitude in degrees (north positive)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Geographic longitude in degrees (east positive)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Time zone: UTC, +08:00, UTC-5 or an IANA name
        #[arg(long, default_value = "UTC")]
        zone: String,
        /// Instant: RFC 3339, or YYYY-MM-DD[Thh:mm[:ss]] in --zone
        #[arg(long)]
        at: String,
        /// Single body name (default: all observable bodies)
        #[arg(long)]
        body: Option<String>,
    },
    /// The 24 solar terms of a year
    Terms {
        /// Gregorian year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Time zone for the printed instants
        #[arg(long, default_value = "UTC")]
        zone: String,
        /// Single term: index 0-23 (0 = spring equinox) or English name
        #[arg(long)]
        term: Option<String>,
    },
    /// Equinoxes and solstices of a year (closed form)
    Seasons {
        /// Gregorian year
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Time zone for the printed instants
        #[arg(long, default_value = "UTC")]
        zone: String,
    },
    /// Julian Day of an instant
    Jd {
        /// Instant: RFC 3339, or YYYY-MM-DD[Thh:mm[:ss]] in --zone
        #[arg(long)]
        at: String,
        /// Time zone for bare wall-clock instants
        #[arg(long, default_value = "UTC")]
        zone: String,
    },
    /// Calendar timestamp of a Julian Day
    Calendar {
        /// Julian Day (UT)
        jd: f64,
        /// Time zone for the printed timestamp
        #[arg(long, default_value = "UTC")]
        zone: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn parse_zone(s: &str) -> Zone {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_jd(s: &str, zone: &Zone) -> f64 {
    parse_instant(s, zone).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_term(s: &str) -> SolarTerm {
    if let Ok(idx) = s.parse::<u8>() {
        if let Some(term) = SolarTerm::from_index(idx) {
            return term;
        }
    }
    let wanted: String = s.chars().filter(|c| c.is_alphanumeric()).collect();
    ALL_SOLAR_TERMS
        .into_iter()
        .find(|t| {
            let name: String = t.name().chars().filter(|c| c.is_alphanumeric()).collect();
            name.eq_ignore_ascii_case(&wanted) || t.chinese_name() == s
        })
        .unwrap_or_else(|| {
            eprintln!("Invalid solar term: {s}");
            eprintln!("Valid: 0-23, an English name (e.g. \"Start of Spring\") or its Chinese name");
            std::process::exit(1);
        })
}

fn fmt_time(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn print_report_header() {
    println!(
        "{:<8} {:>12} {:>13} {:>6} {:>6} {:>6} {:>10} {:>9} {:>8} {:>8}",
        "Body", "RA", "Dec", "Rise", "Trans", "Set", "Earth AU", "Sun AU", "Elev", "Azim"
    );
}

fn print_report(r: &BodyReport) {
    let note = match r.events {
        RiseTransitSet::NeverRises => "  (never rises)",
        RiseTransitSet::NeverSets => "  (never sets)",
        RiseTransitSet::Events { .. } => "",
    };
    println!(
        "{:<8} {:>12} {:>13} {:>6} {:>6} {:>6} {:>10.6} {:>9.5} {:>8.3} {:>8.3}{note}",
        r.body.name(),
        Hms::from_degrees(r.equatorial.ra_deg).to_string(),
        Dms::from_degrees(r.equatorial.dec_deg).to_string(),
        fmt_time(r.rise),
        fmt_time(r.culmination),
        fmt_time(r.setting),
        r.earth_distance_au,
        r.sun_distance_au,
        r.elevation_deg,
        r.azimuth_deg,
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bodies {
            lat,
            lon,
            zone,
            at,
            body,
        } => {
            let zone = parse_zone(&zone);
            let jd = parse_jd(&at, &zone);
            let observer = Observer::new(lat, lon, zone).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let reports = match body {
                Some(name) => body_by_name(&name)
                    .and_then(|b| observe(b, jd, &observer))
                    .map(|r| vec![r]),
                None => observe_all(jd, &observer),
            };
            match reports {
                Ok(reports) => {
                    println!("JD {jd:.6}  lat {lat}  lon {lon}  zone {zone}");
                    print_report_header();
                    for r in &reports {
                        print_report(r);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Terms { year, zone, term } => {
            let zone = parse_zone(&zone);
            let events = match term {
                Some(t) => get_solar_term(year, parse_term(&t), &zone).map(|e| vec![e]),
                None => solar_terms_for_year(year, &zone),
            };
            match events {
                Ok(events) => {
                    for e in &events {
                        println!(
                            "{:>4}°  {:<22} {}  {}  (JD {:.5})",
                            e.term.longitude_deg(),
                            e.term.name(),
                            e.term.chinese_name(),
                            e.local.format("%Y-%m-%d %H:%M:%S %:z"),
                            e.jd
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Seasons { year, zone } => {
            let zone = parse_zone(&zone);
            match get_equinox_and_solstice(year, &zone) {
                Ok(instants) => {
                    for (season, t) in Season::ALL.iter().zip(instants) {
                        println!(
                            "{:<22} {}",
                            season.term().name(),
                            t.format("%Y-%m-%d %H:%M:%S %:z")
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Jd { at, zone } => {
            let zone = parse_zone(&zone);
            println!("{:.6}", parse_jd(&at, &zone));
        }

        Commands::Calendar { jd, zone } => {
            let zone = parse_zone(&zone);
            match zone.local(jd) {
                Ok(t) => println!("{}", t.format("%Y-%m-%d %H:%M:%S%.3f %:z")),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dms { deg } => {
            println!("{}", Dms::from_degrees(deg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn term_by_index_and_name() {
        assert_eq!(parse_term("0"), SolarTerm::SpringEquinox);
        assert_eq!(parse_term("21"), SolarTerm::StartOfSpring);
        assert_eq!(parse_term("start of spring"), SolarTerm::StartOfSpring);
        assert_eq!(parse_term("WinterSolstice"), SolarTerm::WinterSolstice);
    }

    #[test]
    fn parses_body_subcommand() {
        let cli = Cli::try_parse_from([
            "tianwen", "bodies", "--lat", "-33.9", "--lon", "18.4", "--at", "2024-01-01",
        ])
        .unwrap();
        match cli.command {
            Commands::Bodies { lat, lon, zone, .. } => {
                assert_eq!((lat, lon), (-33.9, 18.4));
                assert_eq!(zone, "UTC");
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn missing_time_prints_placeholder() {
        assert_eq!(fmt_time(None), "--:--");
        assert_eq!(fmt_time(chrono::NaiveTime::from_hms_opt(6, 5, 0)), "06:05");
    }
}

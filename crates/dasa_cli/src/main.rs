use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{FixedOffset, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dasa_config::{ConfigError, DasaConfig, ResolvedConfig};
use dasa_core::{AnalyticEphemeris, EngineError};
use dasa_search::{
    BirthMoment, DashaRequest, SearchError, dasha_report, indu_dasha, moon_dasha, moon_position,
};
use dasa_time::{CivilTime, TimeError, jd_to_datetime, parse_date, parse_time};
use dasa_vedic_base::dasha::{DashaChart, DashaPeriod, DashaSnapshot, snapshot, to_json};
use dasa_vedic_base::{VedicError, rashi_from_longitude, resolve_nakshatra};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_EPHEMERIS: u8 = 3;

#[derive(Parser)]
#[command(name = "dasa", about = "Vimshottari dasa timelines")]
struct Cli {
    /// Configuration file (defaults to $DASA_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log level (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees, [0, 360)
        lon: f64,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Sidereal Moon longitude at birth
    Moon {
        #[command(flatten)]
        birth: BirthArgs,
        /// Ayanamsha (lahiri, kp, raman, fagan-bradley, yukteshwar, surya-siddhanta)
        #[arg(long)]
        ayanamsha: Option<String>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Moon-seeded Vimshottari timeline
    Dasa(DasaArgs),
    /// Indu-Lagna-seeded Vimshottari timeline
    InduDasa(DasaArgs),
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    dob: String,
    /// Birth time, local 24h (HH:MM)
    #[arg(long)]
    tob: String,
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (default from config, +5.5)
    #[arg(long, allow_negative_numbers = true)]
    tz: Option<f64>,
}

#[derive(Args)]
struct DasaArgs {
    #[command(flatten)]
    birth: BirthArgs,
    /// Deepest level: mahadasha, antardasha, pratyantardasha, sookshmadasha, pranadasha
    #[arg(long)]
    depth: Option<String>,
    /// Sub-periods of partial periods: proportional or clipped
    #[arg(long)]
    policy: Option<String>,
    /// Ayanamsha system
    #[arg(long)]
    ayanamsha: Option<String>,
    /// Print the active periods at this local date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long)]
    query_date: Option<String>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Seed {
    Moon,
    Indu,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "dasa_search=debug,dasa_cli=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Exit status for an error chain: 2 invalid input, 3 ephemeris, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<SearchError>() {
            return match e {
                SearchError::InvalidInput(_) => EXIT_INVALID_INPUT,
                SearchError::Ephemeris(_) => EXIT_EPHEMERIS,
                _ => EXIT_FAILURE,
            };
        }
        if let Some(e) = cause.downcast_ref::<VedicError>() {
            return match e {
                VedicError::InvalidInput(_) => EXIT_INVALID_INPUT,
                _ => EXIT_FAILURE,
            };
        }
        if cause.is::<EngineError>() {
            return EXIT_EPHEMERIS;
        }
        if cause.is::<TimeError>() || cause.is::<ConfigError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DasaConfig::load(cli.config.as_deref())?.resolve()?;
    debug!(?config, "configuration");

    match cli.command {
        Commands::Nakshatra { lon, format } => print_nakshatra(lon, format),
        Commands::Moon {
            birth,
            ayanamsha,
            format,
        } => {
            let request = request_from(&config, None, None, ayanamsha.as_deref())?;
            let birth = birth.resolve(&config)?;
            let engine = AnalyticEphemeris::new(config.engine)?;
            print_moon(&engine, &birth, &request, format)
        }
        Commands::Dasa(args) => run_dasa(&config, args, Seed::Moon),
        Commands::InduDasa(args) => run_dasa(&config, args, Seed::Indu),
    }
}

impl BirthArgs {
    fn resolve(&self, config: &ResolvedConfig) -> Result<BirthMoment, SearchError> {
        BirthMoment::parse(
            &self.dob,
            &self.tob,
            self.lat,
            self.lon,
            self.tz.unwrap_or(config.default_tz_offset),
        )
    }
}

/// Config defaults overridden by command-line names.
fn request_from(
    config: &ResolvedConfig,
    depth: Option<&str>,
    policy: Option<&str>,
    ayanamsha: Option<&str>,
) -> Result<DashaRequest, VedicError> {
    let mut request = config.request;
    if let Some(depth) = depth {
        request.depth = depth.parse()?;
    }
    if let Some(policy) = policy {
        request.policy = policy.parse()?;
    }
    if let Some(ayanamsha) = ayanamsha {
        request.ayanamsha = ayanamsha.parse()?;
    }
    Ok(request)
}

/// JD UTC of a local date (midnight) or date-time in the birth's offset.
fn query_jd(text: &str, offset: FixedOffset) -> Result<f64, TimeError> {
    let (date, time) = match text.split_once(['T', ' ']) {
        Some((date, time)) => (parse_date(date)?, parse_time(time)?),
        None => (parse_date(text)?, NaiveTime::MIN),
    };
    Ok(CivilTime::new(date, time, offset).jd_utc())
}

fn run_dasa(config: &ResolvedConfig, args: DasaArgs, seed: Seed) -> anyhow::Result<()> {
    let request = request_from(
        config,
        args.depth.as_deref(),
        args.policy.as_deref(),
        args.ayanamsha.as_deref(),
    )?;
    let birth = args.birth.resolve(config)?;
    let engine = AnalyticEphemeris::new(config.engine)?;

    let (chart, indu) = match seed {
        Seed::Moon => (moon_dasha(&engine, &birth, &request)?, None),
        Seed::Indu => {
            let result = indu_dasha(&engine, &birth, &request)?;
            (result.chart, Some(result.indu))
        }
    };

    if let Some(text) = args.query_date.as_deref() {
        let jd = query_jd(text, birth.offset()).context("invalid --query-date")?;
        let snap = snapshot(&chart.timeline, jd);
        return print_snapshot(&snap, text, birth.offset(), args.format);
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", to_json(&dasha_report(&chart, &birth)?)?);
            Ok(())
        }
        OutputFormat::Text => {
            if let Some(indu) = indu {
                let lagna = indu.lagna_longitude;
                let rashi = rashi_from_longitude(lagna);
                println!("Lagna: {:.4} deg ({} {})", lagna, rashi.rashi.name(), rashi.dms);
                println!(
                    "9th lords: {} (from Lagna) + {} (from Moon), kaksha sum {} -> {} signs from Moon",
                    indu.lagna_ninth_lord,
                    indu.moon_ninth_lord,
                    indu.kaksha_sum,
                    indu.signs_from_moon
                );
            }
            print_chart(&chart, &request, birth.offset())
        }
    }
}

fn print_nakshatra(lon: f64, format: OutputFormat) -> anyhow::Result<()> {
    let pos = resolve_nakshatra(lon)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "longitude": lon,
                "nakshatra": pos.nakshatra.name(),
                "index": pos.index,
                "pada": pos.pada,
                "ruler": pos.ruler.english_name(),
                "degree_into_segment": pos.degree_into_segment,
                "elapsed_fraction": pos.elapsed_fraction,
            }))?
        ),
        OutputFormat::Text => println!(
            "{} (index {}) - Pada {}, ruler {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
            pos.nakshatra.name(),
            pos.index,
            pos.pada,
            pos.ruler,
            pos.degree_into_segment,
            pos.degrees_in_pada
        ),
    }
    Ok(())
}

fn print_moon(
    engine: &AnalyticEphemeris,
    birth: &BirthMoment,
    request: &DashaRequest,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let moon = moon_position(engine, birth, request.ayanamsha)?;
    let pos = resolve_nakshatra(moon.sidereal)?;
    let rashi = rashi_from_longitude(moon.sidereal);
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "jd_utc": moon.jd_utc,
                "jd_tt": moon.jd_tt,
                "tropical": moon.tropical,
                "ayanamsha": request.ayanamsha.key(),
                "ayanamsha_deg": moon.ayanamsha,
                "sidereal": moon.sidereal,
                "rashi": rashi.rashi.name(),
                "rashi_western": rashi.rashi.western_name(),
                "nakshatra": pos.nakshatra.name(),
                "pada": pos.pada,
                "ruler": pos.ruler.english_name(),
            }))?
        ),
        OutputFormat::Text => {
            println!("JD UTC {:.6}, JD TT {:.6}", moon.jd_utc, moon.jd_tt);
            println!("Tropical: {:.4} deg", moon.tropical);
            println!("Ayanamsha ({}): {:.4} deg", request.ayanamsha.key(), moon.ayanamsha);
            println!(
                "Sidereal: {:.4} deg ({}/{} {})",
                moon.sidereal,
                rashi.rashi.name(),
                rashi.rashi.western_name(),
                rashi.dms
            );
            println!(
                "Nakshatra: {} pada {}, ruler {}",
                pos.nakshatra.name(),
                pos.pada,
                pos.ruler
            );
        }
    }
    Ok(())
}

fn date(jd: f64, offset: FixedOffset) -> Result<String, TimeError> {
    Ok(jd_to_datetime(jd, offset)?.format("%Y-%m-%d").to_string())
}

fn print_chart(
    chart: &DashaChart,
    request: &DashaRequest,
    offset: FixedOffset,
) -> anyhow::Result<()> {
    let t = &chart.timeline;
    println!(
        "Vimshottari Dasa ({} seed, {}, {} policy)",
        chart.seed.label(),
        request.ayanamsha.key(),
        t.policy.name()
    );
    println!(
        "{}: {:.4} deg - {} pada {}, ruler {}",
        chart.seed.label(),
        chart.longitude,
        chart.position.nakshatra.name(),
        chart.position.pada,
        chart.position.ruler
    );
    println!(
        "Balance at birth: {:.4} years of {}\n",
        t.balance_years, t.ruler
    );
    for period in &t.periods {
        print_period(period, offset, 0)?;
    }
    Ok(())
}

fn print_period(period: &DashaPeriod, offset: FixedOffset, indent: usize) -> anyhow::Result<()> {
    println!(
        "{}{:<8} {} - {}  ({:.3} y)",
        "  ".repeat(indent),
        period.ruler.english_name(),
        date(period.start_jd, offset)?,
        date(period.end_jd, offset)?,
        period.duration_years()
    );
    for child in &period.children {
        print_period(child, offset, indent + 1)?;
    }
    Ok(())
}

fn print_snapshot(
    snap: &DashaSnapshot<'_>,
    query: &str,
    offset: FixedOffset,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if !snap.is_active() {
        anyhow::bail!(SearchError::InvalidInput(format!(
            "{query} is outside the 120-year timeline"
        )));
    }
    match format {
        OutputFormat::Json => {
            let periods = snap
                .periods
                .iter()
                .map(|p| {
                    Ok(json!({
                        "level": p.level.name(),
                        "ruler": p.ruler.english_name(),
                        "start": date(p.start_jd, offset)?,
                        "end": date(p.end_jd, offset)?,
                        "start_jd": p.start_jd,
                        "end_jd": p.end_jd,
                    }))
                })
                .collect::<Result<Vec<_>, TimeError>>()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "query_jd": snap.query_jd,
                    "periods": periods,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("Active periods at {query}:");
            for p in &snap.periods {
                println!(
                    "{}{}: {} ({} - {})",
                    "  ".repeat(p.level as usize),
                    p.level.name(),
                    p.ruler.english_name(),
                    date(p.start_jd, offset)?,
                    date(p.end_jd, offset)?
                );
            }
        }
    }
    Ok(())
}

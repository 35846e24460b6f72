use brydje_match::config::Settings;
use brydje_match::core::{
    match_reasons, price_bands, CandidateSource, Matcher, SyntheticGenerator,
};
use brydje_match::models::{
    CommunicationStyle, Factor, Location, Personality, RankRequest, RequesterProfile, Timeline,
};
use brydje_match::BrydjeError;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// One line of the printed ranking
#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    name: &'a str,
    organization: &'a str,
    #[serde(rename = "matchScore")]
    score: u8,
    breakdown: Vec<(Factor, u8)>,
    reasons: Vec<String>,
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn sample_requester(location: &str) -> RequesterProfile {
    RequesterProfile {
        location: Location::new(location, "San Francisco", "CA"),
        home_value: 500_000.0,
        timeline: Timeline::Asap,
        communication_style: CommunicationStyle::Frequent,
        personality: Personality::Professional,
        property_type: "Single Family".to_string(),
        first_time: true,
        prefers_digital: true,
    }
}

fn run(settings: &Settings) -> Result<(), BrydjeError> {
    // Optional request file: a requester and, optionally, its own candidate pool
    let request = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading rank request");
            Some(RankRequest::from_json(&std::fs::read_to_string(&path)?)?)
        }
        None => None,
    };

    let (requester, candidates, limit) = match request {
        Some(request) if !request.candidates.is_empty() => {
            (request.requester, request.candidates, request.limit)
        }
        other => {
            let requester = other
                .as_ref()
                .map(|r| r.requester.clone())
                .unwrap_or_else(|| sample_requester(&settings.generator.location));
            let limit = other.and_then(|r| r.limit);
            let mut generator = SyntheticGenerator::from_seed(settings.generator.seed);
            let key = if requester.location.zip.is_empty() {
                settings.generator.location.clone()
            } else {
                requester.location.zip.clone()
            };
            let candidates = generator.candidates(&key, settings.generator.count);
            (requester, candidates, limit)
        }
    };

    let mut options = settings.matching.options();
    if limit.is_some() {
        options.limit = limit;
    }

    let bands = price_bands(requester.home_value);
    info!(
        optimal = bands.optimal,
        quick_sale = bands.quick_sale,
        premium = bands.premium,
        "Listing price bands"
    );

    let pool = Matcher::new(options).find_matches(&requester, candidates);

    let entries: Vec<RankedEntry<'_>> = pool
        .matches
        .iter()
        .enumerate()
        .map(|(i, m)| RankedEntry {
            rank: i + 1,
            name: &m.candidate.name,
            organization: &m.candidate.organization,
            score: m.score,
            breakdown: m.breakdown.iter().map(|e| (e.factor, e.points)).collect(),
            reasons: match_reasons(m),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);

    // Hand the ranking to a review queue for one-at-a-time triage
    let queue = settings
        .queue
        .queue(pool.matches.into_iter().map(|m| m.candidate).collect());
    info!(
        pending = queue.len(),
        max_defers = queue.max_defers(),
        "Review queue ready"
    );
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    init_tracing(&settings.logging.level, &settings.logging.format);
    info!("Starting Brydje match run...");

    if let Err(e) = run(&settings) {
        error!("Match run failed: {}", e);
        std::process::exit(1);
    }
}

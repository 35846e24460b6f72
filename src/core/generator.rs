//! Synthetic candidate and lead generation.
//!
//! Output structure is fixed and content is drawn from an injected RNG, so a
//! seeded generator reproduces the same pool on every run.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::core::source::CandidateSource;
use crate::models::{
    Availability, CandidateProfile, CommunicationStyle, Location, Personality, SellerLead,
    Timeline, ALL_TYPES_TAG,
};

const FIRST_NAMES: &[&str] = &[
    "John", "Sarah", "Michael", "Jennifer", "David", "Jessica", "Robert", "Emily", "James",
    "Ashley", "William", "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Chen", "Anderson",
];

const SPECIALIZATIONS: &[&str] = &[
    "Single Family",
    "Condo",
    "Townhouse",
    "Multi-Family",
    "Luxury",
    "Investment",
];

/// Organizations with in-house tooling; their agents get a flat tech boost
const TECH_FORWARD_ORGANIZATIONS: &[&str] = &["Compass", "Redfin", "eXp Realty", "Opendoor"];

const TECH_FORWARD_BOOST: u8 = 15;

/// Share of candidates that carry the catch-all specialization tag
const GENERALIST_RATE: f64 = 0.15;

/// Share of candidates placed in the requested ZIP when the key is a ZIP
const SAME_ZIP_RATE: f64 = 0.6;

/// Commission rate applied to synthetic lead property values
pub const LEAD_COMMISSION_RATE: f64 = 0.03;

/// Organization and phone tables for one market
#[derive(Debug)]
struct LocaleTable {
    zip_prefixes: &'static [&'static str],
    city: &'static str,
    state: &'static str,
    zips: &'static [&'static str],
    organizations: &'static [&'static str],
    area_codes: &'static [u16],
}

const LOCALES: &[LocaleTable] = &[
    LocaleTable {
        zip_prefixes: &["940", "941"],
        city: "San Francisco",
        state: "CA",
        zips: &["94102", "94105", "94107", "94110", "94117"],
        organizations: &[
            "Compass",
            "Sotheby's International Realty",
            "Coldwell Banker",
            "Redfin",
            "Vanguard Properties",
        ],
        area_codes: &[415, 628],
    },
    LocaleTable {
        zip_prefixes: &["100", "101", "102"],
        city: "New York",
        state: "NY",
        zips: &["10001", "10011", "10016", "10024", "10128"],
        organizations: &[
            "Douglas Elliman",
            "Corcoran",
            "Compass",
            "Brown Harris Stevens",
            "Keller Williams",
        ],
        area_codes: &[212, 646, 917],
    },
    LocaleTable {
        zip_prefixes: &["900", "902"],
        city: "Los Angeles",
        state: "CA",
        zips: &["90012", "90024", "90027", "90049", "90210"],
        organizations: &[
            "The Agency",
            "Compass",
            "Coldwell Banker",
            "Keller Williams",
            "eXp Realty",
        ],
        area_codes: &[213, 310, 323],
    },
    LocaleTable {
        zip_prefixes: &["606"],
        city: "Chicago",
        state: "IL",
        zips: &["60601", "60611", "60614", "60622", "60657"],
        organizations: &["@properties", "Baird & Warner", "Compass", "Coldwell Banker", "Redfin"],
        area_codes: &[312, 773],
    },
    LocaleTable {
        zip_prefixes: &["787"],
        city: "Austin",
        state: "TX",
        zips: &["78701", "78702", "78704", "78731", "78745"],
        organizations: &[
            "Keller Williams",
            "Moreland Properties",
            "eXp Realty",
            "Compass",
            "Opendoor",
        ],
        area_codes: &[512, 737],
    },
    LocaleTable {
        zip_prefixes: &["981"],
        city: "Seattle",
        state: "WA",
        zips: &["98101", "98103", "98107", "98115", "98122"],
        organizations: &["Windermere", "John L. Scott", "Redfin", "Compass", "RE/MAX"],
        area_codes: &[206],
    },
];

const GENERIC_ORGANIZATIONS: &[&str] = &[
    "RE/MAX",
    "Keller Williams",
    "Century 21",
    "Coldwell Banker",
    "eXp Realty",
];

const GENERIC_AREA_CODES: &[u16] = &[201, 302, 404, 503, 614, 720, 813, 919];

/// Market resolved from a location key
#[derive(Debug, Clone, Copy)]
struct Market<'a> {
    table: Option<&'static LocaleTable>,
    key: &'a str,
}

impl<'a> Market<'a> {
    fn resolve(key: &'a str) -> Self {
        let key = key.trim();
        let table = if is_zip(key) {
            LOCALES
                .iter()
                .find(|t| t.zip_prefixes.iter().any(|p| key.starts_with(p)))
        } else {
            LOCALES.iter().find(|t| t.city.eq_ignore_ascii_case(key))
        };

        if table.is_none() {
            tracing::debug!(location_key = key, "Unrecognized location key, using generic tables");
        }

        Self { table, key }
    }

    fn organizations(&self) -> &'static [&'static str] {
        self.table.map_or(GENERIC_ORGANIZATIONS, |t| t.organizations)
    }

    fn area_codes(&self) -> &'static [u16] {
        self.table.map_or(GENERIC_AREA_CODES, |t| t.area_codes)
    }

    fn draw_location<R: Rng + ?Sized>(&self, rng: &mut R) -> Location {
        let key_zip = is_zip(self.key).then_some(self.key);
        match self.table {
            Some(table) => {
                let zip = match key_zip {
                    Some(zip) if rng.gen_bool(SAME_ZIP_RATE) => zip,
                    _ => choose(rng, table.zips),
                };
                Location::new(zip, table.city, table.state)
            }
            None => match key_zip {
                Some(zip) => Location::new(zip, "", ""),
                None => Location::new("", self.key, ""),
            },
        }
    }
}

fn is_zip(key: &str) -> bool {
    key.len() == 5 && key.bytes().all(|b| b.is_ascii_digit())
}

/// Experience band; every other numeric field is conditioned on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExperienceBand {
    Rookie,
    Established,
    Veteran,
    Elite,
}

impl ExperienceBand {
    const ALL: [ExperienceBand; 4] = [
        ExperienceBand::Rookie,
        ExperienceBand::Established,
        ExperienceBand::Veteran,
        ExperienceBand::Elite,
    ];
    const WEIGHTS: [u32; 4] = [30, 40, 20, 10];

    fn years(self) -> (u32, u32) {
        match self {
            ExperienceBand::Rookie => (1, 3),
            ExperienceBand::Established => (4, 8),
            ExperienceBand::Veteran => (9, 15),
            ExperienceBand::Elite => (16, 25),
        }
    }

    fn recent_activity(self) -> (u32, u32) {
        match self {
            ExperienceBand::Rookie => (2, 12),
            ExperienceBand::Established => (8, 25),
            ExperienceBand::Veteran => (15, 35),
            ExperienceBand::Elite => (25, 50),
        }
    }

    fn avg_value(self) -> (u32, u32) {
        match self {
            ExperienceBand::Rookie => (250_000, 550_000),
            ExperienceBand::Established => (350_000, 800_000),
            ExperienceBand::Veteran => (500_000, 1_200_000),
            ExperienceBand::Elite => (750_000, 2_500_000),
        }
    }

    /// Newer agents skew towards digital tooling
    fn tech_score(self) -> (u8, u8) {
        match self {
            ExperienceBand::Rookie => (60, 95),
            ExperienceBand::Established => (45, 85),
            ExperienceBand::Veteran => (35, 75),
            ExperienceBand::Elite => (25, 65),
        }
    }

    fn review_count(self) -> (u32, u32) {
        match self {
            ExperienceBand::Rookie => (0, 15),
            ExperienceBand::Established => (5, 60),
            ExperienceBand::Veteran => (20, 120),
            ExperienceBand::Elite => (40, 200),
        }
    }
}

fn choose<R: Rng + ?Sized, T: Copy>(rng: &mut R, options: &[T]) -> T {
    *options
        .choose(rng)
        .unwrap_or_else(|| unreachable!("generator tables are never empty"))
}

/// FNV-1a, stable across platforms and releases
fn stable_hash(input: &str) -> u64 {
    input.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

fn slug(organization: &str) -> String {
    organization
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Contact details derived from name and organization only
///
/// Two candidates with the same name at the same organization share contact
/// details; that is expected in synthetic pools.
fn derive_contact(
    first: &str,
    last: &str,
    organization: &str,
    area_codes: &[u16],
) -> (String, String) {
    let hash = stable_hash(&format!("{} {}|{}", first, last, organization));
    let area = area_codes[(hash % area_codes.len() as u64) as usize];
    let exchange = 200 + (hash >> 16) % 800;
    let line = 1000 + (hash >> 32) % 9000;

    let phone = format!("({}) {}-{}", area, exchange, line);
    let email = format!(
        "{}.{}@{}.com",
        first.to_lowercase(),
        last.to_lowercase(),
        slug(organization)
    );
    (phone, email)
}

fn draw_specializations<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    if rng.gen_bool(GENERALIST_RATE) {
        return vec![ALL_TYPES_TAG.to_string()];
    }
    let count = rng.gen_range(1..=3);
    SPECIALIZATIONS
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

fn generate_one<R: Rng + ?Sized>(
    rng: &mut R,
    market: &Market<'_>,
    bands: &WeightedIndex<u32>,
) -> CandidateProfile {
    let band = ExperienceBand::ALL[bands.sample(rng)];

    let first = choose(rng, FIRST_NAMES);
    let last = choose(rng, LAST_NAMES);
    let organization = choose(rng, market.organizations());
    let (phone, email) = derive_contact(first, last, organization, market.area_codes());

    let (min_years, max_years) = band.years();
    let (min_activity, max_activity) = band.recent_activity();
    let (min_value, max_value) = band.avg_value();
    let (min_reviews, max_reviews) = band.review_count();
    let (min_tech, max_tech) = band.tech_score();

    let mut tech_score = rng.gen_range(min_tech..=max_tech);
    if TECH_FORWARD_ORGANIZATIONS.contains(&organization) {
        tech_score = tech_score.saturating_add(TECH_FORWARD_BOOST).min(100);
    }

    let review_count = rng.gen_range(min_reviews..=max_reviews);
    let rating = (review_count > 0).then(|| (rng.gen_range(35..=50) as f32) / 10.0);

    CandidateProfile {
        id: Uuid::from_u128(rng.gen()),
        name: format!("{} {}", first, last),
        organization: organization.to_string(),
        phone: Some(phone),
        email: Some(email),
        location: market.draw_location(rng),
        years_experience: rng.gen_range(min_years..=max_years),
        recent_activity_count: rng.gen_range(min_activity..=max_activity),
        avg_value: Some(rng.gen_range(min_value..=max_value) as f64),
        rating,
        review_count,
        specializations: draw_specializations(rng),
        tech_score,
        personality: choose(
            rng,
            &[Personality::Professional, Personality::Friendly, Personality::Analytical],
        ),
        communication_style: choose(
            rng,
            &[
                CommunicationStyle::Frequent,
                CommunicationStyle::Balanced,
                CommunicationStyle::Minimal,
            ],
        ),
        availability: choose(
            rng,
            &[
                Availability::Immediate,
                Availability::OneWeek,
                Availability::TwoWeeks,
                Availability::OneMonthPlus,
            ],
        ),
    }
}

/// Generate a pool of synthetic candidates for a location key
///
/// Unrecognized keys fall back to generic organization and phone tables.
pub fn generate_candidates<R: Rng + ?Sized>(
    rng: &mut R,
    location_key: &str,
    count: usize,
) -> Vec<CandidateProfile> {
    let market = Market::resolve(location_key);
    let bands = match WeightedIndex::new(ExperienceBand::WEIGHTS) {
        Ok(bands) => bands,
        Err(e) => unreachable!("experience band weights are valid: {}", e),
    };

    let candidates: Vec<CandidateProfile> = (0..count)
        .map(|_| generate_one(rng, &market, &bands))
        .collect();

    tracing::info!(
        location_key,
        market = market.table.map_or("generic", |t| t.city),
        count = candidates.len(),
        "Generated synthetic candidates"
    );

    candidates
}

/// Generate sample seller leads for the agent review workflow
pub fn generate_leads<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<SellerLead> {
    (0..count)
        .map(|i| {
            let property_value = rng.gen_range(300_000..=1_500_000u64);
            SellerLead {
                id: Uuid::from_u128(rng.gen()),
                name: format!("Seller {}", i + 1),
                property_value,
                timeline: choose(rng, &[Timeline::Asap, Timeline::OneToThreeMonths]),
                commission: property_value as f64 * LEAD_COMMISSION_RATE,
            }
        })
        .collect()
}

/// Seeded candidate source backed by [`generate_candidates`]
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: ChaCha8Rng,
}

impl SyntheticGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn leads(&mut self, count: usize) -> Vec<SellerLead> {
        generate_leads(&mut self.rng, count)
    }
}

impl CandidateSource for SyntheticGenerator {
    fn candidates(&mut self, location_key: &str, count: usize) -> Vec<CandidateProfile> {
        generate_candidates(&mut self.rng, location_key, count)
    }
}

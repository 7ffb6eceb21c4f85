//! Fixture generation: synthetic person records for benchmarking.
//!
//! Uses a seeded RNG so a given (count, seed) pair always produces the same
//! batch — reruns of a strategy are directly comparable.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// A person record as stored in the `person` table. Immutable value object:
/// fields are set at construction, equality and hashing are structural over
/// all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Person {
    /// Construct a record with a fresh random identifier.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} <{}, {}, {} {}>",
            self.id,
            self.first_name,
            self.last_name,
            self.street,
            self.city,
            self.state,
            self.postal_code
        )
    }
}

// ── Sample pools ────────────────────────────────────────────────────

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Maria", "Henrik", "Ingrid", "Yusuf", "Amara", "Kenji", "Sofia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Nakamura", "Larsen", "Okafor", "Novak", "Silva", "Kovacs",
];

const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Sunset", "Park",
    "River", "Meadow", "Highland", "Franklin", "Chestnut", "Willow",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Ct", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Georgetown", "Salem", "Madison", "Clinton",
    "Arlington", "Ashland", "Burlington", "Clayton", "Dayton", "Milton", "Oxford", "Aurora",
    "Bristol",
];

const STATES: &[&str] = &[
    "Alabama", "Arizona", "California", "Colorado", "Florida", "Georgia", "Illinois", "Indiana",
    "Kansas", "Kentucky", "Michigan", "Montana", "Nevada", "Ohio", "Oregon", "Texas", "Utah",
    "Vermont", "Virginia", "Wyoming",
];

// ── Generator ───────────────────────────────────────────────────────

/// Generate exactly `count` synthetic records, deterministically for a given
/// seed. Identifiers are v4 UUIDs built from the seeded RNG, so they are
/// unique within the batch yet reproducible across runs.
pub fn generate(count: usize, seed: u64) -> Vec<Person> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut people = Vec::with_capacity(count);

    for _ in 0..count {
        let id = Uuid::from_bytes(random_v4_bytes(&mut rng));
        let street = format!(
            "{} {} {}",
            rng.gen_range(1..9999),
            pick(&mut rng, STREET_NAMES),
            pick(&mut rng, STREET_SUFFIXES),
        );

        people.push(Person {
            id,
            first_name: pick(&mut rng, FIRST_NAMES).to_string(),
            last_name: pick(&mut rng, LAST_NAMES).to_string(),
            street,
            city: pick(&mut rng, CITIES).to_string(),
            state: pick(&mut rng, STATES).to_string(),
            postal_code: format!("{:05}", rng.gen_range(501..99951)),
        });
    }

    people
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// 16 random bytes with the RFC 4122 version (4) and variant bits set.
fn random_v4_bytes(rng: &mut StdRng) -> [u8; 16] {
    let mut bytes: [u8; 16] = rng.gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

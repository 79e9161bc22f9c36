//! Deterministic seed derivation from beacon entropy.
//!
//! The mapping from entropy bytes to a [`CaseSeed`] must be reproducible and
//! auditable: the bytes come from a verifiable randomness source, and anyone
//! re-running the derivation over the same bytes has to land on the same
//! seed. Draw order and the reuse-by-wraparound of short entropy streams are
//! therefore part of the contract; do not "improve" either.

use rand::RngCore;
use tracing::debug;

use casefile_common::{CaseFileError, CaseSeed, Result, SeedSuspect};

use crate::pools::{
    GENDER_DRAW, INCIDENT_TYPES, LOCATIONS, MANNERISMS, ROLES, TARGETS, TIME_CONTEXTS, TRAITS,
};

/// Every case has exactly this many suspects.
pub const SUSPECT_COUNT: usize = 3;

const MIN_AGE: u8 = 18;
const AGE_SPAN: usize = 30;
const SAMPLE_SIZE: usize = 2;

/// Rolling cursor over an entropy stream. Each draw consumes one position;
/// streams shorter than the number of draws wrap around and reuse bytes.
struct EntropyCursor<'a> {
    bytes: &'a [u8],
    p: usize,
}

impl<'a> EntropyCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, p: 0 }
    }

    /// Draw an index in `[0, n)`.
    fn draw(&mut self, n: usize) -> usize {
        let v = self.bytes[self.p % self.bytes.len()];
        self.p += 1;
        v as usize % n
    }
}

/// Derive a case seed from beacon entropy. Pure: equal bytes, equal seed.
pub fn derive(entropy: &[u8]) -> Result<CaseSeed> {
    if entropy.is_empty() {
        return Err(CaseFileError::InvalidEntropy(
            "entropy byte sequence is empty".to_string(),
        ));
    }

    let mut cursor = EntropyCursor::new(entropy);

    let location = LOCATIONS[cursor.draw(LOCATIONS.len())];
    let target = TARGETS[cursor.draw(TARGETS.len())];
    let incident = INCIDENT_TYPES[cursor.draw(INCIDENT_TYPES.len())];
    let time = TIME_CONTEXTS[cursor.draw(TIME_CONTEXTS.len())];

    let suspects = (0..SUSPECT_COUNT)
        .map(|i| {
            let occupation = ROLES[cursor.draw(ROLES.len())];
            let age = MIN_AGE + cursor.draw(AGE_SPAN) as u8;
            let gender = GENDER_DRAW[cursor.draw(GENDER_DRAW.len())];
            let traits = sample_without_replacement(TRAITS, SAMPLE_SIZE, &mut cursor);
            let mannerisms = sample_without_replacement(MANNERISMS, SAMPLE_SIZE, &mut cursor);

            SeedSuspect {
                occupation: occupation.to_string(),
                description: slot_description(i, occupation),
                age,
                image: image_slot(i),
                gender,
                traits,
                mannerisms,
            }
        })
        .collect();

    let seed = CaseSeed {
        title: build_title(location, target, incident),
        excerpt: build_excerpt(location, target, incident, time),
        story: build_story(location, target, incident, time),
        hints: build_hints(location, target, incident, time),
        suspects,
    };

    debug!(location, target, incident, time, "Derived case seed");
    Ok(seed)
}

/// Preview seed from locally generated entropy. Runs through the same
/// derivation path as beacon entropy.
pub fn derive_random() -> CaseSeed {
    let mut entropy = [0u8; 32];
    rand::rng().fill_bytes(&mut entropy);
    derive(&entropy).expect("32 bytes of entropy")
}

/// Draw `count` distinct elements, consuming one cursor draw per element.
/// Each draw indexes into the remaining pool, which shrinks as it goes.
fn sample_without_replacement(
    pool: &[&str],
    count: usize,
    cursor: &mut EntropyCursor,
) -> Vec<String> {
    let mut remaining: Vec<&str> = pool.to_vec();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count.min(pool.len()) {
        let idx = cursor.draw(remaining.len());
        picked.push(remaining.remove(idx).to_string());
    }
    picked
}

/// Image slots cycle 1..=3 over the suspect index.
fn image_slot(index: usize) -> String {
    format!("/assets/suspects/{}.png", (index % 3) + 1)
}

fn slot_description(index: usize, occupation: &str) -> String {
    let label = occupation.to_lowercase();
    match index {
        0 => format!("Key stakeholder as the {label}."),
        1 => format!("Operational control as the {label}."),
        _ => format!("Supporting role as the {label}."),
    }
}

fn build_title(location: &str, target: &str, incident: &str) -> String {
    // "went missing" titles as "Missing"; a one-word incident falls back to itself
    let incident_word = incident.split(' ').nth(1).unwrap_or(incident);
    format!(
        "The {} {} at the {}",
        capitalize_first(incident_word),
        capitalize_first(target),
        capitalize_first(location)
    )
}

fn build_excerpt(location: &str, target: &str, incident: &str, time: &str) -> String {
    format!(
        "A {target} {incident} {time} at the {location}. Details appear ordinary, but something feels off."
    )
}

fn build_story(location: &str, target: &str, incident: &str, time: &str) -> String {
    format!(
        "At {time}, a {target} at the {location} {incident}. Initial checks show routine activity, with anomalies requiring closer scrutiny."
    )
}

fn build_hints(location: &str, target: &str, incident: &str, time: &str) -> Vec<String> {
    [
        format!("unusual activity observed at the {location} {time}"),
        format!("access related to the {target} shows inconsistencies"),
        format!("event sequence suggests the {target} {incident}"),
        format!("logs appear routine; anomalies likely clustered {time}"),
    ]
    .into_iter()
    .map(|h| capitalize_first(&h))
    .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

//! Surrogate generators per PHI category
//!
//! One generation routine per category, each a self-contained probabilistic
//! string construction. Generators are plain function pointers: stateless
//! apart from the engine-owned RNG that is threaded into every call, so a
//! seeded engine replays the same surrogates.
//!
//! The default dispatch table is built from an exhaustive match over
//! [`PhiCategory`], so adding a category without a generator fails to
//! compile. Callers can still swap in their own routines per category via
//! [`SurrogateGenerators::register`].

pub mod age;
pub(crate) mod corpus;
pub mod identifiers;
pub mod person;
pub mod place;
pub mod temporal;
pub(crate) mod tuning;

use crate::domain::{PhiCategory, PlainsightError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::Rng;
use regex::Captures;
use std::collections::HashMap;

/// Read-only view of the match that triggered a generator
pub struct GenerationContext<'a> {
    captures: Captures<'a>,
}

impl<'a> GenerationContext<'a> {
    pub(crate) fn new(captures: Captures<'a>) -> Self {
        Self { captures }
    }

    /// Full matched text
    pub fn text(&self) -> &str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// A numbered capture sub-group of the binding's own pattern
    pub fn group(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(|m| m.as_str())
    }
}

/// A surrogate generation routine
pub type SurrogateGenerator = fn(&GenerationContext<'_>, &mut StdRng) -> String;

/// Category → generator dispatch table
#[derive(Debug, Clone)]
pub struct SurrogateGenerators {
    table: HashMap<PhiCategory, SurrogateGenerator>,
}

impl SurrogateGenerators {
    /// Build the table with the default routine for every category
    pub fn with_defaults() -> Self {
        let mut table = HashMap::with_capacity(PhiCategory::ALL.len());
        for category in PhiCategory::ALL {
            table.insert(category, default_generator(category));
        }
        Self { table }
    }

    /// An empty table with no generators registered
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register (or replace) the generator for a category
    pub fn register(&mut self, category: PhiCategory, generator: SurrogateGenerator) {
        self.table.insert(category, generator);
    }

    /// Look up the generator for a category
    pub fn resolve(&self, category: PhiCategory) -> Result<SurrogateGenerator> {
        self.table
            .get(&category)
            .copied()
            .ok_or(PlainsightError::MissingGenerator(category))
    }
}

impl Default for SurrogateGenerators {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Default routine per category; exhaustive over the closed set
fn default_generator(category: PhiCategory) -> SurrogateGenerator {
    match category {
        PhiCategory::PersonName => person::person_name,
        PhiCategory::PersonInitials => person::person_initials,
        PhiCategory::Date => temporal::date,
        PhiCategory::Time => temporal::time,
        PhiCategory::PhoneNumber => place::phone_number,
        PhiCategory::Address => place::address,
        PhiCategory::PatientId => identifiers::patient_id,
        PhiCategory::ZNumber => identifiers::z_number,
        PhiCategory::Location => place::location,
        PhiCategory::DocumentId => identifiers::document_id,
        PhiCategory::DocumentSubId => identifiers::document_sub_id,
        PhiCategory::PhiNumber => identifiers::phi_number,
        PhiCategory::Age => age::age,
        PhiCategory::HospitalName => place::hospital_name,
        PhiCategory::AccreditationNumber => identifiers::accreditation_number,
        PhiCategory::StudyName => identifiers::study_name,
    }
}

/// Bernoulli draw with probability `p`
pub(crate) fn chance(rng: &mut StdRng, p: f64) -> bool {
    rng.gen_bool(p.clamp(0.0, 1.0))
}

/// Index into `weights` drawn proportionally to the weights.
///
/// Degenerate weight vectors (all non-positive, or containing a negative
/// entry) fall back to a uniform index choice.
pub(crate) fn weighted_index(rng: &mut StdRng, weights: &[f64]) -> usize {
    debug_assert!(!weights.is_empty());
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..weights.len()),
    }
}

/// `count` random decimal digits
pub(crate) fn digits(rng: &mut StdRng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// One random uppercase ASCII letter
pub(crate) fn upper_letter(rng: &mut StdRng) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

/// `count` random uppercase ASCII letters
pub(crate) fn upper_letters(rng: &mut StdRng, count: usize) -> String {
    (0..count).map(|_| upper_letter(rng)).collect()
}

//! Contact, address, and facility surrogates

use super::corpus;
use super::{digits, upper_letters, GenerationContext};
use rand::rngs::StdRng;
use rand::Rng;

/// Dutch-style phone number in one of four common renderings
pub fn phone_number(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    match rng.gen_range(0..4u8) {
        0 => format!("06-{}", digits(rng, 8)),
        1 => format!("+31 6 {}", digits(rng, 8)),
        2 => format!("0{} {}", digits(rng, 2), digits(rng, 7)),
        _ => format!("0{}-{}", digits(rng, 2), digits(rng, 7)),
    }
}

/// Single-line street address: "Kerkstraat 12, 3456 AB Utrecht"
pub fn address(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    let street = corpus::pick(rng, corpus::STREETS);
    let number = rng.gen_range(1..200u32);
    let postcode_digits = rng.gen_range(1000..=9999u32);
    let postcode_letters = upper_letters(rng, 2);
    let city = corpus::pick(rng, corpus::CITIES);
    format!("{street} {number}, {postcode_digits} {postcode_letters} {city}")
}

/// City name
pub fn location(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    corpus::pick(rng, corpus::CITIES).to_string()
}

/// Hospital name: facility base plus a care-setting suffix
pub fn hospital_name(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    let base = corpus::pick(rng, corpus::HOSPITAL_BASES);
    let suffix = corpus::pick(rng, corpus::HOSPITAL_SUFFIXES);
    format!("{base}{suffix}")
}

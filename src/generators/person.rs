//! Person name surrogates

use super::corpus;
use super::tuning::{
    PERSON_NAME_FIRST_ONLY_PROB, PERSON_NAME_INITIALS_PROB, PERSON_NAME_LAST_ONLY_PROB,
    PERSON_NAME_LOWERCASE_PROB, PERSON_NAME_MAX_INITIALS, PERSON_NAME_REVERSE_ORDER_PROB,
    PERSON_NAME_UPPERCASE_PROB,
};
use super::{chance, upper_letter, GenerationContext};
use rand::rngs::StdRng;
use rand::Rng;

#[derive(PartialEq)]
enum Structure {
    FirstOnly,
    LastOnly,
    Full,
}

/// Generate a person name surrogate
///
/// Structure (first-only / last-only / full) comes from one uniform draw
/// against cumulative thresholds. Initials are only allowed in the full
/// variant: a lone initial with no surname is disallowed by construction.
/// Two-part names may swap into "Lastname, First" order, and a final pass
/// picks lowercase, uppercase, or the title case the corpus already carries.
pub fn person_name(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    let first = corpus::pick(rng, corpus::FIRST_NAMES);
    let last = corpus::pick(rng, corpus::LAST_NAMES);

    let draw: f64 = rng.gen();
    let structure = if draw < PERSON_NAME_FIRST_ONLY_PROB {
        Structure::FirstOnly
    } else if draw < PERSON_NAME_FIRST_ONLY_PROB + PERSON_NAME_LAST_ONLY_PROB {
        Structure::LastOnly
    } else {
        Structure::Full
    };

    let use_initials =
        structure == Structure::Full && chance(rng, PERSON_NAME_INITIALS_PROB);

    let first_part = if use_initials {
        // 0 extra initials still yields 1 initial total
        let extra = rng.gen_range(0..PERSON_NAME_MAX_INITIALS.max(1));
        initials_run(first, extra, rng)
    } else {
        first.to_string()
    };

    let mut parts: Vec<String> = match structure {
        Structure::FirstOnly => vec![first_part],
        Structure::LastOnly => vec![last.to_string()],
        Structure::Full => vec![first_part, last.to_string()],
    };

    if parts.len() == 2 && chance(rng, PERSON_NAME_REVERSE_ORDER_PROB) {
        parts = vec![format!("{},", parts[1]), parts[0].clone()];
    }

    let name = parts.join(" ");

    let cap_draw: f64 = rng.gen();
    if cap_draw < PERSON_NAME_LOWERCASE_PROB {
        name.to_lowercase()
    } else if cap_draw < PERSON_NAME_LOWERCASE_PROB + PERSON_NAME_UPPERCASE_PROB {
        name.to_uppercase()
    } else {
        name
    }
}

/// Generate bare initials like "A.B."
pub fn person_initials(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    format!("{}.{}.", upper_letter(rng), upper_letter(rng))
}

/// Compact initials string: the given first name's initial plus
/// `extra` initials from freshly drawn first names, e.g. "J.", "J.S.T."
fn initials_run(first: &str, extra: usize, rng: &mut StdRng) -> String {
    let mut initials = String::new();
    push_initial(&mut initials, first);
    for _ in 0..extra {
        push_initial(&mut initials, corpus::pick(rng, corpus::FIRST_NAMES));
    }
    initials
}

fn push_initial(out: &mut String, name: &str) {
    if let Some(c) = name.trim().chars().next() {
        out.extend(c.to_uppercase());
        out.push('.');
    }
}

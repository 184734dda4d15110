//! Date and time surrogates

use super::corpus;
use super::tuning::{
    DATE_MONTH_AS_NAME_PROB, DATE_MONTH_NAME_ABBR_PROB, DATE_NUMERIC_PADDED_PROB,
    DATE_WINDOW_DAYS, DATE_WITH_YEAR_PROB, TIME_FORMAT_WEIGHTS, TIME_UNIT_SUFFIX_PROB,
};
use super::{chance, weighted_index, GenerationContext};
use chrono::{Datelike, Days, Local};
use rand::rngs::StdRng;
use rand::Rng;

/// Generate a date surrogate
///
/// Picks a real calendar date within the recent sampling window, then
/// composes one of eight surface formats from three orthogonal choices:
/// with/without year, month as word or number, and (full vs abbreviated
/// month word, or padded vs unpadded numerics). Padding is applied to day
/// and month together, never mixed.
pub fn date(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    let today = Local::now().date_naive();
    let offset = rng.gen_range(0..=DATE_WINDOW_DAYS);
    let sampled = today.checked_sub_days(Days::new(offset)).unwrap_or(today);

    let year = sampled.year();
    let month = sampled.month() as usize;
    let day = sampled.day();

    let with_year = chance(rng, DATE_WITH_YEAR_PROB);

    if chance(rng, DATE_MONTH_AS_NAME_PROB) {
        let month_word = if chance(rng, DATE_MONTH_NAME_ABBR_PROB) {
            corpus::MONTHS_ABBR[month - 1]
        } else {
            corpus::MONTHS_FULL[month - 1]
        };
        // the day next to a month word is never padded
        if with_year {
            format!("{day} {month_word} {year:04}")
        } else {
            format!("{day} {month_word}")
        }
    } else {
        let (day_str, month_str) = if chance(rng, DATE_NUMERIC_PADDED_PROB) {
            (format!("{day:02}"), format!("{month:02}"))
        } else {
            (day.to_string(), month.to_string())
        };
        if with_year {
            format!("{day_str}-{month_str}-{year:04}")
        } else {
            format!("{day_str}-{month_str}")
        }
    }
}

/// Generate a time surrogate
///
/// Formats: "13:45", "13.45" (both optionally suffixed " uur"), "13u45",
/// or a natural Dutch phrase.
pub fn time(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
    let hour = rng.gen_range(0..24u32);
    let minute = rng.gen_range(0..60u32);

    match weighted_index(rng, &TIME_FORMAT_WEIGHTS) {
        0 => format!("{hour:02}:{minute:02}{}", unit_suffix(rng)),
        1 => format!("{hour:02}.{minute:02}{}", unit_suffix(rng)),
        2 => format!("{hour}u{minute:02}"),
        _ => natural_time(rng),
    }
}

fn unit_suffix(rng: &mut StdRng) -> &'static str {
    if chance(rng, TIME_UNIT_SUFFIX_PROB) {
        " uur"
    } else {
        ""
    }
}

/// Natural Dutch time phrase, e.g. "kwart voor zes" or "half vier".
///
/// "half vier" means 3:30, so the half and kwart-voor templates reference
/// the next hour word; the list is indexed circularly so 12 o'clock and
/// 0 o'clock share "twaalf".
fn natural_time(rng: &mut StdRng) -> String {
    let base = rng.gen_range(0..corpus::HOUR_WORDS.len());
    let hour_word = corpus::HOUR_WORDS[base];
    let next_hour_word = corpus::HOUR_WORDS[(base + 1) % corpus::HOUR_WORDS.len()];

    match rng.gen_range(0..4u8) {
        0 => format!("kwart voor {next_hour_word}"),
        1 => format!("kwart over {hour_word}"),
        2 => format!("half {next_hour_word}"),
        _ => format!("{hour_word} uur"),
    }
}

//! Tuning constants for the probabilistic surrogate generators
//!
//! Centralized so the surface-format mix can be adjusted in one place.
//! All probabilities are in [0, 1]; cumulative groups must sum to at most 1.

/// Probability that a person name is a first name only
pub(crate) const PERSON_NAME_FIRST_ONLY_PROB: f64 = 0.20;
/// Probability that a person name is a last name only
pub(crate) const PERSON_NAME_LAST_ONLY_PROB: f64 = 0.20;
/// Probability that a full name renders its first-name part as initials
pub(crate) const PERSON_NAME_INITIALS_PROB: f64 = 0.25;
/// Maximum number of initials in an initials run ("J.S.T." = 3)
pub(crate) const PERSON_NAME_MAX_INITIALS: usize = 3;
/// Probability of "Lastname, First" ordering for two-part names
pub(crate) const PERSON_NAME_REVERSE_ORDER_PROB: f64 = 0.15;
/// Probability of an all-lowercase rendering
pub(crate) const PERSON_NAME_LOWERCASE_PROB: f64 = 0.05;
/// Probability of an all-uppercase rendering
pub(crate) const PERSON_NAME_UPPERCASE_PROB: f64 = 0.05;

/// Probability that a date includes its year
pub(crate) const DATE_WITH_YEAR_PROB: f64 = 0.55;
/// Probability that the month renders as a word rather than a number
pub(crate) const DATE_MONTH_AS_NAME_PROB: f64 = 0.40;
/// Probability that a named month uses the abbreviated form
pub(crate) const DATE_MONTH_NAME_ABBR_PROB: f64 = 0.30;
/// Probability that numeric day and month are zero-padded (both or neither)
pub(crate) const DATE_NUMERIC_PADDED_PROB: f64 = 0.50;
/// Size of the sampling window ending today, in days
pub(crate) const DATE_WINDOW_DAYS: u64 = 5 * 365;

/// Weights of the four time format families: "HH:MM", "HH.MM", "HHuMM",
/// natural Dutch phrase
pub(crate) const TIME_FORMAT_WEIGHTS: [f64; 4] = [0.50, 0.20, 0.15, 0.15];
/// Probability of a trailing " uur" on the colon/dot formats
pub(crate) const TIME_UNIT_SUFFIX_PROB: f64 = 0.30;

/// Age mixture component means (childhood, adult, elderly)
pub(crate) const AGE_GMM_MEANS: [f64; 3] = [9.0, 41.0, 72.0];
/// Age mixture component variances
pub(crate) const AGE_GMM_VARS: [f64; 3] = [36.0, 230.0, 110.0];
/// Age mixture component weights
pub(crate) const AGE_GMM_WEIGHTS: [f64; 3] = [0.15, 0.50, 0.35];
/// Inclusive lower bound on generated ages
pub(crate) const AGE_MIN: i64 = 0;
/// Inclusive upper bound on generated ages
pub(crate) const AGE_MAX: i64 = 102;
/// Rejection attempts before clamping an out-of-bounds age draw
pub(crate) const AGE_MAX_REJECTIONS: usize = 10;

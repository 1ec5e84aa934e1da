//! Generators for board test data.

use crate::models::BoardParams;
use rand::distributions::Alphanumeric;
use rand::Rng;

pub const DEFAULT_STRING_LEN: usize = 8;

/// Random ASCII alphanumeric string of `len` characters.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn repeat_character(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

/// Board with a random name and description, random `starred` and no
/// default labels.
pub fn board() -> BoardParams {
    BoardParams::named(random_string(DEFAULT_STRING_LEN))
        .desc(random_string(DEFAULT_STRING_LEN))
        .starred(rand::thread_rng().gen())
        .default_labels(false)
}

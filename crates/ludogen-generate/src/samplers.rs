//! Plausible-plaintext sources over the `fake` crate.
//!
//! Every sampler takes the run's randomness source explicitly; nothing here
//! touches global rng state.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::chrono::en::DateTimeBetween;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Password, Username};
use fake::faker::lorem::en::{Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

/// Short title-cased word runs, e.g. "Velvet Horizon".
pub fn game_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<String> = Words(2..4).fake_with_rng(rng);
    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    Username().fake_with_rng(rng)
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    FreeEmail().fake_with_rng(rng)
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

pub fn password<R: Rng + ?Sized>(rng: &mut R) -> String {
    Password(20..21).fake_with_rng(rng)
}

pub fn collection_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    format!("{} Collection", title_case(&word))
}

pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    Sentence(4..9).fake_with_rng(rng)
}

/// Uniform timestamp between `years_back` years ago and now.
pub fn datetime_within_years<R: Rng + ?Sized>(rng: &mut R, years_back: i64) -> DateTime<Utc> {
    let end = Utc::now();
    let start = end - Duration::days(365 * years_back);
    DateTimeBetween(start, end).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn titles_read_as_title_case() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let title = game_title(&mut rng);
            let mut parts = title.split(' ');
            let head = parts.next().unwrap_or("");
            assert!(head.chars().next().is_some_and(char::is_uppercase));
            assert!(parts.next().is_some());
        }
    }

    #[test]
    fn timestamps_land_in_the_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let now = Utc::now();
        for _ in 0..50 {
            let ts = datetime_within_years(&mut rng, 2);
            assert!(ts <= now);
            assert!(ts >= now - Duration::days(2 * 365 + 1));
        }
    }

    #[test]
    fn collection_names_are_capitalized() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let name = collection_name(&mut rng);
        assert!(name.ends_with(" Collection"));
        assert!(name.chars().next().is_some_and(char::is_uppercase));
    }
}

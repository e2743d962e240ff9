//! Assembly of email local-parts and domain-parts.
//!
//! A local-part joins the sanitized first and last name in random order with
//! a random delimiter, then attaches a number below [`NUMBER_UPPER_BOUND`]
//! before or after the names with a second, independently drawn delimiter.

use crate::data::{FILLER_WORDS, TOP_LEVEL_DOMAINS};
use crate::random::{RandomSource, draw_below, pick};
use crate::sanitize::sanitize;

/// Delimiters placed between the parts of a local-part.
pub(crate) const DELIMITERS: &[&str] = &["_", ".", "-"];

/// Exclusive upper bound of the number attached to a local-part.
pub(crate) const NUMBER_UPPER_BOUND: usize = 9999;

/// Builds a lowercase local-part from a first and last name.
///
/// Draws, in order: the name order, the name delimiter, the number, the
/// number placement and the number delimiter.
pub(crate) fn local_part<S>(first_name: &str, last_name: &str, source: &mut S) -> String
where
    S: RandomSource + ?Sized,
{
    let first = sanitize(first_name);
    let last = sanitize(last_name);
    let (lead, trail) = if source.coin_flip() {
        (first, last)
    } else {
        (last, first)
    };
    let name_delimiter = pick(source, DELIMITERS);
    let names = format!("{lead}{name_delimiter}{trail}");

    let number = draw_below(source, NUMBER_UPPER_BOUND);
    let number_after = source.coin_flip();
    let number_delimiter = pick(source, DELIMITERS);
    let assembled = if number_after {
        format!("{names}{number_delimiter}{number}")
    } else {
        format!("{number}{number_delimiter}{names}")
    };
    assembled.to_lowercase()
}

/// Builds a lowercase `word.tld` domain-part.
pub(crate) fn domain_part<S>(source: &mut S) -> String
where
    S: RandomSource + ?Sized,
{
    let word = pick(source, FILLER_WORDS);
    let tld = pick(source, TOP_LEVEL_DOMAINS);
    format!("{word}.{tld}").to_lowercase()
}

#[cfg(test)]
mod tests {
    //! Pins the local-part layout with scripted draws.

    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    /// Replays a fixed sequence of draws.
    struct Scripted {
        indices: VecDeque<usize>,
        coins: VecDeque<bool>,
    }

    impl Scripted {
        fn new(indices: &[usize], coins: &[bool]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                coins: coins.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, upper: usize) -> usize {
            let index = self.indices.pop_front().expect("scripted index");
            assert!(index < upper, "scripted index {index} out of 0..{upper}");
            index
        }

        fn coin_flip(&mut self) -> bool {
            self.coins.pop_front().expect("scripted coin")
        }
    }

    /// Answers every draw with the exclusive upper bound.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn below(&mut self, upper: usize) -> usize {
            upper
        }

        fn coin_flip(&mut self) -> bool {
            true
        }
    }

    #[rstest]
    // indices: name delimiter, number, number delimiter
    // coins: first name leads, number after names
    #[case(&[0, 42, 1], &[true, true], "jane_doe.42")]
    #[case(&[1, 42, 2], &[false, true], "doe.jane-42")]
    #[case(&[2, 7, 0], &[true, false], "7_jane-doe")]
    #[case(&[0, 9998, 1], &[false, false], "9998.doe_jane")]
    #[case(&[1, 0, 0], &[true, true], "jane.doe_0")]
    fn lays_out_names_and_number(
        #[case] indices: &[usize],
        #[case] coins: &[bool],
        #[case] expected: &str,
    ) {
        let mut source = Scripted::new(indices, coins);
        assert_eq!(local_part("Jane", "Doe", &mut source), expected);
    }

    #[test]
    fn sanitizes_and_lowercases_names() {
        let mut source = Scripted::new(&[1, 5, 1], &[true, true]);
        assert_eq!(
            local_part("Jürgen", "D'Aubigné", &mut source),
            "juergen.daubigne.5"
        );
    }

    #[test]
    fn domain_part_joins_word_and_tld() {
        let mut source = Scripted::new(&[0, 0], &[]);
        let expected = format!(
            "{}.{}",
            FILLER_WORDS.first().expect("filler word"),
            TOP_LEVEL_DOMAINS.first().expect("top-level domain")
        );
        assert_eq!(domain_part(&mut source), expected);
    }

    #[test]
    fn numbers_stay_below_the_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..300 {
            let local = local_part("Ann", "Lee", &mut rng);
            let number: usize = local
                .split(|c: char| !c.is_ascii_digit())
                .find(|segment| !segment.is_empty())
                .and_then(|digits| digits.parse().ok())
                .expect("local-part carries a number");
            assert!(number < NUMBER_UPPER_BOUND);
        }
    }

    #[test]
    fn delimiters_cover_all_three_characters() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = String::new();
        for _ in 0..200 {
            seen.push_str(&local_part("Ann", "Lee", &mut rng));
        }
        for delimiter in DELIMITERS {
            assert!(seen.contains(delimiter), "delimiter {delimiter} never drawn");
        }
    }

    #[test]
    fn out_of_range_source_still_builds_a_complete_address() {
        assert_eq!(local_part("Jane", "Doe", &mut OutOfRange), "jane-doe-9998");

        let domain = domain_part(&mut OutOfRange);
        let expected = format!(
            "{}.{}",
            FILLER_WORDS.last().expect("filler word"),
            TOP_LEVEL_DOMAINS.last().expect("top-level domain")
        );
        assert_eq!(domain, expected);
    }
}

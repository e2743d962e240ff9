//! Static name, filler-word and top-level-domain tables.
//!
//! Every table is compiled into the binary and never modified. Name pools are
//! wrapped in [`NamePool`], whose constructor rejects empty slices while the
//! constant is being evaluated, so a locale without names fails the build
//! rather than a draw at runtime.

mod domains;
mod names;

pub use domains::{FILLER_WORDS, TOP_LEVEL_DOMAINS};

use crate::locale::Locale;

/// An ordered, non-empty list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePool(&'static [&'static str]);

impl NamePool {
    /// Wraps a static slice of names.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty. Pools are built in `const` items, where the
    /// panic surfaces as a compile error.
    #[must_use]
    pub const fn new(names: &'static [&'static str]) -> Self {
        assert!(!names.is_empty(), "name pool must not be empty");
        Self(names)
    }

    /// Returns the names in declaration order.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        self.0
    }

    /// Returns the number of names in the pool.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `name` is one of the pool's entries.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name)
    }
}

/// Returns the female first-name pool for `locale`.
///
/// # Example
///
/// ```
/// use mail_faker::Locale;
/// use mail_faker::data::{female_first_names, male_first_names};
///
/// assert!(female_first_names(Locale::Fr).contains("Hélène"));
/// assert!(!female_first_names(Locale::De).contains("Jürgen"));
/// assert!(male_first_names(Locale::De).contains("Jürgen"));
/// ```
#[must_use]
pub const fn female_first_names(locale: Locale) -> NamePool {
    match locale {
        Locale::En => names::EN_FEMALE,
        Locale::De => names::DE_FEMALE,
        Locale::Fr => names::FR_FEMALE,
    }
}

/// Returns the male first-name pool for `locale`.
#[must_use]
pub const fn male_first_names(locale: Locale) -> NamePool {
    match locale {
        Locale::En => names::EN_MALE,
        Locale::De => names::DE_MALE,
        Locale::Fr => names::FR_MALE,
    }
}

/// Returns the last-name pool for `locale`.
#[must_use]
pub const fn last_names(locale: Locale) -> NamePool {
    match locale {
        Locale::En => names::EN_LAST,
        Locale::De => names::DE_LAST,
        Locale::Fr => names::FR_LAST,
    }
}

#[cfg(test)]
mod tests {
    //! Checks the table invariants the generators rely on.

    use rstest::rstest;

    use super::*;

    fn is_lower_alpha(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
    }

    #[rstest]
    #[case(Locale::En)]
    #[case(Locale::De)]
    #[case(Locale::Fr)]
    fn every_locale_has_all_three_pools(#[case] locale: Locale) {
        assert!(!female_first_names(locale).is_empty());
        assert!(!male_first_names(locale).is_empty());
        assert!(!last_names(locale).is_empty());
    }

    #[test]
    fn filler_words_are_lowercase_ascii() {
        assert!(!FILLER_WORDS.is_empty());
        for word in FILLER_WORDS {
            assert!(is_lower_alpha(word), "bad filler word: {word:?}");
        }
    }

    #[test]
    fn top_level_domains_are_lowercase_ascii() {
        assert!(!TOP_LEVEL_DOMAINS.is_empty());
        for tld in TOP_LEVEL_DOMAINS {
            assert!(is_lower_alpha(tld), "bad top-level domain: {tld:?}");
        }
    }

    #[test]
    fn top_level_domains_are_a_deduplicated_curated_subset() {
        let mut sorted = TOP_LEVEL_DOMAINS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), TOP_LEVEL_DOMAINS.len(), "duplicate top-level domain");

        for expected in ["com", "org", "net", "de", "fr", "uk", "io", "dev"] {
            assert!(TOP_LEVEL_DOMAINS.contains(&expected), "missing {expected}");
        }
        for excluded in ["adult", "porn", "sex", "sexy", "xxx"] {
            assert!(!TOP_LEVEL_DOMAINS.contains(&excluded), "unexpected {excluded}");
        }
        assert!(TOP_LEVEL_DOMAINS.iter().all(|tld| !tld.starts_with("xn")));
    }

    #[test]
    fn pools_contain_no_blank_entries() {
        for locale in Locale::ALL {
            let pools = [
                female_first_names(locale),
                male_first_names(locale),
                last_names(locale),
            ];
            for pool in pools {
                assert!(pool.names().iter().all(|name| !name.trim().is_empty()));
            }
        }
    }

    #[test]
    fn contains_matches_exact_entries_only() {
        let pool = last_names(Locale::De);
        assert!(pool.contains("Müller"));
        assert!(!pool.contains("mueller"));
    }
}

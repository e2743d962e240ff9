//! The public name and address generator.

use crate::address;
use crate::data::{female_first_names, last_names, male_first_names};
use crate::gender::Gender;
use crate::locale::{Locale, resolve_locale, system_language_code};
use crate::random::{RandomSource, pick};

/// Generates fake names and email addresses for one locale.
///
/// The locale is resolved once, at construction, and never changes. The
/// generator holds no other state, so it is cheap to copy and safe to share
/// between threads. Operations without an explicit source draw from the
/// thread-local RNG.
///
/// # Example
///
/// ```
/// use mail_faker::{Gender, MailFaker};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let faker = MailFaker::with_language("fr");
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let first = faker.full_address_with_rng(Gender::Male, &mut rng);
/// let mut replay = ChaCha8Rng::seed_from_u64(7);
/// assert_eq!(first, faker.full_address_with_rng(Gender::Male, &mut replay));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MailFaker {
    locale: Locale,
}

impl MailFaker {
    /// Creates a generator for the host language, falling back to English.
    #[must_use]
    pub fn new() -> Self {
        Self::with_language(&system_language_code())
    }

    /// Creates a generator for an ISO 639-1 language code.
    ///
    /// Unsupported codes resolve to English without error.
    #[must_use]
    pub fn with_language(code: &str) -> Self {
        Self::with_locale(resolve_locale(code))
    }

    /// Creates a generator for an already resolved locale.
    #[must_use]
    pub const fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the resolved locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns a random first name for `gender`.
    #[must_use]
    pub fn first_name(&self, gender: Gender) -> &'static str {
        self.first_name_with_rng(gender, &mut rand::rng())
    }

    /// Returns a first name for `gender` drawn from `source`.
    pub fn first_name_with_rng<S>(&self, gender: Gender, source: &mut S) -> &'static str
    where
        S: RandomSource + ?Sized,
    {
        let pool = match gender {
            Gender::Female => female_first_names(self.locale),
            Gender::Male => male_first_names(self.locale),
            Gender::Random => {
                if source.coin_flip() {
                    female_first_names(self.locale)
                } else {
                    male_first_names(self.locale)
                }
            }
        };
        pick(source, pool.names())
    }

    /// Returns a random last name.
    #[must_use]
    pub fn last_name(&self) -> &'static str {
        self.last_name_with_rng(&mut rand::rng())
    }

    /// Returns a last name drawn from `source`.
    pub fn last_name_with_rng<S>(&self, source: &mut S) -> &'static str
    where
        S: RandomSource + ?Sized,
    {
        pick(source, last_names(self.locale).names())
    }

    /// Returns a random `"First Last"` name for `gender`.
    #[must_use]
    pub fn full_name(&self, gender: Gender) -> String {
        self.full_name_with_rng(gender, &mut rand::rng())
    }

    /// Returns a `"First Last"` name for `gender` drawn from `source`.
    pub fn full_name_with_rng<S>(&self, gender: Gender, source: &mut S) -> String
    where
        S: RandomSource + ?Sized,
    {
        let first = self.first_name_with_rng(gender, source);
        let last = self.last_name_with_rng(source);
        format!("{first} {last}")
    }

    /// Returns a random email local-part for `gender`.
    ///
    /// The result contains only lowercase ASCII letters, digits and the
    /// delimiters `_`, `.` and `-`.
    #[must_use]
    pub fn local_part(&self, gender: Gender) -> String {
        self.local_part_with_rng(gender, &mut rand::rng())
    }

    /// Returns an email local-part for `gender` drawn from `source`.
    pub fn local_part_with_rng<S>(&self, gender: Gender, source: &mut S) -> String
    where
        S: RandomSource + ?Sized,
    {
        let first = self.first_name_with_rng(gender, source);
        let last = self.last_name_with_rng(source);
        address::local_part(first, last, source)
    }

    /// Returns a random `word.tld` domain-part.
    #[must_use]
    pub fn domain_part(&self) -> String {
        self.domain_part_with_rng(&mut rand::rng())
    }

    /// Returns a `word.tld` domain-part drawn from `source`.
    pub fn domain_part_with_rng<S>(&self, source: &mut S) -> String
    where
        S: RandomSource + ?Sized,
    {
        address::domain_part(source)
    }

    /// Returns a random `local@domain` address for `gender`.
    #[must_use]
    pub fn full_address(&self, gender: Gender) -> String {
        self.full_address_with_rng(gender, &mut rand::rng())
    }

    /// Returns a `local@domain` address for `gender` drawn from `source`.
    pub fn full_address_with_rng<S>(&self, gender: Gender, source: &mut S) -> String
    where
        S: RandomSource + ?Sized,
    {
        let local = self.local_part_with_rng(gender, source);
        let domain = self.domain_part_with_rng(source);
        format!("{local}@{domain}")
    }
}

impl Default for MailFaker {
    fn default() -> Self {
        Self::new()
    }
}

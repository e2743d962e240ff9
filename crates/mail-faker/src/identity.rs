//! Fake identities whose email address matches the generated name.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address;
use crate::faker::MailFaker;
use crate::gender::Gender;
use crate::random::RandomSource;

/// A generated person and an email address built from their name.
///
/// # Example
///
/// ```
/// use mail_faker::FakeIdentity;
///
/// let identity = FakeIdentity {
///     first_name: "Jürgen".to_owned(),
///     last_name: "Müller".to_owned(),
///     email: "juergen.mueller_12@dolor.de".to_owned(),
/// };
///
/// assert_eq!(identity.full_name(), "Jürgen Müller");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeIdentity {
    /// Given name as drawn from the locale's pool.
    pub first_name: String,
    /// Family name as drawn from the locale's pool.
    pub last_name: String,
    /// Address whose local-part embeds the sanitized names.
    pub email: String,
}

impl FakeIdentity {
    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl MailFaker {
    /// Returns a random identity for `gender`.
    #[must_use]
    pub fn identity(&self, gender: Gender) -> FakeIdentity {
        self.identity_with_rng(gender, &mut rand::rng())
    }

    /// Returns an identity for `gender` drawn from `source`.
    ///
    /// Unlike [`MailFaker::full_address`], the address reuses the drawn names
    /// instead of drawing fresh ones.
    pub fn identity_with_rng<S>(&self, gender: Gender, source: &mut S) -> FakeIdentity
    where
        S: RandomSource + ?Sized,
    {
        let first_name = self.first_name_with_rng(gender, source);
        let last_name = self.last_name_with_rng(source);
        let local = address::local_part(first_name, last_name, source);
        let domain = address::domain_part(source);

        FakeIdentity {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: format!("{local}@{domain}"),
        }
    }
}

/// Generates `count` identities reproducibly from `seed`.
///
/// The same locale, seed and count always produce the same identities.
///
/// # Example
///
/// ```
/// use mail_faker::{Locale, MailFaker, generate_identities};
///
/// let faker = MailFaker::with_locale(Locale::En);
/// let first = generate_identities(faker, 42, 5);
/// let second = generate_identities(faker, 42, 5);
///
/// assert_eq!(first.len(), 5);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_identities(faker: MailFaker, seed: u64, count: usize) -> Vec<FakeIdentity> {
    debug!(locale = %faker.locale(), seed, count, "generating identities");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| faker.identity_with_rng(Gender::Random, &mut rng))
        .collect()
}

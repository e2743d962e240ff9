//! Locale-aware fake personal names and email addresses for test data.
//!
//! The crate draws first and last names from static English, German and
//! French pools, honouring a requested [`Gender`], and assembles plausible
//! email addresses from them. Names are transliterated to ASCII before they
//! reach an address, and domains are built from lorem-ipsum filler words so
//! they are unlikely to exist.
//!
//! # Overview
//!
//! - [`MailFaker`] is the entry point. It resolves a language code once, at
//!   construction, and falls back to English for unsupported codes.
//! - Every operation has a `*_with_rng` variant accepting any
//!   [`RandomSource`], so callers can supply a seeded generator.
//! - [`generate_identities`] produces reproducible batches of
//!   [`FakeIdentity`] records from a `u64` seed.
//! - [`MailFakerSettings`] loads the language and seed from the environment.
//!
//! # Example
//!
//! ```
//! use mail_faker::{Gender, Locale, MailFaker};
//!
//! let faker = MailFaker::with_language("de");
//! assert_eq!(faker.locale(), Locale::De);
//!
//! let address = faker.full_address(Gender::Female);
//! let (local, domain) = address.split_once('@').expect("address has an @");
//! assert!(!local.is_empty());
//! assert!(domain.contains('.'));
//!
//! // Unsupported codes fall back to English.
//! assert_eq!(MailFaker::with_language("zh").locale(), Locale::En);
//! ```

mod address;
mod config;
pub mod data;
mod error;
mod faker;
mod gender;
mod identity;
mod locale;
mod random;
mod sanitize;

pub use config::{DEFAULT_IDENTITY_COUNT, MailFakerSettings};
pub use error::ConfigError;
pub use faker::MailFaker;
pub use gender::Gender;
pub use identity::{FakeIdentity, generate_identities};
pub use locale::{FALLBACK_LANGUAGE_CODE, Locale, resolve_locale, system_language_code};
pub use random::RandomSource;
pub use sanitize::sanitize;

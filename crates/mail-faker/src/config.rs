//! Generator settings loaded via OrthoConfig.
//!
//! Values come from `MAIL_FAKER_*` environment variables and any discovered
//! configuration file.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::faker::MailFaker;
use crate::identity::{FakeIdentity, generate_identities};

const PROGRAM_NAME: &str = "mail-faker";

/// Number of identities produced by [`MailFakerSettings::identities`] unless
/// overridden.
pub const DEFAULT_IDENTITY_COUNT: usize = 12;

/// Configuration values controlling name and address generation.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MAIL_FAKER")]
pub struct MailFakerSettings {
    /// ISO 639-1 language code; the host language is used when absent.
    pub language: Option<String>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
    /// Number of identities generated per batch.
    #[ortho_config(default = 12)]
    pub count: usize,
}

impl MailFakerSettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Builds a generator for the configured language.
    #[must_use]
    pub fn faker(&self) -> MailFaker {
        self.language
            .as_deref()
            .map_or_else(MailFaker::new, MailFaker::with_language)
    }

    /// Returns an RNG seeded from the configured seed, if any.
    #[must_use]
    pub fn seeded_rng(&self) -> Option<ChaCha8Rng> {
        self.seed.map(ChaCha8Rng::seed_from_u64)
    }

    /// Generates `count` identities for the configured language.
    ///
    /// Output is reproducible when a seed is configured; otherwise a fresh
    /// seed is drawn from the thread-local RNG.
    #[must_use]
    pub fn identities(&self) -> Vec<FakeIdentity> {
        let seed = self.seed.unwrap_or_else(rand::random);
        generate_identities(self.faker(), seed, self.count)
    }
}

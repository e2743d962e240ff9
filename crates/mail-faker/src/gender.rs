//! Gender selector for first-name draws.

use serde::{Deserialize, Serialize};

/// Selects which first-name pool a draw uses.
///
/// [`Gender::Random`] flips an unbiased coin between the female and male
/// pools on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Draw from the female first-name pool.
    Female,
    /// Draw from the male first-name pool.
    Male,
    /// Pick the female or male pool at random.
    #[default]
    Random,
}

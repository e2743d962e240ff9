//! Locale resolution and host language detection.
//!
//! A [`MailFaker`](crate::MailFaker) resolves its language code exactly once.
//! Unsupported codes never fail; they silently resolve to English.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Language code used when a request or the host locale is unsupported.
pub const FALLBACK_LANGUAGE_CODE: &str = "en";

/// Environment variables consulted for the host locale, in POSIX precedence.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A supported name-pool locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English names.
    #[default]
    En,
    /// German names.
    De,
    /// French names.
    Fr,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 3] = [Self::En, Self::De, Self::Fr];

    /// Returns the ISO 639-1 code of the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Looks up a locale by its exact ISO 639-1 code.
    ///
    /// # Example
    ///
    /// ```
    /// use mail_faker::Locale;
    ///
    /// assert_eq!(Locale::from_code("fr"), Some(Locale::Fr));
    /// assert_eq!(Locale::from_code("FR"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves a requested language code to a supported locale.
///
/// Codes are matched exactly; anything else resolves to [`Locale::En`].
///
/// # Example
///
/// ```
/// use mail_faker::{Locale, resolve_locale};
///
/// assert_eq!(resolve_locale("de"), Locale::De);
/// assert_eq!(resolve_locale("ar"), Locale::En);
/// ```
#[must_use]
pub fn resolve_locale(code: &str) -> Locale {
    Locale::from_code(code).unwrap_or_else(|| {
        debug!(
            requested = code,
            fallback = FALLBACK_LANGUAGE_CODE,
            "unsupported language code, using fallback locale"
        );
        Locale::En
    })
}

/// Detects the host language from the POSIX locale environment.
///
/// The first non-empty value of `LC_ALL`, `LC_MESSAGES` and `LANG` is used.
/// Returns [`FALLBACK_LANGUAGE_CODE`] when nothing is set or the value names
/// the `C`/`POSIX` locale.
///
/// Only the environment is consulted. Windows hosts and macOS GUI processes
/// usually do not export these variables and so resolve to English; pass an
/// explicit code to [`MailFaker::with_language`](crate::MailFaker::with_language)
/// or set `MAIL_FAKER_LANGUAGE` (see
/// [`MailFakerSettings`](crate::MailFakerSettings)) on such hosts.
#[must_use]
pub fn system_language_code() -> String {
    LOCALE_ENV_VARS
        .iter()
        .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
        .and_then(|value| language_from_posix_locale(&value).map(str::to_ascii_lowercase))
        .unwrap_or_else(|| FALLBACK_LANGUAGE_CODE.to_owned())
}

/// Extracts the language segment of a POSIX locale such as `de_DE.UTF-8`.
fn language_from_posix_locale(value: &str) -> Option<&str> {
    let language = value
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();
    let usable = !language.is_empty()
        && language.chars().all(|c| c.is_ascii_alphabetic())
        && !language.eq_ignore_ascii_case("C")
        && !language.eq_ignore_ascii_case("POSIX");
    if !usable {
        debug!(locale = value, "host locale carries no language code");
        return None;
    }
    Some(language)
}

#[cfg(test)]
mod tests {
    //! Covers locale lookup, fallback and host language parsing.

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", Locale::En)]
    #[case("de", Locale::De)]
    #[case("fr", Locale::Fr)]
    fn supported_codes_resolve_to_themselves(#[case] code: &str, #[case] expected: Locale) {
        assert_eq!(resolve_locale(code), expected);
        assert_eq!(resolve_locale(code).code(), code);
    }

    #[rstest]
    #[case("zh")]
    #[case("ar")]
    #[case("")]
    #[case("DE")]
    #[case("de_DE")]
    fn unsupported_codes_fall_back_to_english(#[case] code: &str) {
        assert_eq!(resolve_locale(code), Locale::En);
    }

    #[test]
    fn locale_displays_its_code() {
        assert_eq!(Locale::Fr.to_string(), "fr");
    }

    #[test]
    fn locale_serializes_as_code() {
        let json = serde_json::to_string(&Locale::De).expect("serialize");
        assert_eq!(json, "\"de\"");
    }

    #[rstest]
    #[case("de_DE.UTF-8", Some("de"))]
    #[case("fr_FR", Some("fr"))]
    #[case("en-GB", Some("en"))]
    #[case("sr@latin", Some("sr"))]
    #[case("C", None)]
    #[case("C.UTF-8", None)]
    #[case("POSIX", None)]
    #[case("", None)]
    #[case("_DE", None)]
    fn parses_posix_locale_values(#[case] value: &str, #[case] expected: Option<&str>) {
        assert_eq!(language_from_posix_locale(value), expected);
    }

    #[test]
    fn system_language_prefers_lc_all() {
        let _guard = lock_env([
            ("LC_ALL", Some("fr_FR.UTF-8".to_owned())),
            ("LC_MESSAGES", Some("de_DE.UTF-8".to_owned())),
            ("LANG", Some("en_US.UTF-8".to_owned())),
        ]);

        assert_eq!(system_language_code(), "fr");
    }

    #[test]
    fn system_language_skips_empty_variables() {
        let _guard = lock_env([
            ("LC_ALL", Some(String::new())),
            ("LC_MESSAGES", None::<String>),
            ("LANG", Some("DE_at".to_owned())),
        ]);

        assert_eq!(system_language_code(), "de");
    }

    #[test]
    fn system_language_defaults_to_english_when_unset() {
        let _guard = lock_env([
            ("LC_ALL", None::<String>),
            ("LC_MESSAGES", None::<String>),
            ("LANG", None::<String>),
        ]);

        assert_eq!(system_language_code(), FALLBACK_LANGUAGE_CODE);
    }

    #[test]
    fn system_language_treats_c_locale_as_english() {
        let _guard = lock_env([
            ("LC_ALL", Some("C".to_owned())),
            ("LC_MESSAGES", None::<String>),
            ("LANG", Some("de_DE.UTF-8".to_owned())),
        ]);

        assert_eq!(system_language_code(), FALLBACK_LANGUAGE_CODE);
    }
}

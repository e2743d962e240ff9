//! Transliteration of name characters that do not belong in an address.
//!
//! The replacement table covers the apostrophe used in English surnames, the
//! German umlauts and sharp s, and the accented letters of French. It applies
//! to every name regardless of the locale that produced it. Characters outside
//! the table are kept as they are.
//!
//! Decomposed input (a base letter followed by a combining mark, as produced
//! by NFD normalization) is composed first when the pair names a table
//! character, so `u` + U+0308 is treated like `ü`.

use std::borrow::Cow;

/// Replaces diacritics and apostrophes with ASCII letters.
///
/// Each input character, or base letter plus combining mark, maps to at most
/// one replacement, so the result does not depend on the order rules are
/// applied in.
///
/// # Examples
///
/// ```
/// use mail_faker::sanitize;
///
/// assert_eq!(sanitize("Günther Müller"), "Guenther Mueller");
/// assert_eq!(sanitize("François"), "Francois");
/// assert_eq!(sanitize("O'Brien"), "OBrien");
/// assert_eq!(sanitize("Gu\u{308}nther"), "Guenther");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut chars = text.chars().peekable();
    std::iter::from_fn(move || {
        let base = chars.next()?;
        let composed = chars.peek().and_then(|&mark| compose(base, mark));
        if composed.is_some() {
            chars.next();
        }
        Some(composed.unwrap_or(base))
    })
    .map(|c| replacement(c).map_or_else(|| Cow::Owned(c.to_string()), Cow::Borrowed))
    .collect()
}

/// Composes a base letter and a combining mark into a table character.
const fn compose(base: char, mark: char) -> Option<char> {
    let composed = match (base, mark) {
        // combining grave accent
        ('A', '\u{300}') => 'À',
        ('a', '\u{300}') => 'à',
        ('E', '\u{300}') => 'È',
        ('e', '\u{300}') => 'è',
        ('U', '\u{300}') => 'Ù',
        ('u', '\u{300}') => 'ù',
        // combining acute accent
        ('E', '\u{301}') => 'É',
        ('e', '\u{301}') => 'é',
        // combining circumflex
        ('A', '\u{302}') => 'Â',
        ('a', '\u{302}') => 'â',
        ('E', '\u{302}') => 'Ê',
        ('e', '\u{302}') => 'ê',
        ('I', '\u{302}') => 'Î',
        ('i', '\u{302}') => 'î',
        ('O', '\u{302}') => 'Ô',
        ('o', '\u{302}') => 'ô',
        ('U', '\u{302}') => 'Û',
        ('u', '\u{302}') => 'û',
        // combining diaeresis
        ('A', '\u{308}') => 'Ä',
        ('a', '\u{308}') => 'ä',
        ('E', '\u{308}') => 'Ë',
        ('e', '\u{308}') => 'ë',
        ('I', '\u{308}') => 'Ï',
        ('i', '\u{308}') => 'ï',
        ('O', '\u{308}') => 'Ö',
        ('o', '\u{308}') => 'ö',
        ('U', '\u{308}') => 'Ü',
        ('u', '\u{308}') => 'ü',
        ('Y', '\u{308}') => 'Ÿ',
        ('y', '\u{308}') => 'ÿ',
        // combining cedilla
        ('C', '\u{327}') => 'Ç',
        ('c', '\u{327}') => 'ç',
        _ => return None,
    };
    Some(composed)
}

/// Returns the replacement for a character in the table, if any.
const fn replacement(c: char) -> Option<&'static str> {
    let ascii = match c {
        '\'' => "",
        // German
        'Ä' => "Ae",
        'ä' => "ae",
        'Ü' => "Ue",
        'ü' => "ue",
        'Ö' => "Oe",
        'ö' => "oe",
        'ß' => "ss",
        // French
        'À' | 'Â' => "A",
        'à' | 'â' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' => "C",
        'ç' => "c",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'Î' | 'Ï' => "I",
        'î' | 'ï' => "i",
        'Ô' => "O",
        'ô' => "o",
        'Œ' => "OE",
        'œ' => "oe",
        'Ù' | 'Û' => "U",
        'ù' | 'û' => "u",
        'Ÿ' => "Y",
        'ÿ' => "y",
        _ => return None,
    };
    Some(ascii)
}

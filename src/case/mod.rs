//! Title casing and first-word casing.
//!
//! Casing is word oriented: a word is a maximal run of non-whitespace
//! characters, and all whitespace (leading, trailing and between words) is
//! preserved verbatim. Tokens that look like acronyms - two or more letters
//! with no lowercase letter among them - are left unmodified, so
//! `"a HTML test"` becomes `"A HTML Test"` rather than `"A Html Test"`.

#[cfg(test)]
mod tests;

/// Case-folding rules applied when uppercasing word-initial letters.
///
/// This stands in for the host platform's opaque culture token: the crate
/// never interprets it beyond selecting the uppercase mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Locale-independent Unicode uppercase mapping.
    #[default]
    Neutral,
    /// Turkic dotted/dotless-I rules: `i` uppercases to `İ` and `ı` to `I`.
    Turkic,
}

impl Locale {
    /// Uppercases a single character under this locale's rules.
    fn uppercase(self, c: char) -> String {
        match (self, c) {
            (Locale::Turkic, 'i') => "İ".to_string(),
            (Locale::Turkic, 'ı') => "I".to_string(),
            _ => c.to_uppercase().collect(),
        }
    }
}

/// Converts a string to title case, capitalizing each word.
///
/// Uses [`Locale::Neutral`] casing rules; see [`to_title_case_in`] for
/// locale-specific behavior. Leading and trailing whitespace is preserved
/// and acronyms are left untouched.
///
/// # Examples
///
/// ```
/// use niceties::case::to_title_case;
///
/// assert_eq!(to_title_case("test of to title case"), "Test Of To Title Case");
/// assert_eq!(to_title_case("this is a HTML test"), "This Is A HTML Test");
/// ```
pub fn to_title_case(text: &str) -> String {
    to_title_case_in(text, Locale::default())
}

/// Converts a string to title case using the given locale's casing rules.
///
/// # Examples
///
/// ```
/// use niceties::case::{Locale, to_title_case_in};
///
/// assert_eq!(
///     to_title_case_in("ingilis dili", Locale::Turkic),
///     "İngilis Dili"
/// );
/// ```
pub fn to_title_case_in(text: &str, locale: Locale) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                result.push_str(&recase_word(&word, locale));
                word.clear();
            }
            result.push(c);
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        result.push_str(&recase_word(&word, locale));
    }

    result
}

/// Capitalizes only the first word of a string.
///
/// The first non-whitespace token gets the same per-word casing as
/// [`to_title_case`] (including acronym preservation); everything else,
/// including leading whitespace and the original separators, is preserved
/// verbatim.
///
/// # Examples
///
/// ```
/// use niceties::case::to_upper_first;
///
/// assert_eq!(to_upper_first("test of casing"), "Test of casing");
/// assert_eq!(to_upper_first("  test"), "  Test");
/// assert_eq!(to_upper_first("   "), "   ");
/// ```
pub fn to_upper_first(text: &str) -> String {
    to_upper_first_in(text, Locale::default())
}

/// Capitalizes only the first word of a string using the given locale.
///
/// # Examples
///
/// ```
/// use niceties::case::{Locale, to_upper_first_in};
///
/// assert_eq!(to_upper_first_in("ingilis", Locale::Turkic), "İngilis");
/// ```
pub fn to_upper_first_in(text: &str, locale: Locale) -> String {
    let stripped = text.trim_start();
    if stripped.is_empty() {
        return text.to_string();
    }

    let leading = &text[..text.len() - stripped.len()];
    let word_end = stripped
        .find(char::is_whitespace)
        .unwrap_or(stripped.len());
    let (word, tail) = stripped.split_at(word_end);

    format!("{leading}{}{tail}", recase_word(word, locale))
}

/// Acronym heuristic: two or more letters, none of them lowercase.
fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && !word.chars().any(char::is_lowercase)
}

/// Uppercases the first letter of a single word, leaving acronyms alone.
fn recase_word(word: &str, locale: Locale) -> String {
    if is_acronym(word) {
        return word.to_string();
    }

    let mut result = String::with_capacity(word.len());
    let mut recased = false;
    for c in word.chars() {
        if !recased && c.is_alphabetic() {
            result.push_str(&locale.uppercase(c));
            recased = true;
        } else {
            result.push(c);
        }
    }
    result
}

//! Text utilities: cleanup, vowel counting, palindrome checking
//!
//! The punctuation and vowel sets are fixed constants, not configuration.
//! Palindrome checking is the only operation that normalizes its input; see
//! [`is_palindrome`] for the exact pipeline.

use unicode_normalization::UnicodeNormalization;

/// Punctuation characters stripped by [`clean_text`]
pub const PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '\'', '"', '(', ')', '-', '_',
];

/// Vowels counted by [`count_vowels`] — the unaccented Latin set only
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Lowercase a string and strip the fixed punctuation set.
///
/// Lowercasing is locale-independent Unicode lowercasing; accents are
/// preserved, not stripped. Characters outside [`PUNCTUATION`] (digits,
/// symbols, whitespace) pass through untouched — stripped characters are
/// removed, never replaced with spaces. Applying the function twice yields
/// the same result as applying it once.
///
/// # Examples
///
/// ```
/// use textkit::clean_text;
///
/// assert_eq!(clean_text("Olá, Mundo!!!"), "olá mundo");
/// assert_eq!(clean_text("A-b_c(d)e"), "abcde");
/// ```
pub fn clean_text(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|ch| !PUNCTUATION.contains(ch))
        .collect()
}

/// Count occurrences of the five unaccented Latin vowels, case-insensitively.
///
/// Accented variants (á, é, ...) are deliberately not counted, and no
/// normalization is applied before comparison, so a decomposed `e` +
/// combining accent still contributes its base letter while a precomposed
/// `é` does not.
///
/// # Examples
///
/// ```
/// use textkit::count_vowels;
///
/// assert_eq!(count_vowels("Python"), 1);
/// assert_eq!(count_vowels("aeiou AEIOU"), 10);
/// assert_eq!(count_vowels("áéíóú"), 0);
/// ```
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|ch| VOWELS.contains(&ch.to_ascii_lowercase()))
        .count()
}

/// Check whether a string reads the same forward and backward after
/// normalization.
///
/// Normalization pipeline, in order:
/// 1. Full Unicode lowercasing (`char::to_lowercase`, handling multi-char
///    expansions such as İ → i + combining dot).
/// 2. NFD decomposition, so composed and decomposed spellings of the same
///    text compare identically.
/// 3. Retain only alphanumeric characters — letters and digits from any
///    script. Combining marks are not alphanumeric, so accents are dropped
///    here along with spaces, punctuation, and symbols.
///
/// The surviving character sequence is compared against its reverse.
///
/// # Examples
///
/// ```
/// use textkit::is_palindrome;
///
/// assert!(is_palindrome("ana"));
/// assert!(is_palindrome("Roma é amor"));
/// assert!(!is_palindrome("Python"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let folded: Vec<char> = s
        .chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|ch| ch.is_alphanumeric())
        .collect();
    tracing::trace!(units = folded.len(), "palindrome comparison units");
    folded.iter().eq(folded.iter().rev())
}

// Fixed lowercase alphabet: index mapping, validation and normalization

/// Number of symbols in the supported alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Map a letter to its child slot, or `None` if it is outside `a`-`z`.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`].
///
/// # Panics
///
/// Panics if `index >= ALPHABET_SIZE`.
#[inline]
pub fn index_letter(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "letter index out of range: {index}");
    (b'a' + index as u8) as char
}

/// Returns `true` if `c` belongs to the supported alphabet.
#[inline]
pub fn is_letter(c: char) -> bool {
    letter_index(c).is_some()
}

/// Lowercase a word for dictionary matching.
///
/// Only ASCII letters are folded. Anything else is kept as-is, so a word
/// with non-ASCII letters still fails validation afterwards instead of
/// silently turning into a different word.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Find the first character outside the alphabet.
///
/// Returns the character position (counted in `char`s, not bytes) and the
/// offending character.
pub fn first_invalid(word: &str) -> Option<(usize, char)> {
    word.chars().enumerate().find(|&(_, c)| !is_letter(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_covers_alphabet() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('m'), Some(12));
        assert_eq!(letter_index('z'), Some(25));
    }

    #[test]
    fn letter_index_rejects_other_symbols() {
        for c in ['A', 'Z', '0', '-', ' ', '\'', '\u{00E4}', '{', '`'] {
            assert_eq!(letter_index(c), None, "{c:?}");
        }
    }

    #[test]
    fn index_letter_is_inverse() {
        for i in 0..ALPHABET_SIZE {
            assert_eq!(letter_index(index_letter(i)), Some(i));
        }
    }

    #[test]
    #[should_panic]
    fn index_letter_out_of_range() {
        index_letter(ALPHABET_SIZE);
    }

    #[test]
    fn normalize_folds_ascii_only() {
        assert_eq!(normalize("BoY"), "boy");
        assert_eq!(normalize("\u{00C4}iti"), "\u{00C4}iti");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn first_invalid_reports_char_position() {
        assert_eq!(first_invalid("boat"), None);
        assert_eq!(first_invalid("bo4t"), Some((2, '4')));
        assert_eq!(first_invalid("\u{00E4}x"), Some((0, '\u{00E4}')));
        // Position is in chars even after a multi-byte character.
        assert_eq!(first_invalid("a\u{00E4}b!"), Some((1, '\u{00E4}')));
    }

    #[test]
    fn empty_word_has_no_invalid_char() {
        assert_eq!(first_invalid(""), None);
        assert_eq!(first_invalid("Boy"), Some((0, 'B')));
    }
}

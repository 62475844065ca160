//! The two supported scripts: letter classification and filler letters.

/// Upper-case Latin letters.
pub const LATIN: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Upper-case Russian Cyrillic letters, `Ё` included.
pub const CYRILLIC: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й',
    'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф',
    'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Number of distinct filler letters (both scripts).
pub const FILLER_COUNT: usize = LATIN.len() + CYRILLIC.len();

/// Filler letter by index into the Latin-then-Cyrillic union.
pub fn filler(index: usize) -> char {
    if index < LATIN.len() {
        LATIN[index]
    } else {
        CYRILLIC[(index - LATIN.len()) % CYRILLIC.len()]
    }
}

/// True for Latin `a-z`/`A-Z` and Cyrillic `а-я`/`А-Я` plus `ё`/`Ё`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

/// Upper-case a single char for tile display.
///
/// Chars whose upper case is more than one char (`ß`) are kept as-is so a
/// tile always holds exactly one char.
pub fn display_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_scripts_are_letters() {
        for c in LATIN.iter().chain(CYRILLIC.iter()) {
            assert!(is_letter(*c), "{c} should be a letter");
            assert!(is_letter(c.to_lowercase().next().unwrap()));
        }
    }

    #[test]
    fn punctuation_digits_and_other_scripts_are_not_letters() {
        for c in [' ', '-', '\'', '’', '.', '1', '«', 'é', 'ß', 'Ω'] {
            assert!(!is_letter(c), "{c:?} should not be a letter");
        }
    }

    #[test]
    fn filler_covers_the_union_in_order() {
        assert_eq!(FILLER_COUNT, 59);
        assert_eq!(filler(0), 'A');
        assert_eq!(filler(25), 'Z');
        assert_eq!(filler(26), 'А');
        assert_eq!(filler(58), 'Я');
    }

    #[test]
    fn display_upper_keeps_single_char() {
        assert_eq!(display_upper('d'), 'D');
        assert_eq!(display_upper('ё'), 'Ё');
        assert_eq!(display_upper('ß'), 'ß');
        assert_eq!(display_upper('7'), '7');
    }
}

/// Punctuation dropped before comparing words.
const STRIPPED: [char; 15] = [
    '-', '_', '\'', '’', '‘', 'ʼ', '`', '.', ',', '!', '?', '«', '»', '(', ')',
];

fn is_stripped(c: char) -> bool {
    c.is_whitespace() || STRIPPED.contains(&c)
}

/// Canonical form of a word for equality checks.
///
/// Removes whitespace and the fixed punctuation set, then lower-cases what is
/// left. Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_stripped(c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_punctuation() {
        assert_eq!(normalize("Mother-in-Law"), "motherinlaw");
        assert_eq!(normalize("  ice cream  "), "icecream");
        assert_eq!(normalize("rock’n’roll!"), "rocknroll");
        assert_eq!(normalize("«Hello», (world)?"), "helloworld");
        assert_eq!(normalize("snake_case.name"), "snakecasename");
    }

    #[test]
    fn folds_cyrillic_case() {
        assert_eq!(normalize("ПРИВЕТ"), "привет");
        assert_eq!(normalize("Ёлка"), "ёлка");
    }

    #[test]
    fn keeps_chars_outside_the_stripped_set() {
        assert_eq!(normalize("R2-D2"), "r2d2");
        assert_eq!(normalize("a;b:c"), "a;b:c");
    }

    #[test]
    fn empty_and_punctuation_only_inputs_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" -- ... !? "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["DRAGON", "Mother-In-Law", "ПРИВЕТ, мир!", "İstanbul", "  ", "a_b's"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}

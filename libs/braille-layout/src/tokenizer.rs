//! # Word Tokenizer
//!
//! Longest-match conversion of a word into a sequence of Braille cells.

use braille_alphabet::{Alphabet, Letter};

/// Tokenizes one word into its ordered cell sequence.
///
/// At every position the longest registered symbol wins, searching from
/// the alphabet's maximum symbol length down to one character; this is
/// what makes contractions like "sch" beat "s"+"c"+"h". Matching is
/// case-insensitive. A number-flagged letter is preceded by the
/// alphabet's number indicator cell.
///
/// An unrecognized character is reported through the log channel and
/// skipped so a stray glyph degrades output instead of aborting it.
///
/// # Examples
///
/// ```rust
/// use braille_alphabet::Alphabet;
/// use braille_layout::word_to_letters;
///
/// let alphabet = Alphabet::german();
/// let letters = word_to_letters(&alphabet, "schaum");
/// // sch + au + m
/// assert_eq!(letters.len(), 3);
/// ```
pub fn word_to_letters(alphabet: &Alphabet, word: &str) -> Vec<Letter> {
    let chars: Vec<char> = word.chars().collect();
    let mut letters = Vec::new();
    let mut position = 0;

    while position < chars.len() {
        let longest = alphabet.max_symbol_length().min(chars.len() - position);
        let mut matched_length = 0;

        for length in (1..=longest).rev() {
            let candidate: String = chars[position..position + length].iter().collect();
            if let Some(letter) = alphabet.lookup(&candidate) {
                if letter.is_number() {
                    letters.push(alphabet.number_indicator().clone());
                }
                letters.push(letter.clone());
                matched_length = length;
                break;
            }
        }

        if matched_length == 0 {
            log::warn!("unrecognized symbol in word '{word}' at position {position}");
            position += 1;
        } else {
            position += matched_length;
        }
    }

    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_alphabet() -> Alphabet {
        let mut alphabet = Alphabet::new("3456");
        alphabet.add_symbol("s", "324").unwrap();
        alphabet.add_symbol("c", "14").unwrap();
        alphabet.add_symbol("h", "125").unwrap();
        alphabet.add_symbol("sch", "615").unwrap();
        alphabet.add_symbol("a", "1").unwrap();
        alphabet.add_symbol("1", "1").unwrap();
        alphabet.add_symbol("2", "12").unwrap();
        alphabet
    }

    #[test]
    fn test_longest_match_wins() {
        let alphabet = test_alphabet();
        let letters = word_to_letters(&alphabet, "sch");
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].symbol(), "sch");
    }

    #[test]
    fn test_falls_back_to_shorter_matches() {
        let alphabet = test_alphabet();
        let letters = word_to_letters(&alphabet, "sca");
        let symbols: Vec<&str> = letters.iter().map(|l| l.symbol()).collect();
        assert_eq!(symbols, vec!["s", "c", "a"]);
    }

    #[test]
    fn test_case_insensitive() {
        let alphabet = test_alphabet();
        let upper = word_to_letters(&alphabet, "SCHA");
        let lower = word_to_letters(&alphabet, "scha");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_number_indicator_per_digit() {
        let alphabet = test_alphabet();
        let letters = word_to_letters(&alphabet, "12");
        // indicator, 1, indicator, 2 - once per digit letter
        assert_eq!(letters.len(), 4);
        assert_eq!(letters[0].mask(), alphabet.number_indicator().mask());
        assert_eq!(letters[1].symbol(), "1");
        assert_eq!(letters[2].mask(), alphabet.number_indicator().mask());
        assert_eq!(letters[3].symbol(), "2");
    }

    #[test]
    fn test_no_consecutive_number_indicators() {
        let alphabet = test_alphabet();
        let letters = word_to_letters(&alphabet, "121212");
        let indicator_mask = alphabet.number_indicator().mask();
        for pair in letters.windows(2) {
            assert!(
                !(pair[0].mask() == indicator_mask && pair[1].mask() == indicator_mask),
                "two consecutive number indicators"
            );
        }
    }

    #[test]
    fn test_letter_digit_mix_keeps_letters_unprefixed() {
        let alphabet = test_alphabet();
        let letters = word_to_letters(&alphabet, "a1a");
        let symbols: Vec<&str> = letters.iter().map(|l| l.symbol()).collect();
        assert_eq!(symbols, vec!["a", "", "1", "a"]);
    }

    #[test]
    fn test_unrecognized_character_skipped() {
        let alphabet = test_alphabet();
        // '%' is not registered; tokenization must advance past it
        let letters = word_to_letters(&alphabet, "a%a");
        let symbols: Vec<&str> = letters.iter().map(|l| l.symbol()).collect();
        assert_eq!(symbols, vec!["a", "a"]);
    }

    #[test]
    fn test_empty_word() {
        let alphabet = test_alphabet();
        assert!(word_to_letters(&alphabet, "").is_empty());
    }
}

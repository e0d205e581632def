//! Guess validation per difficulty level

use super::keyboard::LetterStatuses;
use crate::core::{WORD_LEN, Word};
use crate::wordlists::Corpus;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Any five letters
    Easy,
    /// Any valid word
    #[default]
    Normal,
    /// Any valid word that uses every hint so far
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn instructions(self) -> &'static str {
        match self {
            Self::Easy => "Guess any 5 letters",
            Self::Normal => "Guess any valid word",
            Self::Hard => "Guess any valid word using all the hints you've been given",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    Incomplete,
    NotAWord(String),
    MissingHints,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "please enter a 5 letter word"),
            Self::NotAWord(word) => {
                write!(f, "{} is not a valid word. Please try again.", word.to_uppercase())
            }
            Self::MissingHints => {
                write!(f, "In hard mode, you must use all the hints you've been given.")
            }
        }
    }
}

impl std::error::Error for GuessRejection {}

/// Hints a hard-mode guess must honor
#[derive(Debug, Clone, Copy, Default)]
pub struct Hints<'h> {
    pub letters: Option<&'h LetterStatuses>,
    pub greens: [Option<u8>; WORD_LEN],
}

/// Check a typed guess against the rules of `difficulty`
///
/// # Errors
/// Returns the `GuessRejection` to show the player.
///
/// # Examples
/// ```
/// use wordle_finder::game::{Difficulty, GuessRejection, Hints, validate_guess};
/// use wordle_finder::wordlists::Corpus;
///
/// let corpus = Corpus::embedded().unwrap();
/// assert!(validate_guess("crane", Difficulty::Normal, &corpus, &Hints::default()).is_ok());
/// assert_eq!(
///     validate_guess("cra", Difficulty::Easy, &corpus, &Hints::default()),
///     Err(GuessRejection::Incomplete)
/// );
/// ```
pub fn validate_guess(
    guess: &str,
    difficulty: Difficulty,
    corpus: &Corpus,
    hints: &Hints<'_>,
) -> Result<(), GuessRejection> {
    let Ok(word) = Word::new(guess) else {
        return Err(GuessRejection::Incomplete);
    };

    if difficulty == Difficulty::Easy {
        return Ok(());
    }
    if !corpus.is_valid_guess(word.text()) {
        return Err(GuessRejection::NotAWord(word.text().to_string()));
    }
    if difficulty == Difficulty::Normal {
        return Ok(());
    }

    let uses_letters = hints
        .letters
        .is_none_or(|statuses| statuses.hinted().is_subset(word.letters()));
    let uses_greens = hints
        .greens
        .iter()
        .enumerate()
        .all(|(position, green)| green.is_none_or(|letter| word.char_at(position) == letter));

    if uses_letters && uses_greens {
        Ok(())
    } else {
        Err(GuessRejection::MissingHints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::embedded().unwrap()
    }

    #[test]
    fn short_guess_is_rejected_at_every_level() {
        let corpus = corpus();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let result = validate_guess("tra", difficulty, &corpus, &Hints::default());
            assert_eq!(result, Err(GuessRejection::Incomplete));
        }
        assert_eq!(
            GuessRejection::Incomplete.to_string(),
            "please enter a 5 letter word"
        );
    }

    #[test]
    fn easy_accepts_any_letters() {
        let result = validate_guess("zzzzz", Difficulty::Easy, &corpus(), &Hints::default());
        assert!(result.is_ok());
    }

    #[test]
    fn normal_requires_a_known_word() {
        let corpus = corpus();
        let result = validate_guess("zzzzz", Difficulty::Normal, &corpus, &Hints::default());
        assert_eq!(result, Err(GuessRejection::NotAWord("zzzzz".to_string())));
        assert_eq!(
            result.unwrap_err().to_string(),
            "ZZZZZ is not a valid word. Please try again."
        );
        assert!(validate_guess("Train", Difficulty::Normal, &corpus, &Hints::default()).is_ok());
    }

    #[test]
    fn hard_requires_hinted_letters_and_greens() {
        let corpus = corpus();
        let answer = Word::new("train").unwrap();
        let mut letters = LetterStatuses::default();
        letters.record(&Word::new("crane").unwrap(), &answer);

        let hints = Hints {
            letters: Some(&letters),
            greens: [None, Some(b'r'), Some(b'a'), None, None],
        };

        assert!(validate_guess("grain", Difficulty::Hard, &corpus, &hints).is_ok());
        // Misses the green a
        assert_eq!(
            validate_guess("robin", Difficulty::Hard, &corpus, &hints),
            Err(GuessRejection::MissingHints)
        );
        // Has r, a, n but not in the green positions
        assert_eq!(
            validate_guess("rainy", Difficulty::Hard, &corpus, &hints),
            Err(GuessRejection::MissingHints)
        );
    }

    #[test]
    fn difficulty_names_round_trip() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_name(difficulty.name()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("brutal"), None);
    }
}

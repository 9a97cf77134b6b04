//! Synthetic word corpus scored by normalised edit distance.
//!
//! Words are mutated copies of a few random templates, so the corpus has a
//! known number of loose families for the engine to recover.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use strsim::normalized_levenshtein;
use thiserror::Error;

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Errors raised when a corpus configuration cannot be satisfied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// The corpus must contain at least one word.
    #[error("corpus must contain at least one word")]
    ZeroItems,
    /// At least one template word is needed to derive the corpus from.
    #[error("corpus needs at least one template word")]
    ZeroTemplates,
    /// Words must be at least one character long.
    #[error("minimum word length must be positive")]
    ZeroLength,
    /// The length bounds are inverted.
    #[error("minimum word length {min_length} exceeds maximum {max_length}")]
    InvalidLengthRange {
        /// Requested minimum length.
        min_length: usize,
        /// Requested maximum length.
        max_length: usize,
    },
}

/// Configuration for [`WordCorpus::generate`].
#[derive(Clone, Debug)]
pub struct WordCorpusConfig {
    /// Number of words to generate.
    pub item_count: usize,
    /// Number of template words the corpus is derived from.
    pub template_count: usize,
    /// Minimum word length.
    pub min_length: usize,
    /// Maximum word length.
    pub max_length: usize,
    /// Maximum edits applied to a template per generated word.
    pub max_edits_per_item: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// Generated words in generation order.
#[derive(Clone, Debug)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Generates a corpus from `config`.
    ///
    /// # Errors
    /// Returns [`CorpusError`] when the configuration is invalid.
    pub fn generate(config: &WordCorpusConfig) -> Result<Self, CorpusError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let templates: Vec<Vec<char>> = (0..config.template_count)
            .map(|_| random_word(config, &mut rng))
            .collect();

        let mut words = Vec::with_capacity(config.item_count);
        for _ in 0..config.item_count {
            let pick = rng.gen_range(0..templates.len());
            let mut chars = templates.get(pick).cloned().unwrap_or_default();
            for _ in 0..rng.gen_range(0..=config.max_edits_per_item) {
                edit(&mut chars, &mut rng);
            }
            while chars.len() < config.min_length {
                insert(&mut chars, &mut rng);
            }
            chars.truncate(config.max_length);
            words.push(chars.into_iter().collect());
        }
        Ok(Self { words })
    }

    /// Returns the generated words.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consumes the corpus, yielding its words.
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Similarity of two words in `[0, 1]`: one minus their edit distance
/// divided by the longer length.
#[expect(
    clippy::ptr_arg,
    reason = "the engine scores items by reference to their owned type"
)]
#[must_use]
pub fn edit_similarity(left: &String, right: &String) -> f64 {
    normalized_levenshtein(left, right)
}

const fn validate(config: &WordCorpusConfig) -> Result<(), CorpusError> {
    if config.item_count == 0 {
        return Err(CorpusError::ZeroItems);
    }
    if config.template_count == 0 {
        return Err(CorpusError::ZeroTemplates);
    }
    if config.min_length == 0 {
        return Err(CorpusError::ZeroLength);
    }
    if config.min_length > config.max_length {
        return Err(CorpusError::InvalidLengthRange {
            min_length: config.min_length,
            max_length: config.max_length,
        });
    }
    Ok(())
}

fn random_word(config: &WordCorpusConfig, rng: &mut SmallRng) -> Vec<char> {
    let length = rng.gen_range(config.min_length..=config.max_length);
    (0..length).map(|_| random_char(rng)).collect()
}

fn random_char(rng: &mut SmallRng) -> char {
    ALPHABET
        .get(rng.gen_range(0..ALPHABET.len()))
        .copied()
        .unwrap_or('a')
}

fn edit(chars: &mut Vec<char>, rng: &mut SmallRng) {
    match rng.gen_range(0..3) {
        0 => insert(chars, rng),
        1 if !chars.is_empty() => {
            let index = rng.gen_range(0..chars.len());
            chars.remove(index);
        }
        _ => {
            if chars.is_empty() {
                insert(chars, rng);
                return;
            }
            let index = rng.gen_range(0..chars.len());
            let replacement = random_char(rng);
            if let Some(slot) = chars.get_mut(index) {
                *slot = replacement;
            }
        }
    }
}

fn insert(chars: &mut Vec<char>, rng: &mut SmallRng) {
    let index = rng.gen_range(0..=chars.len());
    let character = random_char(rng);
    chars.insert(index, character);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> WordCorpusConfig {
        WordCorpusConfig {
            item_count: 40,
            template_count: 4,
            min_length: 5,
            max_length: 9,
            max_edits_per_item: 2,
            seed: 7,
        }
    }

    #[test]
    fn generation_is_reproducible() {
        let first = WordCorpus::generate(&config()).expect("config is valid");
        let second = WordCorpus::generate(&config()).expect("config is valid");

        assert_eq!(first.words(), second.words());
        assert_eq!(first.words().len(), 40);
    }

    #[test]
    fn words_respect_length_bounds() {
        let corpus = WordCorpus::generate(&config()).expect("config is valid");

        assert!(
            corpus
                .into_words()
                .iter()
                .all(|word| (5..=9).contains(&word.chars().count()))
        );
    }

    #[rstest]
    #[case(WordCorpusConfig { item_count: 0, ..config() }, CorpusError::ZeroItems)]
    #[case(WordCorpusConfig { template_count: 0, ..config() }, CorpusError::ZeroTemplates)]
    #[case(WordCorpusConfig { min_length: 0, ..config() }, CorpusError::ZeroLength)]
    #[case(
        WordCorpusConfig { min_length: 10, ..config() },
        CorpusError::InvalidLengthRange { min_length: 10, max_length: 9 },
    )]
    fn rejects_invalid_configuration(
        #[case] invalid: WordCorpusConfig,
        #[case] expected: CorpusError,
    ) {
        assert_eq!(
            WordCorpus::generate(&invalid).expect_err("config is invalid"),
            expected
        );
    }

    #[rstest]
    #[case("kitten", "kitten", 1.0)]
    #[case("abcd", "wxyz", 0.0)]
    #[case("abcd", "abce", 0.75)]
    fn similarity_tracks_edit_distance(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: f64,
    ) {
        let score = edit_similarity(&left.to_owned(), &right.to_owned());

        assert_eq!(score, expected);
    }
}

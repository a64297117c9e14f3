use std::collections::BTreeSet;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::generators::entropy::{self, EntropySource};
use crate::models::{CharacterCategory, PasswordGenerationOptions};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Selecciona al menos un tipo de carácter")]
    NoCategorySelected,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Validated inputs for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    categories: BTreeSet<CharacterCategory>,
    length: usize,
}

impl GenerationRequest {
    /// A missing length means the default; anything else is clamped into range.
    pub fn new<I>(categories: I, length: Option<usize>) -> Self
    where
        I: IntoIterator<Item = CharacterCategory>,
    {
        Self {
            categories: categories.into_iter().collect(),
            length: clamp_length(length),
        }
    }

    /// Builds a request from a raw length field, as typed in a form.
    pub fn from_raw_length<I>(categories: I, raw_length: &str) -> Self
    where
        I: IntoIterator<Item = CharacterCategory>,
    {
        Self::new(categories, parse_length(raw_length))
    }

    pub fn categories(&self) -> &BTreeSet<CharacterCategory> {
        &self.categories
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl From<&PasswordGenerationOptions> for GenerationRequest {
    fn from(options: &PasswordGenerationOptions) -> Self {
        Self::new(options.categories(), Some(options.length))
    }
}

pub fn clamp_length(length: Option<usize>) -> usize {
    length.unwrap_or(DEFAULT_LENGTH).clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Reads a typed length. Any integer, negative or huge, lands in range;
/// `None` means the text was blank or not a number.
pub fn parse_length(raw: &str) -> Option<usize> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(clamp_signed(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(MAX_LENGTH),
            IntErrorKind::NegOverflow => Some(MIN_LENGTH),
            _ => None,
        },
    }
}

pub fn clamp_signed(length: i64) -> usize {
    length.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// A freshly generated password. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub struct PasswordGenerator {
    entropy: Box<dyn EntropySource + Send>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_entropy(entropy::detect())
    }

    pub fn with_entropy(entropy: Box<dyn EntropySource + Send>) -> Self {
        PasswordGenerator { entropy }
    }

    pub fn is_secure(&self) -> bool {
        self.entropy.is_secure()
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<Password> {
        self.generate(&GenerationRequest::from(options))
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Password> {
        if request.categories().is_empty() {
            log::warn!("Password generation requested with no character category");
            return Err(GeneratorError::NoCategorySelected);
        }

        let mut buffer: Vec<u8> = Vec::with_capacity(request.length());

        // One character per category first, so every class is represented.
        for category in request.categories() {
            buffer.push(pick(self.entropy.as_mut(), category.alphabet()));
        }

        let pool: Vec<u8> = request
            .categories()
            .iter()
            .flat_map(|category| category.alphabet().iter().copied())
            .collect();

        while buffer.len() < request.length() {
            buffer.push(pick(self.entropy.as_mut(), &pool));
        }

        shuffle(&mut buffer, self.entropy.as_mut());

        log::debug!(
            "Generated {}-character password from {} categories",
            buffer.len(),
            request.categories().len()
        );

        Ok(Password(buffer.into_iter().map(char::from).collect()))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(entropy: &mut dyn EntropySource, alphabet: &[u8]) -> u8 {
    alphabet[entropy.next_bounded(alphabet.len() as u32) as usize]
}

/// Fisher–Yates, walking down from the last slot.
pub fn shuffle<T>(items: &mut [T], entropy: &mut dyn EntropySource) {
    for i in (1..items.len()).rev() {
        let j = entropy.next_bounded(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::entropy::SecureEntropy;
    use rstest::rstest;
    use std::collections::HashMap;

    fn generator() -> PasswordGenerator {
        PasswordGenerator::with_entropy(Box::new(SecureEntropy::new()))
    }

    /// Always returns the same index, which makes the output predictable.
    struct FirstIndex;

    impl EntropySource for FirstIndex {
        fn next_bounded(&mut self, _bound: u32) -> u32 {
            0
        }

        fn is_secure(&self) -> bool {
            false
        }
    }

    #[rstest]
    #[case(None, 16)]
    #[case(Some(0), 8)]
    #[case(Some(7), 8)]
    #[case(Some(8), 8)]
    #[case(Some(20), 20)]
    #[case(Some(32), 32)]
    #[case(Some(33), 32)]
    #[case(Some(500), 32)]
    fn length_is_clamped(#[case] requested: Option<usize>, #[case] expected: usize) {
        let request = GenerationRequest::new(CharacterCategory::ALL, requested);
        assert_eq!(request.length(), expected);
        assert_eq!(generator().generate(&request).unwrap().len(), expected);
    }

    #[rstest]
    #[case("12", 12)]
    #[case("  24 ", 24)]
    #[case("", 16)]
    #[case("doce", 16)]
    #[case("+9", 9)]
    #[case("-3", 8)]
    #[case("0", 8)]
    #[case("40", 32)]
    #[case("99999999999999999999", 32)]
    #[case("-99999999999999999999", 8)]
    #[case("12.5", 16)]
    fn raw_lengths_default_before_clamping(#[case] raw: &str, #[case] expected: usize) {
        let request = GenerationRequest::from_raw_length(CharacterCategory::ALL, raw);
        assert_eq!(request.length(), expected);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let request = GenerationRequest::new(Vec::new(), Some(16));
        assert_eq!(generator().generate(&request), Err(GeneratorError::NoCategorySelected));
    }

    #[test]
    fn every_subset_is_covered_without_foreign_characters() {
        let mut generator = generator();

        // All 15 non-empty subsets of the four categories.
        for mask in 1u8..16 {
            let selected: Vec<CharacterCategory> = CharacterCategory::ALL
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, category)| category)
                .collect();

            for length in [MIN_LENGTH, 12, MAX_LENGTH] {
                let request = GenerationRequest::new(selected.clone(), Some(length));
                for _ in 0..25 {
                    let password = generator.generate(&request).unwrap();
                    assert_eq!(password.len(), length);

                    for category in &selected {
                        assert!(
                            password.as_str().chars().any(|c| category.contains(c)),
                            "{password} is missing {category:?}"
                        );
                    }
                    assert!(password
                        .as_str()
                        .chars()
                        .all(|c| selected.iter().any(|category| category.contains(c))));
                }
            }
        }
    }

    #[test]
    fn digits_only_at_minimum_length() {
        let request = GenerationRequest::new([CharacterCategory::Digits], Some(8));
        let password = generator().generate(&request).unwrap();

        assert_eq!(password.len(), 8);
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn fixed_entropy_keeps_coverage_and_first_pool_character() {
        // With index 0 everywhere the buffer is "Aa0!" + "A"*4, and the
        // shuffle swaps each slot with slot 0.
        let mut generator = PasswordGenerator::with_entropy(Box::new(FirstIndex));
        let request = GenerationRequest::new(CharacterCategory::ALL, Some(8));
        let password = generator.generate(&request).unwrap();

        let mut sorted: Vec<char> = password.as_str().chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), "!0AAAAAa");
    }

    #[test]
    fn options_map_onto_requests() {
        let options = PasswordGenerationOptions {
            length: 64,
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        };
        let request = GenerationRequest::from(&options);

        assert_eq!(request.length(), MAX_LENGTH);
        assert_eq!(
            request.categories().iter().copied().collect::<Vec<_>>(),
            vec![CharacterCategory::Lowercase, CharacterCategory::Digits]
        );
    }

    #[test]
    fn shuffle_produces_every_permutation_evenly() {
        // 3! = 6 permutations, 5 degrees of freedom: p = 0.001 critical value is 20.52.
        const TRIALS: usize = 60_000;
        let mut source = SecureEntropy::new();
        let mut counts: HashMap<[char; 3], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = ['a', 'b', 'c'];
            shuffle(&mut items, &mut source);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS as f64 / 6.0;
        let stat: f64 = counts
            .values()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(stat < 20.52, "chi-square {stat} over {counts:?}");
    }

    #[test]
    fn coverage_characters_are_not_pinned_to_the_front() {
        // Unshuffled, slot 0 always holds the guaranteed uppercase letter.
        const TRIALS: usize = 16_000;
        let mut generator = generator();
        let request = GenerationRequest::new(
            [CharacterCategory::Uppercase, CharacterCategory::Digits],
            Some(8),
        );
        let mut leading_uppercase = 0usize;

        for _ in 0..TRIALS {
            let password = generator.generate(&request).unwrap();
            if password.as_str().starts_with(|c: char| c.is_ascii_uppercase()) {
                leading_uppercase += 1;
            }
        }

        // Shuffled: 1/8 for the guaranteed letter plus 6/8 * 26/36 for pool
        // draws, about 0.667.
        let ratio = leading_uppercase as f64 / TRIALS as f64;
        assert!((0.62..0.72).contains(&ratio), "uppercase led {ratio} of the time");
    }

    #[test]
    fn each_call_is_independent() {
        let mut generator = generator();
        let request = GenerationRequest::new(CharacterCategory::ALL, Some(32));
        let first = generator.generate(&request).unwrap();
        let second = generator.generate(&request).unwrap();
        assert_ne!(first, second);
    }
}

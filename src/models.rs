// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Character classes a generated password can draw from.
///
/// The declaration order is the canonical iteration order: it drives both the
/// order of the coverage characters and the layout of the combined pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterCategory {
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Digits,
        CharacterCategory::Symbols,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterCategory::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterCategory::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterCategory::Digits => b"0123456789",
            CharacterCategory::Symbols => b"!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => "Mayúsculas (A-Z)",
            CharacterCategory::Lowercase => "Minúsculas (a-z)",
            CharacterCategory::Digits => "Números (0-9)",
            CharacterCategory::Symbols => "Símbolos (!@#$...)",
        }
    }
}

impl std::fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Password generation options, as toggled by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    /// Selected categories in canonical order.
    pub fn categories(&self) -> Vec<CharacterCategory> {
        let flags = [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        ];

        CharacterCategory::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(category, enabled)| enabled.then_some(category))
            .collect()
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabets_are_disjoint_and_non_empty() {
        let mut seen = HashSet::new();
        for category in CharacterCategory::ALL {
            assert!(!category.alphabet().is_empty());
            for byte in category.alphabet() {
                assert!(seen.insert(*byte), "{} appears in two alphabets", *byte as char);
            }
        }
    }

    #[test]
    fn categories_follow_canonical_order() {
        let options = PasswordGenerationOptions {
            length: 12,
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: true,
        };

        assert_eq!(
            options.categories(),
            vec![CharacterCategory::Lowercase, CharacterCategory::Symbols]
        );
    }

    #[test]
    fn contains_rejects_non_ascii() {
        assert!(CharacterCategory::Lowercase.contains('a'));
        assert!(!CharacterCategory::Lowercase.contains('ñ'));
        assert!(CharacterCategory::Symbols.contains('?'));
        assert!(!CharacterCategory::Symbols.contains('~'));
    }
}

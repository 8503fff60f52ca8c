// Valence - rule-based sentiment scoring for short texts.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Maximum number of exclamation marks counted in a single token.
pub const MAX_EXCLAMATIONS: u8 = 3;

/// A word from a sentence, along with the signals extracted from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token exactly as it appeared in the sentence.
    pub raw: String,

    /// `raw` with every letter lowercased and every `!` removed.  This is the
    /// text used for word list and lexicon lookups.
    ///
    /// This is empty for a token that consists only of `!`.
    pub normalized: String,

    /// True if `raw` contains no lowercase letters.
    ///
    /// A token without any letters at all, such as `:)`, counts as all-caps.
    pub all_caps: bool,

    /// The number of `!` in `raw`, capped at [MAX_EXCLAMATIONS].
    pub exclamations: u8,
}

impl Token {
    /// Extracts a token from `raw`, which should not contain any delimiters.
    pub fn new(raw: &str) -> Self {
        let mut normalized = String::with_capacity(raw.len());
        let mut exclamations = 0;
        let mut all_caps = true;
        for c in raw.chars() {
            if c == '!' {
                exclamations = (exclamations + 1).min(MAX_EXCLAMATIONS);
            } else {
                if c.is_lowercase() {
                    all_caps = false;
                }
                normalized.extend(c.to_lowercase());
            }
        }
        Self {
            raw: String::from(raw),
            normalized,
            all_caps,
            exclamations,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod test {
    use super::Token;

    #[test]
    fn test_normalization() {
        let token = Token::new("HeLLo!");
        assert_eq!(token.normalized, "hello");
        assert!(!token.all_caps);
        assert_eq!(token.exclamations, 1);
    }

    #[test]
    fn test_exclamations_inside_word() {
        let token = Token::new("wow!great!!");
        assert_eq!(token.normalized, "wowgreat");
        assert_eq!(token.exclamations, 3);
    }

    #[test]
    fn test_caps_without_letters() {
        assert!(Token::new(":)").all_caps);
        assert!(Token::new("123").all_caps);
        assert!(!Token::new(":d").all_caps);
        assert!(Token::new(":D").all_caps);
    }
}

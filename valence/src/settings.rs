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

use std::{
    fs::read_to_string,
    io::Error as IoError,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Words that amplify the valence of the next scored word.
pub const INTENSIFIERS: [&str; 11] = [
    "absolutely",
    "completely",
    "extremely",
    "really",
    "so",
    "totally",
    "very",
    "particularly",
    "exceptionally",
    "incredibly",
    "remarkably",
];

/// Words that invert and dampen the valence of the words that follow.
pub const NEGATIONS: [&str; 13] = [
    "not",
    "isn't",
    "doesn't",
    "wasn't",
    "shouldn't",
    "won't",
    "cannot",
    "can't",
    "nor",
    "neither",
    "without",
    "lack",
    "missing",
];

/// Words that end the scope of a negation.
pub const CONJUNCTIONS: [&str; 2] = ["and", "or"];

/// How long a negation keeps affecting the words after it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegationScope {
    /// Until the next conjunction or the end of the sentence.
    #[default]
    UntilConjunction,

    /// Only the next word found in the lexicon.
    NextWord,
}

/// Multipliers applied while adjusting a word's valence.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Constants {
    /// Multiplier for a word written in all capitals.
    pub caps: f64,

    /// Fraction of a word's valence added when an intensifier precedes it.
    pub intensifier: f64,

    /// Multiplier for a negated word.
    pub negation: f64,

    /// Fraction of a word's valence added, away from zero, per exclamation
    /// mark.
    pub exclamation: f64,

    /// Smoothing term in the compound score normalization.
    pub alpha: f64,
}

impl Constants {
    /// Checks that every constant is finite and that `alpha` is positive.
    pub fn validate(&self) -> Result<(), ErrorDetails> {
        let Self {
            caps,
            intensifier,
            negation,
            exclamation,
            alpha,
        } = *self;
        for (name, value) in [
            ("caps", caps),
            ("intensifier", intensifier),
            ("negation", negation),
            ("exclamation", exclamation),
            ("alpha", alpha),
        ] {
            if !value.is_finite() || (name == "alpha" && value <= 0.0) {
                return Err(ErrorDetails::InvalidConstant { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            caps: 1.5,
            intensifier: 0.293,
            negation: -0.5,
            exclamation: 0.292,
            alpha: 15.0,
        }
    }
}

/// Scoring configuration.
///
/// The word lists are matched against normalized (lowercase) token text, so
/// they should be written in lowercase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub intensifiers: Vec<String>,
    pub negations: Vec<String>,
    pub conjunctions: Vec<String>,
    pub negation_scope: NegationScope,
    pub constants: Constants,
}

impl Default for Settings {
    fn default() -> Self {
        fn to_strings(words: &[&str]) -> Vec<String> {
            words.iter().copied().map(String::from).collect()
        }
        Self {
            intensifiers: to_strings(&INTENSIFIERS),
            negations: to_strings(&NEGATIONS),
            conjunctions: to_strings(&CONJUNCTIONS),
            negation_scope: NegationScope::default(),
            constants: Constants::default(),
        }
    }
}

impl Settings {
    /// Returns the default settings, shared by the whole process.
    pub fn global() -> &'static Settings {
        static GLOBAL: OnceLock<Settings> = OnceLock::new();
        GLOBAL.get_or_init(Settings::default)
    }

    /// Parses settings from TOML.  Anything not specified takes its default
    /// value.  The constants are checked with [Constants::validate].
    pub fn from_toml(s: &str) -> Result<Self, ErrorDetails> {
        let settings: Self = toml::from_str(s).map_err(ErrorDetails::Toml)?;
        settings.constants.validate()?;
        Ok(settings)
    }

    /// Reads settings from the TOML file at `path`.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let error = |details| Error {
            file_name: path.to_path_buf(),
            details,
        };
        let s = read_to_string(path).map_err(|e| error(ErrorDetails::Io(e)))?;
        Self::from_toml(&s).map_err(error)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.iter().any(|w| w == word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|w| w == word)
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        self.conjunctions.iter().any(|w| w == word)
    }
}

/// An error reading a settings file.
#[derive(ThisError, Debug)]
#[error("{}: {details}", .file_name.display())]
pub struct Error {
    pub file_name: PathBuf,
    pub details: ErrorDetails,
}

#[derive(Display, ThisError, Debug)]
pub enum ErrorDetails {
    /// Read failed ({0}).
    Io(IoError),

    /// Invalid settings: {0}
    Toml(toml::de::Error),

    /// Constant {name} may not be {value} (constants must be finite, and alpha must be positive).
    InvalidConstant { name: &'static str, value: f64 },
}

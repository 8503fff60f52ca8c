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

use crate::settings::Settings;

/// The role a token plays in scoring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    /// An ordinary word, to be looked up in the lexicon and scored.
    PlainCandidate,

    /// Amplifies the next scored word.
    PositiveIntensifier,

    /// Inverts and dampens the words that follow.
    Negation,
}

impl Modifier {
    /// Classifies `word`, which should already be normalized, against the word
    /// lists in `settings`.  A word in both lists is an intensifier.
    pub fn classify(word: &str, settings: &Settings) -> Self {
        if settings.is_intensifier(word) {
            Self::PositiveIntensifier
        } else if settings.is_negation(word) {
            Self::Negation
        } else {
            Self::PlainCandidate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::PlainCandidate => "plain",
            Modifier::PositiveIntensifier => "intensifier",
            Modifier::Negation => "negation",
        }
    }

    /// Returns true for tokens that are looked up in the lexicon.
    pub fn is_scored(&self) -> bool {
        *self == Self::PlainCandidate
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

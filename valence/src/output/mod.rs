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

//! Output of scoring results.
//!
//! Results are wrapped in [Item]s and handed to a [Driver], which renders them
//! in a particular [Format].

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    aggregate::ScoreResult,
    lex::Token,
    lexicon::{Lexicon, LexiconEntry},
    modifier::Modifier,
    score::Analysis,
    settings::Settings,
};

pub mod csv;
pub mod driver;
pub mod json;
pub mod text;

pub use driver::Driver;

/// An output item.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A scored sentence.
    Score {
        sentence: String,
        result: ScoreResult,
    },

    /// A scored sentence with the contribution of each token.
    Analysis(Analysis),

    /// A word looked up in the lexicon.
    Lookup(Lookup),
}

impl Item {
    /// Returns the scored sentence and its result, if this is a scoring item.
    pub fn score(&self) -> Option<(&str, &ScoreResult)> {
        match self {
            Item::Score { sentence, result } => Some((sentence, result)),
            Item::Analysis(analysis) => Some((&analysis.sentence, &analysis.result)),
            Item::Lookup(_) => None,
        }
    }
}

impl From<Analysis> for Item {
    fn from(value: Analysis) -> Self {
        Self::Analysis(value)
    }
}

impl From<Lookup> for Item {
    fn from(value: Lookup) -> Self {
        Self::Lookup(value)
    }
}

/// The result of looking up one word.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lookup {
    /// The word as given.
    pub word: String,

    /// The word as normalized by the tokenizer, which is what gets looked up.
    pub normalized: String,

    pub modifier: Modifier,

    /// The lexicon entry, if any.  Intensifiers and negations are never looked
    /// up.
    pub entry: Option<LexiconEntry>,
}

impl Lookup {
    pub fn new(word: &str, lexicon: &Lexicon, settings: &Settings) -> Self {
        let token = Token::new(word);
        let modifier = Modifier::classify(&token.normalized, settings);
        let entry = match modifier {
            Modifier::PlainCandidate => lexicon.lookup(&token.normalized).cloned(),
            _ => None,
        };
        Self {
            word: token.raw,
            normalized: token.normalized,
            modifier,
            entry,
        }
    }
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Newline-delimited JSON.
    Ndjson,
    /// Comma-separated values.
    Csv,
}

impl Format {
    /// Returns true if the format can show the contribution of each token.
    pub fn supports_analysis(&self) -> bool {
        !matches!(self, Format::Csv)
    }
}

impl dyn Driver {
    /// Creates a driver that writes `format` to `writer`.
    pub fn new(format: Format, writer: Box<dyn Write>) -> Box<dyn Driver> {
        match format {
            Format::Text => Box::new(text::TextDriver::new(writer)),
            Format::Json => Box::new(json::JsonDriver::new(writer, true)),
            Format::Ndjson => Box::new(json::JsonDriver::new(writer, false)),
            Format::Csv => Box::new(csv::CsvDriver::new(writer)),
        }
    }
}

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

//! Sentence scoring.
//!
//! [score] is the simplest entry point.  A [Scorer] does the same with
//! configurable [Settings], and can also return an [Analysis] that records
//! how each token contributed.
//!
//! Scoring is a pure function of the sentence, the lexicon, and the settings,
//! so batches of sentences are scored in parallel with [rayon].

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    adjust::Adjuster,
    aggregate::{Aggregator, ScoreResult},
    lex::{Token, tokenize},
    lexicon::Lexicon,
    modifier::Modifier,
    settings::Settings,
};

/// Sentences used by the `demo` command.
pub const DEMO_SENTENCES: [&str; 11] = [
    "VADER is smart, handsome, and funny.",
    "VADER is smart, handsome, and funny!",
    "VADER is very smart, handsome, and funny.",
    "VADER is VERY SMART, handsome, and FUNNY.",
    "VADER is VERY SMART, handsome, and FUNNY!!!",
    "VADER is VERY SMART, uber handsome, and FRIGGIN FUNNY!!!",
    "VADER is not smart, handsome, nor funny.",
    "At least it isn’t a horrible book.",
    "The plot was good, but the characters are uncompelling and the dialog is not great.",
    "Make sure you :) or :D today!",
    "Not bad at all",
];

/// How one token contributed to a sentence's score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contribution {
    pub token: Token,
    pub modifier: Modifier,

    /// The token's lexicon valence, if it was looked up and found.
    pub base: Option<f64>,

    /// The token's adjusted valence, or `None` for an intensifier or negation.
    pub valence: Option<f64>,
}

/// A sentence's score along with the contribution of each of its tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub sentence: String,
    pub contributions: Vec<Contribution>,

    /// Sum of the contributions' valences.
    pub sum: f64,
    pub result: ScoreResult,
}

impl Analysis {
    /// Iterates over the valences that were aggregated into the result.
    pub fn valences(&self) -> impl Iterator<Item = f64> {
        self.contributions
            .iter()
            .filter_map(|contribution| contribution.valence)
    }
}

/// Scores sentences against a lexicon.
#[derive(Copy, Clone, Debug)]
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
    settings: &'a Settings,
}

impl<'a> Scorer<'a> {
    /// Returns a scorer for `lexicon` with the default settings.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_settings(lexicon, Settings::global())
    }

    pub fn with_settings(lexicon: &'a Lexicon, settings: &'a Settings) -> Self {
        Self { lexicon, settings }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Runs the scoring pass over `sentence`, passing each token's
    /// contribution to `observe`, and returns the aggregated result.
    fn run<F>(&self, sentence: &str, mut observe: F) -> Aggregator
    where
        F: FnMut(Contribution),
    {
        let mut adjuster = Adjuster::new(self.settings);
        let mut aggregator = Aggregator::new(self.settings.constants.alpha);
        for token in tokenize(sentence) {
            let modifier = Modifier::classify(&token.normalized, self.settings);
            let base = match modifier {
                Modifier::PlainCandidate => self
                    .lexicon
                    .lookup(&token.normalized)
                    .map(|entry| entry.valence),
                _ => None,
            };
            let valence = adjuster.push(&token, modifier, base);
            if let Some(valence) = valence {
                aggregator.push(valence);
            }
            observe(Contribution {
                token,
                modifier,
                base,
                valence,
            });
        }
        aggregator
    }

    /// Scores `sentence`.
    pub fn score(&self, sentence: &str) -> ScoreResult {
        self.run(sentence, |_| ()).finish()
    }

    /// Scores `sentence`, recording the contribution of each token.
    pub fn analyze(&self, sentence: &str) -> Analysis {
        let mut contributions = Vec::new();
        let aggregator = self.run(sentence, |contribution| contributions.push(contribution));
        Analysis {
            sentence: String::from(sentence),
            contributions,
            sum: aggregator.sum(),
            result: aggregator.finish(),
        }
    }

    /// Scores each of `sentences` in parallel.  The results are in the same
    /// order as `sentences`.
    pub fn score_batch<S>(&self, sentences: &[S]) -> Vec<ScoreResult>
    where
        S: AsRef<str> + Sync,
    {
        sentences
            .par_iter()
            .map(|sentence| self.score(sentence.as_ref()))
            .collect()
    }

    /// Analyzes each of `sentences` in parallel.  The results are in the same
    /// order as `sentences`.
    pub fn analyze_batch<S>(&self, sentences: &[S]) -> Vec<Analysis>
    where
        S: AsRef<str> + Sync,
    {
        sentences
            .par_iter()
            .map(|sentence| self.analyze(sentence.as_ref()))
            .collect()
    }
}

/// Scores `sentence` against `lexicon` with the default settings.
pub fn score(sentence: &str, lexicon: &Lexicon) -> ScoreResult {
    Scorer::new(lexicon).score(sentence)
}

/// Scores each of `sentences` against `lexicon` with the default settings, in
/// parallel.
pub fn score_batch<S>(sentences: &[S], lexicon: &Lexicon) -> Vec<ScoreResult>
where
    S: AsRef<str> + Sync,
{
    Scorer::new(lexicon).score_batch(sentences)
}

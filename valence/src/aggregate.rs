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

/// Default smoothing term for [compound].
pub const ALPHA: f64 = 15.0;

/// The sentiment of a sentence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Proportion of negative valence.
    pub neg: f64,

    /// Proportion of neutral words.
    pub neu: f64,

    /// Proportion of positive valence.
    pub pos: f64,

    /// Overall polarity, in the open interval (-1, 1).
    pub compound: f64,
}

/// Formats the result as a Python-style dictionary,
/// e.g. `{'neg': 0.000, 'neu': 0.341, 'pos': 0.659, 'compound': 0.8316}`.
impl Display for ScoreResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{'neg': {:.3}, 'neu': {:.3}, 'pos': {:.3}, 'compound': {:.4}}}",
            self.neg, self.neu, self.pos, self.compound
        )
    }
}

/// Normalizes `sum` into the open interval (-1, 1), given a positive `alpha`.
///
/// The result has the sign of `sum`.  Sums too large for `sum² + alpha` to
/// differ from `sum²` yield exactly ±1, as does an overflowed (infinite) sum.
pub fn compound(sum: f64, alpha: f64) -> f64 {
    if sum.is_infinite() {
        return sum.signum();
    }
    sum / sum.hypot(alpha.sqrt())
}

/// Accumulates the valences of the scored words in a sentence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aggregator {
    alpha: f64,
    sum: f64,
    pos_sum: f64,
    neg_sum: f64,
    neu_count: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(ALPHA)
    }
}

impl Aggregator {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            sum: 0.0,
            pos_sum: 0.0,
            neg_sum: 0.0,
            neu_count: 0,
        }
    }

    /// Adds one word's valence.
    pub fn push(&mut self, valence: f64) {
        self.sum += valence;
        if valence > 0.0 {
            self.pos_sum += valence;
        } else if valence < 0.0 {
            self.neg_sum += valence;
        } else {
            self.neu_count += 1;
        }
    }

    /// Sum of all the valences pushed so far.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Computes the final scores.
    ///
    /// Valences read from a lexicon file are bounded, so the sums stay finite
    /// in practice.  If the total overflows anyway, the parts are rescaled
    /// before dividing, and a part that itself overflowed outweighs all the
    /// finite ones.
    pub fn finish(&self) -> ScoreResult {
        let mut neg = self.neg_sum.abs();
        let mut neu = self.neu_count as f64;
        let mut pos = self.pos_sum;
        let mut total = pos + neg + neu;
        if total.is_infinite() {
            let largest = pos.max(neg);
            (neg, neu, pos) = if largest.is_infinite() {
                let part = |x: f64| if x.is_infinite() { 1.0 } else { 0.0 };
                (part(neg), 0.0, part(pos))
            } else {
                (neg / largest, neu / largest, pos / largest)
            };
            total = neg + neu + pos;
        } else if total == 0.0 {
            total = 1.0;
        }
        ScoreResult {
            neg: neg / total,
            neu: neu / total,
            pos: pos / total,
            compound: compound(self.sum, self.alpha),
        }
    }
}

impl Extend<f64> for Aggregator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for valence in iter {
            self.push(valence);
        }
    }
}

/// Aggregates `valences` with the default smoothing term.
pub fn aggregate(valences: &[f64]) -> ScoreResult {
    let mut aggregator = Aggregator::default();
    aggregator.extend(valences.iter().copied());
    aggregator.finish()
}

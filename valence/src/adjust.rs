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

//! Per-token valence adjustment.
//!
//! An [Adjuster] walks the tokens of one sentence in order.  Intensifiers and
//! negations only change its [ModifierState].  Every other token gets a
//! valence: its lexicon valence, or 0 if it is not in the lexicon, adjusted in
//! this order:
//!
//! 1. Multiplied by [Constants::caps] if the token is written in all capitals.
//!
//! 2. Increased by [Constants::intensifier] times itself if an intensifier is
//!    pending.  This consumes the intensifier.
//!
//! 3. Multiplied by [Constants::negation] if a negation is active.
//!
//! 4. Moved away from zero by [Constants::exclamation] times its magnitude for
//!    each of the token's exclamation marks.
//!
//! A negation stays active until a conjunction is scored or the sentence
//! ends, unless the settings choose [NegationScope::NextWord].

use crate::{
    lex::Token,
    modifier::Modifier,
    settings::{Constants, NegationScope, Settings},
};

/// Modifier state carried from one token to the next within a sentence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// An intensifier was seen and has not yet been applied.
    pub pending_intensifier: bool,

    /// A negation is in effect.
    pub negation_active: bool,
}

/// Applies the modifier rules to `base` for a token with the given signals.
pub fn adjust(
    base: f64,
    token: &Token,
    intensified: bool,
    negated: bool,
    constants: &Constants,
) -> f64 {
    let mut valence = base;
    if token.all_caps {
        valence *= constants.caps;
    }
    if intensified {
        valence += valence * constants.intensifier;
    }
    if negated {
        valence *= constants.negation;
    }
    if token.exclamations > 0 {
        let boost = valence.abs() * constants.exclamation * token.exclamations as f64;
        if valence > 0.0 {
            valence += boost;
        } else {
            valence -= boost;
        }
    }
    valence
}

/// Tracks [ModifierState] across the tokens of one sentence.
#[derive(Clone, Debug)]
pub struct Adjuster<'a> {
    settings: &'a Settings,
    state: ModifierState,
}

impl<'a> Adjuster<'a> {
    /// Creates an adjuster for the start of a sentence.
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            state: ModifierState::default(),
        }
    }

    pub fn state(&self) -> ModifierState {
        self.state
    }

    /// Processes `token`, which was classified as `modifier`.  `base` is the
    /// token's lexicon valence, or `None` if it is not in the lexicon.
    ///
    /// Returns the token's contribution to the sentence, or `None` for an
    /// intensifier or negation, which contribute nothing.
    pub fn push(&mut self, token: &Token, modifier: Modifier, base: Option<f64>) -> Option<f64> {
        match modifier {
            Modifier::PositiveIntensifier => {
                self.state.pending_intensifier = true;
                None
            }
            Modifier::Negation => {
                self.state.negation_active = true;
                None
            }
            Modifier::PlainCandidate => {
                let ModifierState {
                    pending_intensifier,
                    negation_active,
                } = self.state;
                let valence = adjust(
                    base.unwrap_or(0.0),
                    token,
                    pending_intensifier,
                    negation_active,
                    &self.settings.constants,
                );
                self.state.pending_intensifier = false;
                match self.settings.negation_scope {
                    NegationScope::UntilConjunction => {
                        if self.settings.is_conjunction(&token.normalized) {
                            self.state.negation_active = false;
                        }
                    }
                    NegationScope::NextWord => {
                        if base.is_some() {
                            self.state.negation_active = false;
                        }
                    }
                }
                Some(valence)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        lex::Token,
        modifier::Modifier,
        settings::{Constants, NegationScope, Settings},
    };

    use super::{Adjuster, ModifierState, adjust};

    #[track_caller]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn check_adjust(raw: &str, base: f64, intensified: bool, negated: bool) -> f64 {
        adjust(
            base,
            &Token::new(raw),
            intensified,
            negated,
            &Constants::default(),
        )
    }

    #[test]
    fn plain() {
        assert_close(check_adjust("good", 1.9, false, false), 1.9);
        assert_close(check_adjust("zzz", 0.0, true, true), 0.0);
    }

    #[test]
    fn caps() {
        assert_close(check_adjust("GOOD", 1.9, false, false), 2.85);
        assert_close(check_adjust(":)", 2.0, false, false), 3.0);
    }

    #[test]
    fn intensifier() {
        assert_close(check_adjust("good", 1.9, true, false), 1.9 * 1.293);
        assert_close(check_adjust("bad", -2.5, true, false), -2.5 * 1.293);
    }

    #[test]
    fn negation() {
        assert_close(check_adjust("good", 1.9, false, true), -0.95);
        assert_close(check_adjust("bad", -2.5, false, true), 1.25);
    }

    #[test]
    fn exclamations() {
        assert_close(check_adjust("GOOD!!!", 1.9, false, false), 5.3466);
        assert_close(check_adjust("good!", 1.9, false, false), 1.9 * 1.292);

        // Negative valences move further from zero, too.
        assert_close(check_adjust("bad!!", -2.5, false, false), -2.5 * 1.584);
        assert_close(check_adjust("good!", 1.9, false, true), -0.95 * 1.292);
    }

    #[test]
    fn all_rules() {
        // Caps, then intensifier, then negation, then exclamations.
        let expected = 1.9 * 1.5 * 1.293 * -0.5 * (1.0 + 0.292 * 2.0);
        assert_close(check_adjust("GOOD!!", 1.9, true, true), expected);
    }

    #[test]
    fn modifiers_contribute_nothing() {
        let settings = Settings::default();
        let mut adjuster = Adjuster::new(&settings);
        assert_eq!(
            adjuster.push(&Token::new("very"), Modifier::PositiveIntensifier, None),
            None
        );
        assert_eq!(
            adjuster.push(&Token::new("not"), Modifier::Negation, None),
            None
        );
        assert_eq!(
            adjuster.state(),
            ModifierState {
                pending_intensifier: true,
                negation_active: true,
            }
        );
    }

    #[test]
    fn intensifier_consumed_by_next_word() {
        let settings = Settings::default();
        let mut adjuster = Adjuster::new(&settings);
        adjuster.push(&Token::new("very"), Modifier::PositiveIntensifier, None);

        // An unknown word still consumes the pending intensifier.
        assert_eq!(
            adjuster.push(&Token::new("the"), Modifier::PlainCandidate, None),
            Some(0.0)
        );
        assert!(!adjuster.state().pending_intensifier);
        assert_eq!(
            adjuster.push(&Token::new("good"), Modifier::PlainCandidate, Some(1.9)),
            Some(1.9)
        );
    }

    #[test]
    fn negation_until_conjunction() {
        let settings = Settings::default();
        let mut adjuster = Adjuster::new(&settings);
        adjuster.push(&Token::new("not"), Modifier::Negation, None);
        assert_eq!(
            adjuster.push(&Token::new("smart"), Modifier::PlainCandidate, Some(1.7)),
            Some(-0.85)
        );
        assert_eq!(
            adjuster.push(&Token::new("handsome"), Modifier::PlainCandidate, Some(2.2)),
            Some(-1.1)
        );
        assert!(adjuster.state().negation_active);

        let and = adjuster
            .push(&Token::new("and"), Modifier::PlainCandidate, None)
            .unwrap();
        assert_eq!(and, 0.0);
        assert!(!adjuster.state().negation_active);
        assert_eq!(
            adjuster.push(&Token::new("funny"), Modifier::PlainCandidate, Some(1.9)),
            Some(1.9)
        );
    }

    #[test]
    fn negation_next_word() {
        let settings = Settings {
            negation_scope: NegationScope::NextWord,
            ..Settings::default()
        };
        let mut adjuster = Adjuster::new(&settings);
        adjuster.push(&Token::new("not"), Modifier::Negation, None);

        // Unknown words do not use up the negation.
        adjuster.push(&Token::new("very"), Modifier::PlainCandidate, None);
        assert!(adjuster.state().negation_active);
        assert_eq!(
            adjuster.push(&Token::new("smart"), Modifier::PlainCandidate, Some(1.7)),
            Some(-0.85)
        );
        assert!(!adjuster.state().negation_active);
        assert_eq!(
            adjuster.push(&Token::new("handsome"), Modifier::PlainCandidate, Some(2.2)),
            Some(2.2)
        );
    }
}

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

//! Rule-based sentiment scoring for short English texts.
//!
//! A [Lexicon] assigns a valence to each word it knows.  [score] splits a
//! sentence into tokens, adjusts each word's valence for the words around it
//! and for emphasis (capitals, exclamation marks), and reduces the results to
//! a [ScoreResult]:
//!
//! ```
//! use valence::{Lexicon, LexiconEntry, score};
//!
//! let lexicon = Lexicon::from_entries([LexiconEntry {
//!     word: String::from("good"),
//!     valence: 1.9,
//!     auxiliary: 0.9434,
//! }]);
//! let result = score("not good", &lexicon);
//! assert_eq!(result.neg, 1.0);
//! assert!(result.compound < 0.0);
//! ```

pub mod adjust;
pub mod aggregate;
pub mod lex;
pub mod lexicon;
pub mod modifier;
pub mod output;
pub mod score;
pub mod settings;

pub use aggregate::ScoreResult;
pub use lexicon::{Lexicon, LexiconEntry};
pub use score::{Scorer, score, score_batch};
pub use settings::Settings;

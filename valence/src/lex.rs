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

//! Lexical analysis of sentences.
//!
//! Sentences are split into [Token]s by the [scan] module.  Splitting happens
//! on white space, commas, and periods, which are discarded.  Each token
//! carries the signals that later scoring depends on: its lowercased text, with
//! any exclamation marks removed, whether it was written in all capitals, and
//! how many exclamation marks it contained.

// Warn about missing docs, but not for items declared with `#[cfg(test)]`.
#![cfg_attr(not(test), warn(missing_docs))]

pub mod scan;
mod token;
pub use scan::tokenize;
pub use token::{MAX_EXCLAMATIONS, Token};

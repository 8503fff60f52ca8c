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

//! Sentence scanning.
//!
//! [StringScanner] walks a sentence once, from left to right, producing one
//! [Token] for each maximal run of non-delimiter characters.  The delimiters
//! are the ASCII white space characters (space, tab, new-line, vertical tab,
//! form feed, carriage return), `,`, and `.`.  Exclamation marks are not
//! delimiters: they stay inside the token that contains them, where they are
//! counted and then dropped from the token's normalized text.

use std::iter::FusedIterator;

use super::token::Token;

/// Returns true if `c` separates tokens.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ',' | '.')
}

/// An iterator over the [Token]s in a sentence.
#[derive(Clone, Debug)]
pub struct StringScanner<'a> {
    input: &'a str,
}

impl<'a> StringScanner<'a> {
    /// Starts scanning at the beginning of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Returns the part of the input not yet scanned.
    pub fn remainder(&self) -> &'a str {
        self.input
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.input.trim_start_matches(is_delimiter);
        if start.is_empty() {
            self.input = start;
            return None;
        }

        let len = start.find(is_delimiter).unwrap_or(start.len());
        let (raw, rest) = start.split_at(len);
        self.input = rest;
        Some(Token::new(raw))
    }
}

impl FusedIterator for StringScanner<'_> {}

/// Returns an iterator over the tokens in `sentence`.
pub fn tokenize(sentence: &str) -> StringScanner<'_> {
    StringScanner::new(sentence)
}

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

#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use valence::{
    Lexicon,
    lex::{scan::is_delimiter, tokenize},
    score,
};

static LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_str_with_warnings(
        "good 1.9 0.9\nbad -2.5 0.7\n:) 2.0 1.2\nand 0.0 0.0\nnot 5.0 0.0\n",
        |_| (),
    )
});

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for token in tokenize(input) {
            assert!(!token.raw.is_empty());
            assert!(!token.raw.contains(is_delimiter));
            assert!(!token.normalized.contains('!'));
        }

        let result = score(input, &LEXICON);
        assert!((-1.0..=1.0).contains(&result.compound));
        for proportion in [result.neg, result.neu, result.pos] {
            assert!((0.0..=1.0 + 1e-9).contains(&proportion));
        }
    }
});

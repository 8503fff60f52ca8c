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

use anyhow::Result;
use clap::Args;
use valence::output::{self, Item};

use crate::{LexiconOptions, OutputOptions};

/// Look up words in the lexicon.
///
/// Each word is normalized the way a sentence's words are before it is looked
/// up, so `GOOD!` finds the entry for `good`.
#[derive(Args, Clone, Debug)]
pub struct Lookup {
    /// Words to look up.
    #[arg(required = true)]
    words: Vec<String>,

    #[command(flatten)]
    lexicon_options: LexiconOptions,

    #[command(flatten)]
    output_options: OutputOptions,
}

impl Lookup {
    pub fn run(self) -> Result<()> {
        let (lexicon, settings) = self.lexicon_options.load()?;
        self.output_options.write_all(
            self.words
                .iter()
                .map(|word| Item::from(output::Lookup::new(word, &lexicon, &settings))),
        )
    }
}

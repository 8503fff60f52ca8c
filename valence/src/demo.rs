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
use valence::{Scorer, output::Item, score::DEMO_SENTENCES};

use crate::{LexiconOptions, OutputOptions};

/// Score a fixed set of sample sentences.
#[derive(Args, Clone, Debug)]
pub struct Demo {
    #[command(flatten)]
    lexicon_options: LexiconOptions,

    #[command(flatten)]
    output_options: OutputOptions,
}

impl Demo {
    pub fn run(self) -> Result<()> {
        let (lexicon, settings) = self.lexicon_options.load()?;
        let scorer = Scorer::with_settings(&lexicon, &settings);
        self.output_options
            .write_all(DEMO_SENTENCES.iter().map(|sentence| Item::Score {
                sentence: String::from(*sentence),
                result: scorer.score(sentence),
            }))
    }
}

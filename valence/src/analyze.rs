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

use std::{
    fs::read_to_string,
    io::{BufRead, stdin},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Args;
use rayon::ThreadPoolBuilder;
use valence::{Scorer, output::Item};

use crate::{LexiconOptions, OutputOptions};

/// Score sentences.
///
/// Sentences are taken from the command line.  If there are none, each line
/// of the input file, or of stdin, is scored as a sentence.
#[derive(Args, Clone, Debug)]
pub struct Analyze {
    /// Sentences to score.
    sentences: Vec<String>,

    /// File with one sentence per line.
    #[arg(short, long, conflicts_with = "sentences")]
    input: Option<PathBuf>,

    /// Also show how each token contributed to the score.
    #[arg(long, help_heading = "Output options")]
    explain: bool,

    /// Number of threads to score with (by default, one per CPU).
    #[arg(short, long)]
    jobs: Option<usize>,

    #[command(flatten)]
    lexicon_options: LexiconOptions,

    #[command(flatten)]
    output_options: OutputOptions,
}

impl Analyze {
    fn sentences(&self) -> Result<Vec<String>> {
        if !self.sentences.is_empty() {
            Ok(self.sentences.clone())
        } else if let Some(input) = &self.input {
            let text = read_to_string(input)
                .with_context(|| format!("{}: cannot read input", input.display()))?;
            Ok(text.lines().map(String::from).collect())
        } else {
            Ok(stdin().lock().lines().collect::<Result<Vec<_>, _>>()?)
        }
    }

    pub fn run(self) -> Result<()> {
        if self.explain && !self.output_options.format.supports_analysis() {
            bail!("--explain is not supported for CSV output.");
        }

        let (lexicon, settings) = self.lexicon_options.load()?;
        let sentences = self.sentences()?;
        let scorer = Scorer::with_settings(&lexicon, &settings);

        let mut builder = ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs);
        }
        let pool = builder.build()?;

        let items = pool.install(|| {
            if self.explain {
                scorer
                    .analyze_batch(&sentences)
                    .into_iter()
                    .map(Item::from)
                    .collect::<Vec<_>>()
            } else {
                scorer
                    .score_batch(&sentences)
                    .into_iter()
                    .zip(&sentences)
                    .map(|(result, sentence)| Item::Score {
                        sentence: sentence.clone(),
                        result,
                    })
                    .collect()
            }
        });
        self.output_options.write_all(items)
    }
}

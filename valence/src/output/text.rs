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
    borrow::Cow,
    fmt::Display,
    io::{BufWriter, Result, Write},
};

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::score::{Analysis, Contribution};

use super::{Item, Lookup, driver::Driver};

/// Writes items as plain text.
///
/// A scored sentence is written as two lines and a blank line, e.g.:
///
/// ```text
/// Sentence: "VADER is smart, handsome, and funny."
/// {'neg': 0.000, 'neu': 0.341, 'pos': 0.659, 'compound': 0.8316}
///
/// ```
///
/// An analysis adds a table of the sentence's tokens before the blank line.
pub struct TextDriver {
    file: BufWriter<Box<dyn Write>>,
}

impl TextDriver {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            file: BufWriter::new(writer),
        }
    }

    fn write_contributions(&mut self, analysis: &Analysis) -> Result<()> {
        let rows = analysis
            .contributions
            .iter()
            .map(|contribution| {
                let Contribution {
                    token,
                    modifier,
                    base,
                    valence,
                } = contribution;
                [
                    token.raw.clone(),
                    modifier.to_string(),
                    format_number(*base, 3),
                    format_number(*valence, 3),
                ]
            })
            .collect::<Vec<_>>();
        let header = ["token", "role", "base", "valence"].map(String::from);

        let mut widths = [0; 4];
        for row in std::iter::once(&header).chain(&rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        for row in std::iter::once(&header).chain(&rows) {
            let line = row
                .iter()
                .zip_eq(widths)
                .enumerate()
                .map(|(column, (cell, width))| {
                    // Text columns are left-aligned, numbers right-aligned.
                    let padding = " ".repeat(width - cell.width());
                    if column < 2 {
                        format!("{cell}{padding}")
                    } else {
                        format!("{padding}{cell}")
                    }
                })
                .join(" ");
            writeln!(self.file, "    {}", line.trim_end())?;
        }
        writeln!(self.file, "    sum = {:.3}", analysis.sum)
    }

    fn write_lookup(&mut self, lookup: &Lookup) -> Result<()> {
        let word = Quoted(&lookup.word);
        match &lookup.entry {
            Some(entry) => writeln!(
                self.file,
                "{word}: valence {}, auxiliary {}",
                entry.valence, entry.auxiliary
            ),
            None if lookup.modifier.is_scored() => {
                writeln!(self.file, "{word}: not found")
            }
            None => writeln!(self.file, "{word}: {}", lookup.modifier),
        }
    }
}

fn format_number(number: Option<f64>, decimals: usize) -> String {
    match number {
        Some(number) => format!("{number:.decimals$}"),
        None => String::from("-"),
    }
}

struct Quoted<T>(T);

impl<T> Display for Quoted<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl Driver for TextDriver {
    fn name(&self) -> Cow<'static, str> {
        Cow::from("text")
    }

    fn write(&mut self, item: &Item) -> Result<()> {
        if let Some((sentence, result)) = item.score() {
            writeln!(self.file, "Sentence: {}", Quoted(sentence))?;
            writeln!(self.file, "{result}")?;
        }
        match item {
            Item::Score { .. } => (),
            Item::Analysis(analysis) => self.write_contributions(analysis)?,
            Item::Lookup(lookup) => return self.write_lookup(lookup),
        }
        writeln!(self.file)
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()
    }
}

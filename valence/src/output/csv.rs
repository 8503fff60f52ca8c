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
    io::{Result, Write},
};

use csv::{Writer, WriterBuilder};

use crate::aggregate::ScoreResult;

use super::{Item, driver::Driver};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Header {
    Score,
    Lookup,
}

impl Header {
    fn fields(&self) -> &'static [&'static str] {
        match self {
            Header::Score => &["sentence", "neg", "neu", "pos", "compound"],
            Header::Lookup => &["word", "role", "valence", "auxiliary"],
        }
    }
}

/// Writes items as comma-separated values, one row per item.
///
/// A header row precedes the first item, and any item of a different kind
/// than the one before it.
pub struct CsvDriver {
    writer: Writer<Box<dyn Write>>,
    header: Option<Header>,
}

impl CsvDriver {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer: WriterBuilder::new().flexible(true).from_writer(writer),
            header: None,
        }
    }

    fn start_item(&mut self, header: Header) -> Result<()> {
        if self.header != Some(header) {
            self.writer.write_record(header.fields())?;
            self.header = Some(header);
        }
        Ok(())
    }

    fn write_score(&mut self, sentence: &str, result: &ScoreResult) -> Result<()> {
        self.start_item(Header::Score)?;
        let ScoreResult {
            neg,
            neu,
            pos,
            compound,
        } = result;
        self.writer.write_record([
            sentence,
            format!("{neg:.3}").as_str(),
            format!("{neu:.3}").as_str(),
            format!("{pos:.3}").as_str(),
            format!("{compound:.4}").as_str(),
        ])?;
        Ok(())
    }
}

impl Driver for CsvDriver {
    fn name(&self) -> Cow<'static, str> {
        Cow::from("csv")
    }

    fn write(&mut self, item: &Item) -> Result<()> {
        match item {
            Item::Score { sentence, result } => self.write_score(sentence, result),
            Item::Analysis(analysis) => self.write_score(&analysis.sentence, &analysis.result),
            Item::Lookup(lookup) => {
                self.start_item(Header::Lookup)?;
                let (valence, auxiliary) = match &lookup.entry {
                    Some(entry) => (entry.valence.to_string(), entry.auxiliary.to_string()),
                    None => (String::new(), String::new()),
                };
                self.writer.write_record([
                    lookup.word.as_str(),
                    lookup.modifier.as_str(),
                    valence.as_str(),
                    auxiliary.as_str(),
                ])?;
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }
}

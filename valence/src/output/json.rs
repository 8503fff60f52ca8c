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
    io::{BufWriter, Result, Write},
};

use serde::Serialize;

use crate::{aggregate::ScoreResult, score::Contribution};

use super::{Item, driver::Driver};

/// Writes each item as a JSON object, either pretty-printed or one per line.
pub struct JsonDriver {
    file: BufWriter<Box<dyn Write>>,
    pretty: bool,
}

impl JsonDriver {
    pub fn new(writer: Box<dyn Write>, pretty: bool) -> Self {
        Self {
            file: BufWriter::new(writer),
            pretty,
        }
    }

    fn write_json<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        match self.pretty {
            true => serde_json::to_writer_pretty(&mut self.file, value)?,
            false => serde_json::to_writer(&mut self.file, value)?,
        };
        writeln!(self.file)
    }
}

#[derive(Serialize)]
struct ScoreRecord<'a> {
    sentence: &'a str,
    #[serde(flatten)]
    result: &'a ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [Contribution]>,
}

impl Driver for JsonDriver {
    fn name(&self) -> Cow<'static, str> {
        Cow::from(if self.pretty { "json" } else { "ndjson" })
    }

    fn write(&mut self, item: &Item) -> Result<()> {
        match item {
            Item::Score { sentence, result } => self.write_json(&ScoreRecord {
                sentence,
                result,
                sum: None,
                tokens: None,
            }),
            Item::Analysis(analysis) => self.write_json(&ScoreRecord {
                sentence: &analysis.sentence,
                result: &analysis.result,
                sum: Some(analysis.sum),
                tokens: Some(&analysis.contributions),
            }),
            Item::Lookup(lookup) => self.write_json(lookup),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{
        aggregate::ScoreResult,
        lexicon::{Lexicon, LexiconEntry},
        output::{Format, Item, tests::render},
        score::Scorer,
    };

    fn score_item() -> Item {
        Item::Score {
            sentence: String::from("good"),
            result: ScoreResult {
                neg: 0.0,
                neu: 0.0,
                pos: 1.0,
                compound: 0.5,
            },
        }
    }

    #[test]
    fn ndjson() {
        let output = render(Format::Ndjson, &[score_item(), score_item()]);
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            serde_json::from_str::<Value>(lines[0]).unwrap(),
            json!({"sentence": "good", "neg": 0.0, "neu": 0.0, "pos": 1.0, "compound": 0.5})
        );
    }

    #[test]
    fn analysis() {
        let lexicon = Lexicon::from_entries([LexiconEntry {
            word: String::from("good"),
            valence: 2.0,
            auxiliary: 0.5,
        }]);
        let analysis = Scorer::new(&lexicon).analyze("not good");
        let output = render(Format::Json, &[Item::Analysis(analysis)]);
        let value = serde_json::from_str::<Value>(&output).unwrap();
        assert_eq!(value["sum"], json!(-1.0));
        assert_eq!(value["neg"], json!(1.0));
        assert_eq!(
            value["tokens"],
            json!([
                {
                    "token": {"raw": "not", "normalized": "not", "all_caps": false, "exclamations": 0},
                    "modifier": "negation",
                    "base": null,
                    "valence": null
                },
                {
                    "token": {"raw": "good", "normalized": "good", "all_caps": false, "exclamations": 0},
                    "modifier": "plain-candidate",
                    "base": 2.0,
                    "valence": -1.0
                }
            ])
        );
    }
}

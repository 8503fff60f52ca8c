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

//! Word valence lexicons.
//!
//! A lexicon file has one entry per line.  Each line consists of white
//! space-separated fields: a word, its valence, and an auxiliary metric (in the
//! VADER distribution, the standard deviation of the human ratings behind the
//! valence).  Any further fields are ignored.  Blank lines are ignored.
//!
//! Lines that lack a numeric field, whose numeric fields do not parse, or whose
//! valence exceeds [MAX_VALENCE] in magnitude, are skipped with a [Warning].
//! If a word appears more than once, the first entry wins and the later ones
//! are skipped with a [Warning].
//!
//! Use [Lexicon::open_file] to read a lexicon file.

// Warn about missing docs, but not for items declared with `#[cfg(test)]`.
#![cfg_attr(not(test), warn(missing_docs))]

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::read,
    io::Error as IoError,
    path::{Path, PathBuf},
};

use displaydoc::Display;
use encoding_rs::{Encoding, UTF_8};
use indexmap::{IndexMap, map::Entry};
use serde::Serialize;
use thiserror::Error as ThisError;

/// Largest valence magnitude accepted from a lexicon file.  Keeping valences
/// bounded keeps the sums computed while scoring finite.
pub const MAX_VALENCE: f64 = 1e6;

/// One word in a [Lexicon].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LexiconEntry {
    /// The word, exactly as written in the lexicon.
    pub word: String,

    /// Signed sentiment weight.
    pub valence: f64,

    /// Secondary metric from the lexicon file.  Scoring never uses it.
    pub auxiliary: f64,
}

/// An immutable map from words to [LexiconEntry]s.
///
/// Lookups are case-sensitive.  Scoring looks up lowercased text, so words
/// with uppercase letters in the lexicon are never matched.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: IndexMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Returns a lexicon with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from `entries`.  If a word appears more than once, the
    /// first entry for it wins.
    ///
    /// Unlike [Lexicon::from_str_with_warnings], this does not check valences
    /// against [MAX_VALENCE].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            map.entry(entry.word.clone()).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Reads the lexicon file at `path`, decoding it with `encoding` (by
    /// default, UTF-8), and invoking `warn` for each line that is skipped.
    ///
    /// A byte order mark at the start of the file overrides `encoding`.
    pub fn open_file<P, F>(
        path: P,
        encoding: Option<&'static Encoding>,
        mut warn: F,
    ) -> Result<Self, Error>
    where
        P: AsRef<Path>,
        F: FnMut(Warning),
    {
        let path = path.as_ref();
        let bytes = read(path).map_err(|error| Error::new(Some(path), error.into()))?;
        let encoding = encoding.unwrap_or(UTF_8);
        let (text, actual_encoding, malformed) = encoding.decode(&bytes);
        if malformed {
            warn(Warning::Malformed {
                encoding: actual_encoding.name(),
            });
        }
        Ok(Self::from_str_with_warnings(&text, warn))
    }

    /// Parses lexicon file contents `s`, invoking `warn` for each line that
    /// is skipped.
    pub fn from_str_with_warnings<F>(s: &str, mut warn: F) -> Self
    where
        F: FnMut(Warning),
    {
        let mut entries = IndexMap::new();

        // Line number of each entry in `entries`, by index.
        let mut line_numbers = Vec::new();

        for (index, line) in s.lines().enumerate() {
            let line_number = index + 1;
            let entry = match parse_line(line) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(details) => {
                    warn(Warning::Record {
                        line_number,
                        details,
                    });
                    continue;
                }
            };
            match entries.entry(entry.word.clone()) {
                Entry::Occupied(occupied) => warn(Warning::Record {
                    line_number,
                    details: RecordWarning::DuplicateWord {
                        word: entry.word,
                        first_line: line_numbers[occupied.index()],
                    },
                }),
                Entry::Vacant(vacant) => {
                    vacant.insert(entry);
                    line_numbers.push(line_number);
                }
            }
        }
        Self { entries }
    }

    /// Looks up `word`.
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    /// Returns the number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.values()
    }
}

impl FromIterator<LexiconEntry> for Lexicon {
    fn from_iter<T: IntoIterator<Item = LexiconEntry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

/// Parses one line of a lexicon file.  Returns `Ok(None)` for a blank line.
fn parse_line(line: &str) -> Result<Option<LexiconEntry>, RecordWarning> {
    let mut fields = line.split_whitespace();
    let Some(word) = fields.next() else {
        return Ok(None);
    };
    let mut number = |field| {
        let Some(text) = fields.next() else {
            return Err(RecordWarning::MissingField(field));
        };
        match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(RecordWarning::InvalidNumber {
                field,
                text: String::from(text),
            }),
        }
    };
    let valence = number(Field::Valence)?;
    if valence.abs() > MAX_VALENCE {
        return Err(RecordWarning::ValenceOutOfRange { valence });
    }
    let auxiliary = number(Field::Auxiliary)?;
    Ok(Some(LexiconEntry {
        word: String::from(word),
        valence,
        auxiliary,
    }))
}

/// A numeric field in a lexicon line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// The second field.
    Valence,

    /// The third field.
    Auxiliary,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Field::Valence => write!(f, "valence"),
            Field::Auxiliary => write!(f, "auxiliary metric"),
        }
    }
}

/// A warning while reading a [Lexicon].
#[derive(Display, ThisError, Debug, PartialEq)]
pub enum Warning {
    /// Lexicon is not valid {encoding}; invalid byte sequences were replaced.
    Malformed {
        /// Name of the encoding used to decode the file.
        encoding: &'static str,
    },

    /// Line {line_number}: {details}
    Record {
        /// 1-based line number of the skipped line.
        line_number: usize,

        /// Why the line was skipped.
        details: RecordWarning,
    },
}

/// Why a line in a lexicon was skipped.
#[derive(Display, ThisError, Debug, PartialEq)]
pub enum RecordWarning {
    /// Missing {0} field.
    MissingField(Field),

    /// Invalid {field} {text:?}.
    InvalidNumber {
        /// Which field.
        field: Field,
        /// The field's contents.
        text: String,
    },

    /// Valence {valence} is outside the range -1000000 to 1000000.
    ValenceOutOfRange {
        /// The valence.
        valence: f64,
    },

    /// Duplicate word {word:?} ignored (first defined on line {first_line}).
    DuplicateWord {
        /// The word.
        word: String,
        /// 1-based line number of the entry that wins.
        first_line: usize,
    },
}

/// An error reading a [Lexicon].
#[derive(Debug)]
pub struct Error {
    /// Name of the lexicon file, if any.
    pub file_name: Option<PathBuf>,

    /// Details of the error.
    pub details: ErrorDetails,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.details {
            ErrorDetails::Io(error) => Some(error),
        }
    }
}

impl Error {
    /// Constructs an error from `file_name` and `details`.
    pub fn new(file_name: Option<&Path>, details: ErrorDetails) -> Self {
        Self {
            file_name: file_name.map(PathBuf::from),
            details,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(file_name) = &self.file_name {
            write!(f, "{}: ", file_name.display())?;
        }
        write!(f, "{}", &self.details)
    }
}

/// Details of an [Error].
#[derive(Display, ThisError, Debug)]
pub enum ErrorDetails {
    /// Cannot read lexicon ({0}).
    Io(#[from] IoError),
}

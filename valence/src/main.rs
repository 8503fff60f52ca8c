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
    fs::File,
    io::{Write, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use encoding_rs::Encoding;
use thiserror::Error as ThisError;
use valence::{
    Lexicon, Settings,
    output::{Driver, Format, Item},
};

use crate::{analyze::Analyze, demo::Demo, lookup::Lookup};

mod analyze;
mod demo;
mod lookup;

/// Valence, a rule-based sentiment scorer for short texts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Score(Analyze),
    Demo(Demo),
    Lookup(Lookup),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Score(analyze) => analyze.run(),
            Command::Demo(demo) => demo.run(),
            Command::Lookup(lookup) => lookup.run(),
        }
    }
}

#[derive(ThisError, Debug)]
#[error("{0}: unknown encoding")]
struct UnknownEncodingError(String);

fn parse_encoding(arg: &str) -> Result<&'static Encoding, UnknownEncodingError> {
    match Encoding::for_label_no_replacement(arg.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(UnknownEncodingError(arg.to_string())),
    }
}

/// Options for loading the lexicon and scoring settings.
#[derive(Args, Clone, Debug)]
struct LexiconOptions {
    /// Lexicon file, with one word, valence, and auxiliary metric per line.
    #[arg(
        short,
        long,
        default_value = "vader_lexicon.txt",
        help_heading = "Lexicon options"
    )]
    lexicon: PathBuf,

    /// The encoding of the lexicon file (by default, UTF-8).
    #[arg(short, long, value_parser = parse_encoding, help_heading = "Lexicon options")]
    encoding: Option<&'static Encoding>,

    /// TOML file with word lists and constants to use instead of the
    /// defaults.
    #[arg(short, long, help_heading = "Lexicon options")]
    config: Option<PathBuf>,

    /// Don't warn about malformed lexicon lines.
    #[arg(short, long, help_heading = "Lexicon options")]
    quiet: bool,
}

impl LexiconOptions {
    fn load(&self) -> Result<(Lexicon, Settings)> {
        let settings = match &self.config {
            Some(config) => Settings::from_toml_file(config)?,
            None => Settings::default(),
        };
        let lexicon = Lexicon::open_file(&self.lexicon, self.encoding, |warning| {
            if !self.quiet {
                eprintln!("warning: {}: {warning}", self.lexicon.display());
            }
        })?;
        Ok((lexicon, settings))
    }
}

/// Options for where and how to write results.
#[derive(Args, Clone, Debug)]
struct OutputOptions {
    /// Output file name.  If omitted, output is written to stdout.
    #[arg(short, long, help_heading = "Output options")]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t, help_heading = "Output options")]
    format: Format,
}

impl OutputOptions {
    fn driver(&self) -> Result<Box<dyn Driver>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(output) => Box::new(
                File::create(output)
                    .with_context(|| format!("Cannot create {}", output.display()))?,
            ),
            None => Box::new(stdout()),
        };
        Ok(<dyn Driver>::new(self.format, writer))
    }

    fn write_all<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut driver = self.driver()?;
        let name = driver.name();
        let context = || format!("Writing {name} output failed");
        for item in items {
            driver.write(&item).with_context(context)?;
        }
        driver.flush().with_context(context)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    Cli::parse().command.run()
}

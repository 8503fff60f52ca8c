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
    fmt::Display,
    fs::{read_to_string, write},
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use valence::{
    Lexicon,
    output::{Driver, Format, Item},
    score::{DEMO_SENTENCES, Scorer},
};

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn assert_lines_eq<E, A>(expected: &str, expected_name: E, actual: &str, actual_name: A)
where
    E: Display,
    A: Display,
{
    if expected != actual {
        eprintln!("Unexpected output:\n--- {expected_name}\n+++ {actual_name}");
        for result in diff::lines(expected, actual) {
            let (prefix, line) = match result {
                diff::Result::Left(line) => ('-', line),
                diff::Result::Both(line, _) => (' ', line),
                diff::Result::Right(line) => ('+', line),
            };
            let suffix = if line.trim_end().len() != line.len() {
                "$"
            } else {
                ""
            };
            eprintln!("{prefix}{line}{suffix}");
        }
        panic!();
    }
}

/// Compares `actual` against the contents of `expected_filename`.
fn check_expected(expected_filename: &Path, actual: &str) {
    let expected = read_to_string(expected_filename).unwrap();
    if expected != actual {
        if std::env::var("VALENCE_REFRESH_EXPECTED").is_ok() {
            write(expected_filename, actual).unwrap();
            panic!("{}: refreshed output", expected_filename.display());
        } else {
            eprintln!("note: rerun with VALENCE_REFRESH_EXPECTED=1 to refresh expected output");
        }
    }
    assert_lines_eq(&expected, expected_filename.display(), actual, "actual");
}

fn valence<I, S>(args: I, stdin: Option<&str>) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut child = Command::new(env!("CARGO_BIN_EXE_valence"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut child_stdin = child.stdin.take().unwrap();
    child_stdin
        .write_all(stdin.unwrap_or("").as_bytes())
        .unwrap();
    drop(child_stdin);
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn demo_library() {
    let lexicon = Lexicon::open_file(testdata("lexicon.txt"), None, |warning| {
        panic!("{warning}")
    })
    .unwrap();
    let scorer = Scorer::new(&lexicon);

    let output_filename =
        std::env::temp_dir().join(format!("valence-demo-{}.txt", std::process::id()));
    let file = std::fs::File::create(&output_filename).unwrap();
    let mut driver = <dyn Driver>::new(Format::Text, Box::new(file));
    for sentence in DEMO_SENTENCES {
        driver
            .write(&Item::Score {
                sentence: String::from(sentence),
                result: scorer.score(sentence),
            })
            .unwrap();
    }
    driver.flush().unwrap();
    drop(driver);

    let actual = read_to_string(&output_filename).unwrap();
    std::fs::remove_file(&output_filename).unwrap();
    check_expected(&testdata("demo.expected"), &actual);
}

#[test]
fn demo_command() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(["demo", "-l", lexicon], None);
    check_expected(&testdata("demo.expected"), &stdout(&output));
}

#[test]
fn score_command() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(
        ["score", "-l", lexicon, "--format=csv", "--jobs=2"],
        Some("good\nnot good\n\nzzz\n"),
    );
    assert_lines_eq(
        "sentence,neg,neu,pos,compound
good,0.000,0.000,1.000,0.4404
not good,1.000,0.000,0.000,-0.2382
,0.000,0.000,0.000,0.0000
zzz,0.000,1.000,0.000,0.0000
",
        "expected",
        &stdout(&output),
        "actual",
    );
}

#[test]
fn score_arguments_ndjson() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(["score", "-l", lexicon, "-f", "ndjson", "GOOD!!!", "bad"], None);
    let stdout = stdout(&output);
    let lines = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["sentence"], "GOOD!!!");
    assert!((lines[0]["compound"].as_f64().unwrap() - 0.8098).abs() < 1e-4);
    assert_eq!(lines[1]["neg"], 1.0);
}

#[test]
fn explain_with_csv_fails() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(["score", "-l", lexicon, "--explain", "--format=csv", "good"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--explain"));
}

#[test]
fn lookup_command() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(["lookup", "-l", lexicon, "HANDSOME!", "ugly", "very"], None);
    assert_lines_eq(
        "\"HANDSOME!\": valence 2.2, auxiliary 0.74833
\"ugly\": not found
\"very\": intensifier
",
        "expected",
        &stdout(&output),
        "actual",
    );
}

#[test]
fn missing_lexicon() {
    let lexicon = testdata("no-such-lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let output = valence(["demo", "-l", lexicon], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-lexicon.txt"), "{stderr}");
    assert!(stderr.contains("Cannot read lexicon"), "{stderr}");
}

#[test]
fn malformed_lexicon_warnings() {
    let lexicon = std::env::temp_dir().join(format!("valence-bad-{}.txt", std::process::id()));
    write(&lexicon, "good 1.9 0.9\nbroken\ngood 2.0 0.1\n").unwrap();
    let lexicon_name = lexicon.to_str().unwrap();

    let output = valence(["score", "-l", lexicon_name, "good"], None);
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(stderr.contains("Line 2: Missing valence field."), "{stderr}");
    assert!(stderr.contains("Line 3: Duplicate word"), "{stderr}");
    assert!(stdout(&output).contains("'compound': 0.4404"));

    let output = valence(["score", "--quiet", "-l", lexicon_name, "good"], None);
    assert!(output.stderr.is_empty());

    std::fs::remove_file(&lexicon).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_names_format() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    for (format, name) in [("text", "text"), ("ndjson", "ndjson"), ("csv", "csv")] {
        let output = valence(
            ["score", "-l", lexicon, "-o", "/dev/full", "-f", format, "good"],
            None,
        );
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(&format!("Writing {name} output failed")),
            "{stderr}"
        );
    }
}

#[test]
fn invalid_config() {
    let lexicon = testdata("lexicon.txt");
    let lexicon = lexicon.to_str().unwrap();
    let config = std::env::temp_dir().join(format!("valence-alpha-{}.toml", std::process::id()));
    write(&config, "[constants]\nalpha = -1.0\n").unwrap();

    let output = valence(["score", "-l", lexicon, "-c", config.to_str().unwrap(), "good"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Constant alpha may not be -1"), "{stderr}");

    std::fs::remove_file(&config).unwrap();
}

//! Fixture runner: feeds every `fixtures/*.json` case through the generator
//! and diffs the result against the recorded expectation.
//!
//! Usage: `dev-test-runner [name-regex]`
mod path_de;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use field_codegen::GenerationResult;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    /// Raw text, or any JSON value (serialized before generation).
    input: Value,
    expect: Expect,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Expect {
    Empty,
    ParseError {
        /// Exact message; omit to accept any decoder message.
        #[serde(default)]
        message: Option<String>,
    },
    Success {
        /// Full code, or lines joined with `\n`.
        code: Code,
        #[serde(default)]
        warnings: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Code {
    Text(String),
    Lines(Vec<String>),
}

impl Code {
    fn text(&self) -> String {
        match self {
            Code::Text(s) => s.clone(),
            Code::Lines(lines) => lines.join("\n"),
        }
    }
}

impl Fixture {
    fn input_text(&self) -> String {
        match &self.input {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// `None` on pass, otherwise a description of the mismatch.
    fn check(&self, actual: &GenerationResult) -> Option<String> {
        match (&self.expect, actual) {
            (Expect::Empty, GenerationResult::Empty) => None,
            (Expect::ParseError { message: None }, GenerationResult::ParseError { .. }) => None,
            (Expect::ParseError { message: Some(want) }, GenerationResult::ParseError { message }) => {
                (want != message).then(|| format!("message\n  want: {want}\n  got:  {message}"))
            }
            (Expect::Success { code: want_code, warnings: want_warnings }, GenerationResult::Success { code, warnings }) => {
                let want_code = want_code.text();
                if &want_code != code {
                    Some(format!("code\n--- want\n{want_code}\n--- got\n{code}"))
                } else if want_warnings != warnings {
                    Some(format!("warnings\n  want: {want_warnings:?}\n  got:  {warnings:?}"))
                } else {
                    None
                }
            }
            (want, got) => Some(format!("variant\n  want: {want:?}\n  got:  {got:?}")),
        }
    }
}

fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.retain(|p| p.extension().is_some_and(|ext| ext == "json"));
    paths.sort();
    Ok(paths)
}

fn run() -> Result<bool> {
    let filter = std::env::args()
        .nth(1)
        .map(|pattern| Regex::new(&pattern))
        .transpose()
        .context("invalid name filter")?;
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");

    let mut passed = 0usize;
    let mut failed = 0usize;
    for path in fixture_paths(&dir)? {
        let fixtures: Vec<Fixture> = path_de::read_with_path(&path)?;
        for fixture in fixtures {
            if filter.as_ref().is_some_and(|rx| !rx.is_match(&fixture.name)) {
                continue;
            }
            let actual = field_codegen::generate(&fixture.input_text());
            match fixture.check(&actual) {
                None => {
                    passed += 1;
                    eprintln!("{} {}", "✅".green(), fixture.name);
                }
                Some(diff) => {
                    failed += 1;
                    eprintln!("{} {}: {diff}", "❌".red(), fixture.name);
                }
            }
        }
    }
    eprintln!("—— {passed} passed, {failed} failed ——");
    Ok(failed == 0)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

//! CLI: field configuration JSON → widget script
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;

use field_codegen::{GenerationResult, example::EXAMPLE_CONFIG, highlight, jq_exec};

/// Shown in place of code when the input is blank.
pub const EMPTY_PLACEHOLDER: &str = "// Paste a widget field configuration (JSON object) to generate code";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate widget script (declarations + event handlers) from a field configuration
#[derive(Parser, Debug)]
#[command(name = "field-codegen", version)]
pub struct CommandLineInterface {
    /// more logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate script code from one or more field configurations
    Generate(GenerateOut),
    /// print the built-in example configuration
    Example(ExampleOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer selecting the field configuration in each document (e.g. /widget/fields)
    #[arg(long)]
    json_pointer: Option<String>,

    /// jq filter selecting the field configuration in each document; must yield one value
    #[arg(long, conflicts_with = "json_pointer")]
    jq_expr: Option<String>,

    /// Inputs: literal paths, quoted glob patterns, or '-' for stdin (default)
    #[arg(long, short, num_args = 1..)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// colorize code and messages
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// output .js file; a directory when several inputs are given (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExampleOut {
    /// print the code generated from the example instead of the example itself
    #[arg(long, default_value_t = false)]
    generate: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

/// One input, resolved: where it came from and the text handed to the generator.
#[derive(Debug)]
struct Source {
    label: String,
    path: Option<PathBuf>,
    text: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_sources(&self) -> Result<Vec<Source>> {
        let mut sources = Vec::new();
        let stdin_count = self.input.iter().filter(|i| *i == "-").count();
        if stdin_count > 0 && stdin_count < self.input.len() {
            bail!("'-' (stdin) cannot be combined with file inputs");
        }
        if stdin_count > 0 || self.input.is_empty() {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            sources.push(Source { label: "<stdin>".to_string(), path: None, text: self.prepare(text)? });
            return Ok(sources);
        }
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        for source_path in source_paths {
            let label = source_path.to_string_lossy().to_string();
            let text = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file {label}"))?;
            let text = self
                .prepare(text)
                .with_context(|| format!("failed to select field configuration in {label}"))?;
            sources.push(Source { label, path: Some(source_path), text });
        }
        Ok(sources)
    }

    /// Applies `--json-pointer` / `--jq-expr`. Text that is not JSON passes
    /// through untouched so the generator reports the decode error itself.
    fn prepare(&self, text: String) -> Result<String> {
        if self.json_pointer.is_none() && self.jq_expr.is_none() {
            return Ok(text);
        }
        let Ok(document) = serde_json::from_str::<Value>(&text) else {
            return Ok(text);
        };
        if let Some(pointer) = self.json_pointer.as_deref() {
            let selected = document
                .pointer(pointer)
                .ok_or_else(|| anyhow!("json pointer `{pointer}` matched nothing"))?;
            return Ok(serde_json::to_string_pretty(selected)?);
        }
        match self.jq_expr.as_deref() {
            Some(jq_expr) => jq_exec::select_one(jq_expr, &document),
            None => Ok(text),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<ExitCode> {
        match &self.cmd {
            Command::Example(target) => {
                if target.generate {
                    let result = field_codegen::generate(EXAMPLE_CONFIG);
                    println!("{}", result.code().unwrap_or_default());
                } else {
                    println!("{EXAMPLE_CONFIG}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Generate(target) => target.run(),
        }
    }
}

impl GenerateOut {
    fn run(&self) -> Result<ExitCode> {
        match self.color {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {
                if !std::io::stdout().is_terminal() {
                    colored::control::set_override(false);
                }
            }
        }

        // 1) resolve inputs
        let sources = self.input_settings.load_sources()?;
        tracing::info!(inputs = sources.len(), "generating");

        let targets = match self.out.as_deref() {
            Some(out) => output_targets(out, &sources)?,
            None => Vec::new(),
        };

        // 2) generate (independent, pure calls)
        let results: Vec<GenerationResult> = sources
            .par_iter()
            .map(|source| field_codegen::generate(&source.text))
            .collect();

        // 3) report in input order
        let multiple = sources.len() > 1;
        let mut failed = false;
        for (index, (source, result)) in sources.iter().zip(&results).enumerate() {
            failed |= matches!(result, GenerationResult::ParseError { .. });
            match targets.get(index) {
                Some(target) => self.write_file(target, source, result)?,
                None => self.print(source, result, multiple)?,
            }
        }
        Ok(if failed { ExitCode::from(1) } else { ExitCode::SUCCESS })
    }

    fn print(&self, source: &Source, result: &GenerationResult, multiple: bool) -> Result<()> {
        if self.format == Format::Json {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }
        if multiple {
            println!("{}", format!("// ==> {} <==", source.label).bright_black());
        }
        report_messages(&source.label, result);
        match result {
            GenerationResult::Empty => println!("{}", EMPTY_PLACEHOLDER.bright_black()),
            GenerationResult::ParseError { .. } => {}
            GenerationResult::Success { code, .. } => println!("{}", highlight::highlight(code)),
        }
        Ok(())
    }

    fn write_file(&self, target: &Path, source: &Source, result: &GenerationResult) -> Result<()> {
        report_messages(&source.label, result);
        let Some(code) = result.code() else {
            return Ok(());
        };
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let body = match self.format {
            Format::Text => code.to_string(),
            Format::Json => serde_json::to_string_pretty(result)?,
        };
        std::fs::write(target, body)
            .with_context(|| format!("failed to write {}", target.display()))?;
        tracing::info!(input = %source.label, output = %target.display(), "wrote generated code");
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn report_messages(label: &str, result: &GenerationResult) {
    if let GenerationResult::ParseError { message } = result {
        eprintln!("{} {label}: {message}", "error:".red().bold());
    }
    for warning in result.warnings() {
        eprintln!("{} {label}: {warning}", "warning:".yellow().bold());
    }
}

/// Output file per source. With one source `out` is the file itself; with
/// several it is a directory holding `<stem>.js` per input, and two inputs
/// sharing a stem are rejected before anything is written.
fn output_targets(out: &Path, sources: &[Source]) -> Result<Vec<PathBuf>> {
    if let [_] = sources {
        return Ok(vec![out.to_path_buf()]);
    }
    let mut seen = std::collections::HashMap::<PathBuf, &str>::new();
    let mut targets = Vec::with_capacity(sources.len());
    for source in sources {
        let stem = source
            .path
            .as_deref()
            .and_then(Path::file_stem)
            .ok_or_else(|| anyhow!("cannot derive an output name for {}", source.label))?;
        let target = out.join(format!("{}.js", stem.to_string_lossy()));
        if let Some(previous) = seen.insert(target.clone(), &source.label) {
            bail!(
                "{previous} and {} would both write {}",
                source.label,
                target.display()
            );
        }
        targets.push(target);
    }
    Ok(targets)
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                bail!("glob pattern matched no files: {pattern}");
            }
            matched.sort();
            out.extend(matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

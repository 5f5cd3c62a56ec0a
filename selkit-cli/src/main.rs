//! selkit CLI
//!
//! Encodes selectors into the flat arrays the runtime matcher consumes.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::warning::set_quiet;
use selkit_encode::{EncodedSelectorGroup, SelectorToken, encode_selector_group};

/// selkit: encode CSS-like selectors into flat runtime arrays
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # One JSON line per selector
    selkit 'button.primary:not(.ghost)' '[role=tab], a[href]'

    # Selectors from a file, one per line
    selkit --file selectors.txt --pretty

    # Show flags by name
    selkit --annotate 'div[title=x].a:not(span)'
"#)]
struct Cli {
    /// Selectors to encode; each may hold comma-separated alternatives
    #[arg(value_name = "SELECTOR")]
    selectors: Vec<String>,

    /// Read more selectors from a file, one per line (blank lines and
    /// `//` comments are skipped)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print a human-readable listing instead of JSON
    #[arg(short, long, conflicts_with = "pretty")]
    annotate: bool,

    /// Do not print warnings about ignored selector syntax
    #[arg(short, long)]
    quiet: bool,
}

/// Selector lines of a selector file.
fn selectors_from_file_contents(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}

/// Encode one input, turning a parse error into a message that points at
/// the offending character.
fn encode(raw: &str) -> Result<EncodedSelectorGroup> {
    encode_selector_group(raw).map_err(|err| {
        let column = raw[..err.offset()].chars().count();
        anyhow!("{err}\n  {raw}\n  {:>width$}", "^", width = column + 1)
    })
}

fn write_annotated(out: &mut impl Write, raw: &str, group: &EncodedSelectorGroup) -> Result<()> {
    writeln!(out, "{}", raw.bold())?;
    for (i, encoded) in group.iter().enumerate() {
        writeln!(out, "  alternative {}", i + 1)?;
        if encoded.is_empty() {
            writeln!(out, "    {}", "(matches any element)".dimmed())?;
        }
        for (position, token) in encoded.iter().enumerate() {
            match token {
                SelectorToken::Flag(flags) => {
                    let label = format!("{flags} ({})", flags.bits());
                    writeln!(out, "    {position:>3}  {}", label.cyan())?;
                }
                SelectorToken::Literal(_) => {
                    writeln!(out, "    {position:>3}  {}", token.green())?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let mut inputs = cli.selectors.clone();
    if let Some(path) = &cli.file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read selector file '{}'", path.display()))?;
        inputs.extend(selectors_from_file_contents(&contents));
    }
    if inputs.is_empty() {
        bail!("no selectors given: pass SELECTOR arguments or --file");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for raw in &inputs {
        let group = encode(raw)?;
        if cli.annotate {
            write_annotated(&mut out, raw, &group)?;
        } else if cli.pretty {
            writeln!(out, "{}", serde_json::to_string_pretty(&group)?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(&group)?)?;
        }
    }

    Ok(())
}

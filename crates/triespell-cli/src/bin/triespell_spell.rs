// triespell-spell: Check spelling of words.
//
// Words come from the command line or, if none are given, from stdin
// (one per line). Output format:
//   C: word          (correct)
//   W: word          (misspelled)
//   S: suggestion    (with --suggest, one line per suggestion)
//
// With --json each word produces one JSON object per line instead.
//
// Usage:
//   triespell-spell [-d DICT] [OPTIONS] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde_json::json;
use triespell::{SpellChecker, Verdict};
use triespell_cli::DictArgs;

/// Check spelling of words from arguments or stdin.
#[derive(Parser, Debug)]
#[command(name = "triespell-spell", version)]
struct Cli {
    /// Words to check (reads stdin when omitted)
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Also print suggestions for misspelled words
    #[arg(short, long)]
    suggest: bool,

    /// Print one JSON verdict per line
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    dict: DictArgs,
}

fn report_word(
    cli: &Cli,
    checker: &SpellChecker,
    word: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let verdict = checker.check(word);
    if cli.json {
        let line = json!({ "word": word, "verdict": verdict });
        return writeln!(out, "{line}");
    }
    match verdict {
        Verdict::Correct => writeln!(out, "C: {word}"),
        Verdict::Misspelled { suggestions } => {
            writeln!(out, "W: {word}")?;
            if cli.suggest {
                for s in suggestions {
                    writeln!(out, "S: {s}")?;
                }
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    triespell_cli::init_tracing(cli.dict.verbose);

    let checker = triespell_cli::load_checker(&cli.dict)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            report_word(&cli, &checker, word, &mut out)?;
        }
    } else {
        for word in &cli.words {
            report_word(&cli, &checker, word, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

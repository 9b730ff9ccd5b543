// triespell-complete: Autocomplete a word prefix from the dictionary.
//
// Prints up to N dictionary words starting with PREFIX, one per line,
// in alphabetical order.
//
// Usage:
//   triespell-complete [-d DICT] [-n N] PREFIX

use std::io::{self, Write};

use clap::Parser;
use triespell_cli::DictArgs;

/// Autocomplete a word prefix from the dictionary.
#[derive(Parser, Debug)]
#[command(name = "triespell-complete", version)]
struct Cli {
    /// Prefix to complete (case-insensitive)
    #[arg(value_name = "PREFIX")]
    prefix: String,

    #[command(flatten)]
    dict: DictArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    triespell_cli::init_tracing(cli.dict.verbose);

    let checker = triespell_cli::load_checker(&cli.dict)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in checker.autocomplete(&cli.prefix, cli.dict.max_suggestions) {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}

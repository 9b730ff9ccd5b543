// triespell-check: Spellcheck a document and write a suggestions file.
//
// Every misspelled word of DOC is written to the output as
//
//   <word> Did you mean?
//   <suggestions, space separated>
//   <blank line>
//
// Usage:
//   triespell-check [-d DICT] [-o OUT] [OPTIONS] DOC

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use triespell::SpellReport;
use triespell_cli::DictArgs;

/// Spellcheck a document and write suggestions for misspelled words.
#[derive(Parser, Debug)]
#[command(name = "triespell-check", version)]
struct Cli {
    /// Document to check
    #[arg(value_name = "DOC")]
    document: PathBuf,

    /// Suggestions file to write
    #[arg(short, long, value_name = "OUT", default_value = "suggestions.txt")]
    output: PathBuf,

    #[command(flatten)]
    dict: DictArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    triespell_cli::init_tracing(cli.dict.verbose);

    let checker = triespell_cli::load_checker(&cli.dict)?;
    let text = std::fs::read_to_string(&cli.document)
        .with_context(|| format!("failed to read {}", cli.document.display()))?;

    let report = SpellReport::scan(&checker, &text);

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    report
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        words = report.words_checked(),
        misspelled = report.findings().len(),
        output = %cli.output.display(),
        "spellcheck completed"
    );
    println!(
        "Spellcheck completed: {} of {} words misspelled. See {}.",
        report.findings().len(),
        report.words_checked(),
        cli.output.display()
    );
    Ok(())
}

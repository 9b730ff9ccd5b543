// triespell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triespell::{LoadPolicy, SpellChecker, SpellOptions, SuggestionStrategy};

/// Environment variable naming the dictionary file.
pub const DICT_ENV: &str = "TRIESPELL_DICT";

/// Dictionary file looked up in the working directory as a last resort.
pub const DEFAULT_DICT_FILE: &str = "dictionary.txt";

/// Dictionary and suggestion flags shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct DictArgs {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Fail on dictionary words with characters outside a-z instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Number of leading characters completed into suggestions
    #[arg(long, default_value_t = 2)]
    pub prefix_len: usize,

    /// Maximum number of suggestions per word (completions for triespell-complete)
    #[arg(short = 'n', long, default_value_t = 5)]
    pub max_suggestions: usize,

    /// Suggestion strategy: prefix or edit-distance
    #[arg(long, default_value_t = SuggestionStrategy::Prefix)]
    pub strategy: SuggestionStrategy,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DictArgs {
    pub fn spell_options(&self) -> SpellOptions {
        SpellOptions {
            prefix_len: self.prefix_len,
            max_suggestions: self.max_suggestions,
            strategy: self.strategy,
        }
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Skip
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Locate the dictionary and build a checker with the requested options.
pub fn load_checker(args: &DictArgs) -> anyhow::Result<SpellChecker> {
    let path = find_dictionary(args.dict.as_deref())?;
    let mut checker = SpellChecker::from_path(&path, args.load_policy())
        .with_context(|| format!("failed to load dictionary {}", path.display()))?;
    checker.set_options(args.spell_options());
    info!(
        path = %path.display(),
        words = checker.lexicon().len(),
        "dictionary ready"
    );
    Ok(checker)
}

/// Pick the dictionary file.
///
/// Search order:
/// 1. `explicit` argument (used as-is, even if missing, so the load error
///    names it)
/// 2. `TRIESPELL_DICT` environment variable
/// 3. `dictionary.txt` in the current working directory
pub fn find_dictionary(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let candidates = search_paths();
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    anyhow::bail!(
        "could not find a dictionary in any of the search paths:\n{}\n\
         pass --dict PATH or set {DICT_ENV}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Build the list of files to try when no dictionary is given.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(env_path) = std::env::var_os(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_DICT_FILE));
    }
    paths
}

// Dictionary loading: one word per line into a Lexicon

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};
use triespell_core::alphabet::{first_invalid, normalize};
use triespell_trie::{Lexicon, LexiconError};

use crate::SpellError;

/// What to do with a dictionary line containing characters outside `a`-`z`
/// after trimming and lowercasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Skip the word, log it and count it in [`LoadStats::rejected`].
    #[default]
    Skip,
    /// Abort loading with [`SpellError::InvalidCharacter`].
    Strict,
}

/// Counters gathered while loading a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Words newly added to the lexicon.
    pub inserted: usize,
    /// Valid words that were already present.
    pub duplicates: usize,
    /// Words skipped under [`LoadPolicy::Skip`].
    pub rejected: usize,
}

/// A lexicon together with the statistics of the load that built it.
#[derive(Debug)]
pub struct Dictionary {
    lexicon: Lexicon,
    stats: LoadStats,
}

impl Dictionary {
    /// Load a dictionary from a word-per-line stream.
    ///
    /// Lines are trimmed and lowercased; blank lines are ignored.
    pub fn from_reader<R: BufRead>(reader: R, policy: LoadPolicy) -> Result<Self, SpellError> {
        let mut lexicon = Lexicon::new();
        let stats = load_into(&mut lexicon, reader, policy)?;
        Ok(Self { lexicon, stats })
    }

    /// Load a dictionary file.
    ///
    /// A missing or unreadable file is reported as
    /// [`SpellError::DictionarySourceUnavailable`].
    pub fn from_path(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<Self, SpellError> {
        let path = path.as_ref();
        let unavailable = |source| SpellError::DictionarySourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        debug!(path = %path.display(), "loading dictionary");
        Self::from_reader(BufReader::new(file), policy).map_err(|e| match e {
            SpellError::Io(source) => unavailable(source),
            other => other,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn into_lexicon(self) -> Lexicon {
        self.lexicon
    }
}

/// Insert every word of a word-per-line stream into `lexicon`.
pub fn load_into<R: BufRead>(
    lexicon: &mut Lexicon,
    mut reader: R,
    policy: LoadPolicy,
) -> Result<LoadStats, SpellError> {
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        // Undecodable bytes become U+FFFD, which the alphabet check rejects.
        let line = String::from_utf8_lossy(&buf);
        let word = normalize(line.trim());
        if word.is_empty() {
            continue;
        }

        if let Some((position, character)) = first_invalid(&word) {
            match policy {
                LoadPolicy::Strict => {
                    return Err(LexiconError::InvalidCharacter {
                        word,
                        character,
                        position,
                    }
                    .into());
                }
                LoadPolicy::Skip => {
                    warn!(line = stats.lines, %word, ?character, "skipping dictionary word");
                    stats.rejected += 1;
                    continue;
                }
            }
        }

        if lexicon.insert(&word)? {
            stats.inserted += 1;
        } else {
            stats.duplicates += 1;
        }
    }

    info!(
        lines = stats.lines,
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        "dictionary loaded"
    );
    Ok(stats)
}

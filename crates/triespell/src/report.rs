// Batch spellcheck over a document and the suggestions file format
//
// For every misspelled word the suggestions file holds:
//
//   <word> Did you mean?
//   <s1> <s2> ... <sn>        (each suggestion followed by one space)
//   <blank line>

use std::io::Write;

use serde::Serialize;
use tracing::debug;
use triespell_core::Verdict;
use triespell_core::alphabet::normalize;

use crate::SpellError;
use crate::speller::SpellChecker;
use crate::tokenizer::tokenize;

/// A misspelled word found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The word as checked: lowercased, punctuation removed.
    pub word: String,
    /// 1-based line the word appeared on.
    pub line: usize,
    pub suggestions: Vec<String>,
}

/// Result of checking every word of a document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpellReport {
    words_checked: usize,
    findings: Vec<Finding>,
}

impl SpellReport {
    /// Tokenize `text` and check each word, keeping the misspelled ones in
    /// document order. Repeated misspellings are reported each time.
    pub fn scan(checker: &SpellChecker, text: &str) -> Self {
        let mut report = Self::default();
        for token in tokenize(text) {
            report.words_checked += 1;
            if let Verdict::Misspelled { suggestions } = checker.check(&token.text) {
                report.findings.push(Finding {
                    word: normalize(&token.text),
                    line: token.line,
                    suggestions,
                });
            }
        }
        debug!(
            words = report.words_checked,
            misspelled = report.findings.len(),
            "document checked"
        );
        report
    }

    pub fn words_checked(&self) -> usize {
        self.words_checked
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Write the report in the suggestions file format.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), SpellError> {
        for finding in &self.findings {
            write_finding(&mut out, &finding.word, &finding.suggestions)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Write one misspelled word and its suggestions.
pub fn write_finding<W: Write>(
    out: &mut W,
    word: &str,
    suggestions: &[String],
) -> Result<(), SpellError> {
    writeln!(out, "{word} Did you mean?")?;
    for suggestion in suggestions {
        write!(out, "{suggestion} ")?;
    }
    out.write_all(b"\n\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triespell_trie::Lexicon;

    fn checker() -> SpellChecker {
        SpellChecker::new(
            Lexicon::from_words(["the", "boy", "bay", "buoy", "car", "ace", "boat"]).unwrap(),
        )
    }

    fn render(report: &SpellReport) -> String {
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn clean_document_writes_nothing() {
        let report = SpellReport::scan(&checker(), "The boy, the BOAT.");
        assert!(report.is_clean());
        assert_eq!(report.words_checked(), 4);
        assert_eq!(render(&report), "");
    }

    #[test]
    fn findings_keep_order_and_lines() {
        let report = SpellReport::scan(&checker(), "the Boz\nxq car\nboz");
        let found: Vec<(&str, usize)> = report
            .findings()
            .iter()
            .map(|f| (f.word.as_str(), f.line))
            .collect();
        assert_eq!(found, [("boz", 1), ("xq", 2), ("boz", 3)]);
    }

    #[test]
    fn suggestions_file_format() {
        let report = SpellReport::scan(&checker(), "Boz! xq");
        assert_eq!(
            render(&report),
            "boz Did you mean?\nboat boy \n\nxq Did you mean?\n\n\n"
        );
    }

    #[test]
    fn serializes_findings() {
        let report = SpellReport::scan(&checker(), "cat");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["words_checked"], 1);
        assert_eq!(json["findings"][0]["word"], "cat");
        assert_eq!(json["findings"][0]["suggestions"][0], "car");
    }
}

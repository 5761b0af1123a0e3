//! Exact-word, case-insensitive line search with `<mark>` highlighting.
//!
//! A term matches only where it is not touching a word character on either
//! side. Word characters follow the regex crate's Unicode definition, so
//! `é` counts as a letter the same way `e` does.

pub mod view;

use regex::{Regex, RegexBuilder};

pub use view::PageView;

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Upper bound on the compiled size of a single search pattern. Roughly
/// 60 bytes per term character, so this admits terms of about a million
/// characters.
const PATTERN_SIZE_LIMIT: usize = 64 << 20;

/// A search term compiled into a whole-word, case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    term: String,
    regex: Regex,
}

impl SearchPattern {
    /// Compile `term` as literal text.
    ///
    /// Returns `None` for an empty term, or if the escaped term still fails
    /// to build (for example when it exceeds the regex size limit).
    pub fn compile(term: &str) -> Option<SearchPattern> {
        Self::compile_with_size_limit(term, PATTERN_SIZE_LIMIT)
    }

    fn compile_with_size_limit(term: &str, size_limit: usize) -> Option<SearchPattern> {
        if term.is_empty() {
            return None;
        }

        // Half boundaries only look outward, so terms that start or end
        // with punctuation ("C++", "(test)") still match as whole words.
        let pattern = format!(r"\b{{start-half}}{}\b{{end-half}}", regex::escape(term));

        let built = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build();

        match built {
            Ok(regex) => Some(SearchPattern {
                term: term.to_string(),
                regex,
            }),
            Err(e) => {
                tracing::warn!(
                    term_len = term.len(),
                    error = %e,
                    "search term did not compile, treating as no match"
                );
                None
            }
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Number of occurrences in `line`.
    pub fn count(&self, line: &str) -> usize {
        self.regex.find_iter(line).count()
    }

    /// Wrap every occurrence in `<mark>` delimiters, keeping the source casing.
    pub fn highlight(&self, line: &str) -> String {
        self.regex
            .replace_all(line, |caps: &regex::Captures<'_>| {
                format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
            })
            .into_owned()
    }

    /// Lines with at least one occurrence, in input order.
    pub fn match_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| self.is_match(line))
            .map(str::to_string)
            .collect()
    }
}

/// Lines of `lines` that contain `term` as a whole word, ignoring case.
///
/// An empty term, or one that cannot be compiled, yields no lines.
pub fn match_lines<S: AsRef<str>>(lines: &[S], term: &str) -> Vec<String> {
    match SearchPattern::compile(term) {
        Some(pattern) => pattern.match_lines(lines),
        None => Vec::new(),
    }
}

/// `line` with every whole-word occurrence of `term` wrapped in `<mark>`.
pub fn highlight(line: &str, term: &str) -> String {
    match SearchPattern::compile(term) {
        Some(pattern) => pattern.highlight(line),
        None => line.to_string(),
    }
}

use serde::{Deserialize, Serialize};

use super::SearchPattern;

/// What to show for one page given the current search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    /// No active search: the page text, unmodified.
    FullText { text: String },
    /// Lines containing the term, plain and highlighted, in page order.
    Matches {
        count: usize,
        lines: Vec<String>,
        highlighted: Vec<String>,
    },
    NoMatches,
}

impl PageView {
    pub fn build<S: AsRef<str>>(lines: &[S], term: &str) -> PageView {
        if term.is_empty() {
            let text = lines
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join("\n");
            return PageView::FullText { text };
        }

        let Some(pattern) = SearchPattern::compile(term) else {
            return PageView::NoMatches;
        };

        let matched = pattern.match_lines(lines);
        if matched.is_empty() {
            return PageView::NoMatches;
        }

        let highlighted = matched.iter().map(|l| pattern.highlight(l)).collect();
        PageView::Matches {
            count: matched.len(),
            lines: matched,
            highlighted,
        }
    }

    /// Highlighted lines joined with `<br>`, or the full text as-is.
    pub fn to_markup(&self) -> String {
        match self {
            PageView::FullText { text } => text.clone(),
            PageView::Matches { highlighted, .. } => highlighted.join("<br>"),
            PageView::NoMatches => String::new(),
        }
    }
}

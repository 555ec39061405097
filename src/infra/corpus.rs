// ============================================================
// Layer 6 — Corpus Retriever
// ============================================================
// An offline knowledge source read from a JSON file:
//
//   {
//     "pages": [
//       {
//         "title":   "Liberty Bell",
//         "summary": "The Liberty Bell is ...",
//         "content": "The Liberty Bell is ... (full article)",
//         "disambiguation": false
//       }
//     ]
//   }
//
// Search ranks pages by how many words of the search term also
// appear in the page title (case-insensitive). Ties keep file
// order; pages sharing no word with the term are not returned.
// A page flagged `disambiguation` fails to fetch as Ambiguous,
// the same way a real disambiguation page would.
//
// Reference: serde_json crate documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::document::DocumentView;
use crate::domain::traits::{DocumentRetriever, RetrievalError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusPage {
    pub title:   String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub disambiguation: bool,
}

impl CorpusPage {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title:          title.into(),
            summary:        summary.into(),
            content:        content.into(),
            disambiguation: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CorpusFile {
    pages: Vec<CorpusPage>,
}

pub struct CorpusRetriever {
    pages: Vec<CorpusPage>,
}

impl CorpusRetriever {
    pub fn from_pages(pages: Vec<CorpusPage>) -> Self {
        Self { pages }
    }

    /// Read a corpus JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read corpus '{}'", path.display()))?;
        let file: CorpusFile = serde_json::from_str(&json)
            .with_context(|| format!("Corpus '{}' is not valid JSON", path.display()))?;

        tracing::info!("Loaded {} corpus pages from '{}'", file.pages.len(), path.display());
        Ok(Self::from_pages(file.pages))
    }

    fn title_overlap(title: &str, term_words: &[String]) -> usize {
        let title_words: Vec<String> = title.split_whitespace().map(str::to_lowercase).collect();
        term_words.iter().filter(|w| title_words.contains(w)).count()
    }
}

impl DocumentRetriever for CorpusRetriever {
    fn search(&self, term: &str, limit: usize) -> Result<Vec<String>, RetrievalError> {
        let term_words: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();

        let mut scored: Vec<(usize, &CorpusPage)> = self
            .pages
            .iter()
            .map(|page| (Self::title_overlap(&page.title, &term_words), page))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable: equal scores keep file order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, page)| page.title.clone())
            .collect())
    }

    fn fetch(&self, title: &str, view: DocumentView) -> Result<String, RetrievalError> {
        let page = self
            .pages
            .iter()
            .find(|p| p.title == title)
            .ok_or_else(|| RetrievalError::PageMissing { title: title.to_string() })?;

        if page.disambiguation {
            return Err(RetrievalError::Ambiguous { title: title.to_string() });
        }

        Ok(match view {
            DocumentView::Summary => page.summary.clone(),
            DocumentView::Content => page.content.clone(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> CorpusRetriever {
        let mut mercury = CorpusPage::new("Mercury", "", "");
        mercury.disambiguation = true;
        CorpusRetriever::from_pages(vec![
            CorpusPage::new("Bell", "A bell is an instrument.", "A bell is an instrument. It rings."),
            CorpusPage::new("Liberty Bell", "The Liberty Bell is a symbol.", "The Liberty Bell is a symbol. It cracked."),
            mercury,
        ])
    }

    #[test]
    fn test_search_ranks_by_title_overlap() {
        let hits = corpus().search("The Liberty Bell", 5).unwrap();
        assert_eq!(hits, vec!["Liberty Bell", "Bell"]);
    }

    #[test]
    fn test_search_respects_limit_and_drops_unrelated() {
        assert_eq!(corpus().search("liberty bell", 1).unwrap(), vec!["Liberty Bell"]);
        assert!(corpus().search("quasar", 1).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_summary_or_content() {
        let c = corpus();
        assert_eq!(c.fetch("Bell", DocumentView::Summary).unwrap(), "A bell is an instrument.");
        assert_eq!(c.fetch("Bell", DocumentView::Content).unwrap(), "A bell is an instrument. It rings.");
    }

    #[test]
    fn test_fetch_errors() {
        let c = corpus();
        assert!(matches!(
            c.fetch("Mercury", DocumentView::Content),
            Err(RetrievalError::Ambiguous { .. })
        ));
        assert!(matches!(
            c.fetch("Pluto", DocumentView::Content),
            Err(RetrievalError::PageMissing { .. })
        ));
    }

    #[test]
    fn test_load_from_json_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(
            &path,
            r#"{ "pages": [ { "title": "Quasar", "content": "A quasar is bright." } ] }"#,
        ).unwrap();

        let c = CorpusRetriever::load(&path).unwrap();
        assert_eq!(c.search("a quasar", 1).unwrap(), vec!["Quasar"]);
        assert_eq!(c.fetch("Quasar", DocumentView::Summary).unwrap(), "");
    }
}

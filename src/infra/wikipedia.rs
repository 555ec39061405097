// ============================================================
// Layer 6 — Wikipedia Retriever
// ============================================================
// Talks to the MediaWiki Action API with a blocking reqwest
// client. Two calls:
//
//   search → action=query&list=search&srsearch=<term>
//            returns ranked page titles
//
//   fetch  → action=query&prop=extracts|pageprops
//            &explaintext=1 [&exintro=1 for the summary]
//            &ppprop=disambiguation&redirects=1
//            returns plain article text
//
// A page whose pageprops carry "disambiguation" is reported as
// RetrievalError::Ambiguous so the pipeline can skip it.
//
// Calls block the session; no timeout beyond the client's
// default and no retries.
//
// Reference: MediaWiki Action API (list=search, prop=extracts)
//            reqwest::blocking documentation

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::document::DocumentView;
use crate::domain::traits::{DocumentRetriever, RetrievalError};

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

// ─── MediaWiki response types (formatversion=2) ───────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

// ─── WikipediaRetriever ───────────────────────────────────────────────────────

pub struct WikipediaRetriever {
    client:   Client,
    endpoint: String,
}

impl WikipediaRetriever {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Cannot build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn get<T: for<'de> Deserialize<'de>>(&self, params: &[(&str, &str)]) -> Result<T, RetrievalError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;

        response
            .json::<T>()
            .map_err(|e| RetrievalError::Malformed(e.to_string()))
    }
}

impl DocumentRetriever for WikipediaRetriever {
    fn search(&self, term: &str, limit: usize) -> Result<Vec<String>, RetrievalError> {
        let limit = limit.to_string();
        let response: SearchResponse = self.get(&[
            ("list", "search"),
            ("srsearch", term),
            ("srlimit", &limit),
        ])?;

        let titles: Vec<String> = response
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();

        tracing::debug!("Search '{}' → {:?}", term, titles);
        Ok(titles)
    }

    fn fetch(&self, title: &str, view: DocumentView) -> Result<String, RetrievalError> {
        let mut params = vec![
            ("prop", "extracts|pageprops"),
            ("ppprop", "disambiguation"),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("titles", title),
        ];
        if view.wants_summary() {
            params.push(("exintro", "1"));
        }

        let response: ExtractResponse = self.get(&params)?;
        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| RetrievalError::Malformed(format!("no page data for '{title}'")))?;

        if page.missing {
            return Err(RetrievalError::PageMissing { title: title.to_string() });
        }
        if page.pageprops.contains_key("disambiguation") {
            return Err(RetrievalError::Ambiguous { title: title.to_string() });
        }

        Ok(page.extract.unwrap_or_default())
    }
}

// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Implementations of the domain traits that touch the outside
// world:
//
//   wikipedia.rs — DocumentRetriever over the MediaWiki API
//                  (blocking reqwest client, serde_json)
//
//   corpus.rs    — DocumentRetriever over a local JSON corpus,
//                  for offline sessions and tests
//
//   trace_log.rs — LogSink writing the session trace file
//
// Nothing above this layer knows which retriever is in use;
// the CLI picks one at startup.
//
// Reference: Rust Book §7 (Modules)

/// Live Wikipedia retriever
pub mod wikipedia;

/// Offline JSON corpus retriever
pub mod corpus;

/// Session trace log file
pub mod trace_log;

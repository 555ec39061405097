// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that describe what the system
// talks about: questions, documents, answers, and the two
// collaborators every question needs (a retriever and a
// trace log).
//
// Rules for this layer:
//   - NO HTTP, NO file I/O
//   - NO regular expressions or text mining
//   - Only structs, enums, and traits
//
// The data layer (4) and infra layer (6) implement or consume
// these types; the application layer (2) wires them together.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A user question: raw text, tokens, and its classified type
pub mod question;

// A fetched reference document split into sentences
pub mod document;

// The final answer and the outcome of one question
pub mod answer;

// Collaborator traits (retriever, log sink, answerer)
pub mod traits;

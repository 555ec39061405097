// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Turns one line of user input into an Outcome by driving the
// data-layer components against a DocumentRetriever.
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No HTTP or file access (that's Layer 6)
//   - Everything that traces gets the session's LogSink
//
//   ask_use_case.rs — classify, dispatch, wrap the result
//   reformulator/   — per-type search terms, rule tables and
//                     the relaxation loop
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The question-answering workflow
pub mod ask_use_case;

// WHEN / WHERE / WHAT / WHO reformulation
pub mod reformulator;

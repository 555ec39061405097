// ============================================================
// Layer 2 — Reformulation Rule Tables
// ============================================================
// The ordered pattern templates each question type searches
// with. Placeholders are described in data/rules.rs:
//   {suffix} {head} {last} {aux}
//
// Each table is instantiated once per relaxation step; rules
// from earlier steps stay in the list, so a later step searches
// with the old rules plus the new, shorter ones.
//
// Reference: regex crate documentation (syntax)

use crate::data::rules::RuleTemplate;

/// WHEN is/was: "<subject> ... is|was[on] ..."
pub const WHEN_STATE: &[RuleTemplate] = &[
    RuleTemplate::new("subject then is/was", r"{suffix}.+\s(is|was)(on)?\s.+"),
];

/// WHEN was … <verb>: "<subject> [was] <verb> [in|on|from] ..."
pub const WHEN_EVENT: &[RuleTemplate] = &[
    RuleTemplate::new("subject was verb", r"{head}\s(was)?(\s)?{last}(\s)?(in|on|from)?\s?.+"),
    RuleTemplate::new("whole subject was", r"{suffix}\swas\s.+"),
];

/// WHEN did … <verb>: the verb after the subject, or the verb alone
pub const WHEN_DID: &[RuleTemplate] = &[
    RuleTemplate::new("subject then verb", r"{head}\s({last}).+"),
    RuleTemplate::new("verb alone", r"({last}).+"),
];

/// WHERE is/was: "<subject>|it ... is|was ... in|located|at|near ..."
pub const WHERE_LOCATION: &[RuleTemplate] = &[
    RuleTemplate::new(
        "subject located",
        r"({suffix}|it)\s(.+\s)?(is|was)\s.+\s(in|located|at|near)\s.+",
    ),
];

/// Trailing location phrase kept from a WHERE match.
pub const LOCATION_PHRASE: &str = r"\s(in|located|at|near)\s.+";

/// WHAT is/was: "<subject> is|was ..."
pub const WHAT_DEFINITION: RuleTemplate =
    RuleTemplate::new("definition", r"({suffix}\s(is|was)\s).+");

/// WHO is/was: "<subject> ... is|was ..."
pub const WHO_IDENTITY: &[RuleTemplate] = &[
    RuleTemplate::new("subject is/was", r"{suffix}.+\s(is|was)\s.+"),
];

/// WHO <verb> …: two or three words acting before the verb
pub const WHO_AGENT: &[RuleTemplate] = &[
    RuleTemplate::new("agent before verb", r"\S+\s\S+\s(\S+)?\s{aux}\s{suffix}"),
];

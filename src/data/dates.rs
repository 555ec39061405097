// ============================================================
// Layer 4 — Date Extractor
// ============================================================
// Pulls a date substring out of each candidate sentence.
//
// Six rules, tried in priority order; the first rule that
// matches a candidate wins for that candidate:
//
//   1. day month [,] year      "4 July 1776"
//   2. month day [,] year      "July 4, 1776"
//   3. day month               "4 July"
//   4. month day               "July 4"
//   5. in/on … weekday|month … "on Monday, the first of May ..."
//   6. in YEAR                 "in 1969"
//
// A single leading "in"/"on" is stripped from the matched text.
// Candidates without any date are dropped; the rest keep their
// input order.
//
// Reference: regex crate documentation

use anyhow::Result;
use regex::{Regex, RegexBuilder};

use crate::domain::traits::LogSink;

const MONTHS: &str = r"\b(january|jan\.|february|feb\.|march|mar\.|april|apr\.|may|june|jun\.|july|jul\.|august|aug\.|september|sept\.|october|oct\.|november|nov\.|december|dec\.)";
const WEEKDAYS: &str = r"\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)";

/// One date format.
#[derive(Debug, Clone)]
pub struct DateRule {
    pub name: &'static str,
    regex:    Regex,
}

impl DateRule {
    fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { name, regex })
    }
}

pub struct DateExtractor {
    rules: Vec<DateRule>,
}

impl DateExtractor {
    /// Compile the six date rules in priority order.
    pub fn new() -> Result<Self> {
        let rules = vec![
            DateRule::new("day-month-year", &format!(r"\d(\d)?\s{MONTHS}(,)?\s\d+"))?,
            DateRule::new("month-day-year", &format!(r"{MONTHS}\s\d(\d)?(,)?\s\d+"))?,
            DateRule::new("day-month",      &format!(r"\d(\d)?\s{MONTHS}"))?,
            DateRule::new("month-day",      &format!(r"{MONTHS}\s\d(\d)?"))?,
            DateRule::new("preposition-weekday-or-month", &format!(r"\s([io]n)\s.+({WEEKDAYS}|{MONTHS}).+"))?,
            DateRule::new("in-year",        r"\bin\s\d+")?,
        ];
        Ok(Self { rules })
    }

    /// The date in one candidate, if any rule matches.
    pub fn extract_one(&self, candidate: &str) -> Option<String> {
        let (rule, m) = self
            .rules
            .iter()
            .find_map(|rule| rule.regex.find(candidate).map(|m| (rule, m)))?;
        tracing::debug!("Date rule '{}' matched '{}'", rule.name, m.as_str());
        Some(strip_preposition(m.as_str()))
    }

    /// Dates from every candidate that has one, in candidate order.
    pub fn extract(&self, candidates: &[String], log: &dyn LogSink) -> Vec<String> {
        log.record("Searching matches for dates...");

        let mut dates = Vec::new();
        for candidate in candidates {
            if let Some(date) = self.extract_one(candidate) {
                log.record(&format!("Found date: {date}"));
                dates.push(date);
            }
        }
        dates
    }
}

/// Drop one leading "in"/"on" word (case-insensitive).
fn strip_preposition(text: &str) -> String {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((first, rest))
            if first.eq_ignore_ascii_case("in") || first.eq_ignore_ascii_case("on") =>
        {
            rest.trim_start().to_string()
        }
        _ => text.to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::trace_log::MemoryTrace;

    fn extractor() -> DateExtractor {
        DateExtractor::new().unwrap()
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(
            extractor().extract_one("signed on July 4, 1776 by the delegates"),
            Some("July 4, 1776".to_string())
        );
    }

    #[test]
    fn test_in_year_strips_preposition() {
        assert_eq!(extractor().extract_one("It happened in 1969"), Some("1969".to_string()));
    }

    #[test]
    fn test_day_month_year_has_priority() {
        assert_eq!(
            extractor().extract_one("He was born 19 August 1946 in Hope."),
            Some("19 August 1946".to_string())
        );
    }

    #[test]
    fn test_preposition_weekday_rule() {
        assert_eq!(
            extractor().extract_one("The market crashed on Black Tuesday after weeks of panic"),
            Some("Black Tuesday after weeks of panic".to_string())
        );
    }

    #[test]
    fn test_no_false_months_inside_words() {
        assert_eq!(extractor().extract_one("The mayor 12 times refused."), None);
        assert_eq!(extractor().extract_one("It is done within 5 days"), None);
    }

    #[test]
    fn test_drops_undated_and_preserves_order() {
        let log = MemoryTrace::new();
        let candidates = vec![
            "Apollo 11 landed on July 20, 1969.".to_string(),
            "The crew returned safely.".to_string(),
            "Armstrong was born in 1930".to_string(),
        ];
        let dates = extractor().extract(&candidates, &log);
        assert_eq!(dates, vec!["July 20, 1969", "1930"]);
        assert!(log.lines().contains(&"Found date: 1930".to_string()));
    }
}

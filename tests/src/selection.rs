//! Selection matcher for the memory provider.
//!
//! Supports conjunctions of equality clauses:
//! `name = ?`, `kind = 'work'`, `_id = 42`, joined by `AND`.
//! Placeholders bind selection arguments left to right.

use std::sync::OnceLock;

use batchop_core::Values;
use batchop_provider::{ProviderError, ProviderResult};
use regex_lite::Regex;

/// One leading `column = operand` clause, followed by either the end of the
/// text or an `AND` separator (group 3).
fn clause_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(\?|'[^']*'|-?[0-9]+)\s*(?:$|((?i:AND))\s+)",
        )
        .expect("valid clause pattern")
    })
}

/// A parsed, argument-bound selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    clauses: Vec<(String, String)>,
}

impl Selection {
    /// Parse `selection` and bind `args` to its placeholders.
    ///
    /// A missing or blank selection matches every row.
    pub fn parse(selection: Option<&str>, args: &[String]) -> ProviderResult<Self> {
        let text = selection.map(str::trim).unwrap_or("");
        if text.is_empty() {
            if !args.is_empty() {
                return Err(ProviderError::invalid_selection(format!(
                    "{} arguments supplied without a selection",
                    args.len()
                )));
            }
            return Ok(Self {
                clauses: Vec::new(),
            });
        }

        let mut remaining = args.iter();
        let mut clauses = Vec::new();
        let mut rest = text;
        loop {
            let caps = clause_pattern().captures(rest).ok_or_else(|| {
                ProviderError::invalid_selection(format!("unsupported clause '{}'", rest.trim()))
            })?;
            let column = caps[1].to_string();
            let operand = &caps[2];
            let expected = if operand == "?" {
                remaining
                    .next()
                    .cloned()
                    .ok_or_else(|| ProviderError::invalid_selection("not enough arguments"))?
            } else if let Some(quoted) = operand.strip_prefix('\'') {
                quoted.trim_end_matches('\'').to_string()
            } else {
                operand.to_string()
            };
            clauses.push((column, expected));

            if caps.get(3).is_none() {
                break;
            }
            rest = &rest[caps[0].len()..];
        }

        let unused = remaining.count();
        if unused > 0 {
            return Err(ProviderError::invalid_selection(format!(
                "{} unused arguments",
                unused
            )));
        }
        Ok(Self { clauses })
    }

    /// Check whether `row` satisfies every clause.
    pub fn matches(&self, row: &Values) -> bool {
        self.clauses.iter().all(|(column, expected)| {
            row.get(column)
                .map(|value| value.matches_arg(expected))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batchop_core::values;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_matches_all() {
        let selection = Selection::parse(None, &[]).unwrap();

        assert_eq!(selection, Selection::parse(Some("   "), &[]).unwrap());
        assert!(selection.matches(&values! { "a" => 1 }));
    }

    #[test]
    fn test_placeholders_bind_in_order() {
        // GIVEN
        let selection =
            Selection::parse(Some("owner = ? and kind=?"), &args(&["7", "work"])).unwrap();

        // THEN
        assert!(selection.matches(&values! { "owner" => 7, "kind" => "work" }));
        assert!(!selection.matches(&values! { "owner" => 7, "kind" => "home" }));
        assert!(!selection.matches(&values! { "kind" => "work" }));
    }

    #[test]
    fn test_literals() {
        let selection = Selection::parse(Some("kind = 'work' AND _id = 3"), &[]).unwrap();

        assert!(selection.matches(&values! { "kind" => "work", "_id" => 3 }));
    }

    #[test]
    fn test_literal_may_contain_and() {
        // GIVEN
        let selection =
            Selection::parse(Some("name = 'tom and jerry' AND kind = ?"), &args(&["cat"])).unwrap();

        // THEN
        assert!(selection.matches(&values! { "name" => "tom and jerry", "kind" => "cat" }));
        assert!(!selection.matches(&values! { "name" => "tom", "kind" => "cat" }));
    }

    #[test]
    fn test_dangling_and_rejected() {
        assert!(Selection::parse(Some("a = 1 AND"), &[]).is_err());
        assert!(Selection::parse(Some("a = 1 AND "), &[]).is_err());
        assert!(Selection::parse(Some("a = 1 b = 2"), &[]).is_err());
    }

    #[test]
    fn test_argument_count_must_match() {
        assert!(Selection::parse(Some("a = ?"), &[]).is_err());
        assert!(Selection::parse(Some("a = ?"), &args(&["1", "2"])).is_err());
        assert!(Selection::parse(None, &args(&["1"])).is_err());
    }

    #[test]
    fn test_unsupported_clause() {
        let err = Selection::parse(Some("a > 1"), &[]).unwrap_err();

        assert!(matches!(err, ProviderError::InvalidSelection { .. }));
    }
}

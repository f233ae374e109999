//! Leaf match predicates.
//!
//! # Responsibilities
//! - Match a method name against an exact/prefix/suffix pattern
//! - Match one positional parameter value (exact or numeric range)
//!
//! # Design Decisions
//! - Closed enums, built once from validated config
//! - No regex to guarantee O(n) matching in the hot path
//! - A parameter value that fails integer parsing under a range
//!   predicate is a match failure, not an error

use crate::config::schema::{ParamMatchConfig, StringMatchConfig};

/// Pattern matcher over a method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodNameMatcher {
    /// Matches any method name (empty pattern config).
    Any,
    Exact(String),
    Prefix(String),
    Suffix(String),
}

impl MethodNameMatcher {
    /// Build from a validated pattern config (at most one variant set).
    pub fn new(config: &StringMatchConfig) -> Self {
        if let Some(exact) = &config.exact {
            MethodNameMatcher::Exact(exact.clone())
        } else if let Some(prefix) = &config.prefix {
            MethodNameMatcher::Prefix(prefix.clone())
        } else if let Some(suffix) = &config.suffix {
            MethodNameMatcher::Suffix(suffix.clone())
        } else {
            MethodNameMatcher::Any
        }
    }

    /// Returns true if the method name matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            MethodNameMatcher::Any => true,
            MethodNameMatcher::Exact(expected) => name == expected,
            MethodNameMatcher::Prefix(prefix) => name.starts_with(prefix),
            MethodNameMatcher::Suffix(suffix) => name.ends_with(suffix),
        }
    }
}

/// Predicate over one positional parameter of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMatcher {
    /// 0-based index into the call's parameter list.
    pub index: usize,
    kind: ParameterMatchKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParameterMatchKind {
    /// Exact string value; empty value matches any present parameter.
    Exact(String),
    /// Half-open numeric range [start, end).
    Range { start: i64, end: i64 },
}

impl ParameterMatcher {
    /// Build from a validated predicate config (exactly one of
    /// exact/range set).
    pub fn new(config: &ParamMatchConfig) -> Self {
        let kind = if let Some(exact) = &config.exact {
            ParameterMatchKind::Exact(exact.clone())
        } else if let Some(range) = config.range {
            ParameterMatchKind::Range {
                start: range.start,
                end: range.end,
            }
        } else {
            // Validation rejects this shape; mirror the wildcard fallback
            // of the exact kind rather than panic.
            ParameterMatchKind::Exact(String::new())
        };
        Self {
            index: config.index as usize,
            kind,
        }
    }

    /// Returns true if the request value satisfies this predicate.
    pub fn matches(&self, value: &str) -> bool {
        match &self.kind {
            ParameterMatchKind::Exact(expected) => expected.is_empty() || value == expected,
            ParameterMatchKind::Range { start, end } => match value.parse::<i64>() {
                Ok(parsed) => *start <= parsed && parsed < *end,
                Err(_) => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RangeMatchConfig;

    #[test]
    fn test_method_name_exact() {
        let matcher = MethodNameMatcher::new(&StringMatchConfig {
            exact: Some("hello".to_string()),
            ..Default::default()
        });
        assert!(matcher.matches("hello"));
        assert!(!matcher.matches("hello2"));
        assert!(!matcher.matches("Hello"));
    }

    #[test]
    fn test_method_name_prefix_suffix() {
        let prefix = MethodNameMatcher::new(&StringMatchConfig {
            prefix: Some("get".to_string()),
            ..Default::default()
        });
        assert!(prefix.matches("getUser"));
        assert!(!prefix.matches("listUsers"));

        let suffix = MethodNameMatcher::new(&StringMatchConfig {
            suffix: Some("Async".to_string()),
            ..Default::default()
        });
        assert!(suffix.matches("fetchAsync"));
        assert!(!suffix.matches("fetch"));
    }

    #[test]
    fn test_method_name_wildcard() {
        let matcher = MethodNameMatcher::new(&StringMatchConfig::default());
        assert_eq!(matcher, MethodNameMatcher::Any);
        assert!(matcher.matches("anything"));
        assert!(matcher.matches(""));
    }

    #[test]
    fn test_parameter_exact() {
        let matcher = ParameterMatcher::new(&ParamMatchConfig {
            index: 0,
            exact: Some("user-1".to_string()),
            range: None,
        });
        assert!(matcher.matches("user-1"));
        assert!(!matcher.matches("user-2"));
    }

    #[test]
    fn test_parameter_exact_empty_is_wildcard() {
        let matcher = ParameterMatcher::new(&ParamMatchConfig {
            index: 0,
            exact: Some(String::new()),
            range: None,
        });
        assert!(matcher.matches("anything"));
    }

    #[test]
    fn test_parameter_range_half_open() {
        let matcher = ParameterMatcher::new(&ParamMatchConfig {
            index: 0,
            exact: None,
            range: Some(RangeMatchConfig { start: 10, end: 20 }),
        });
        assert!(matcher.matches("10"));
        assert!(matcher.matches("19"));
        assert!(!matcher.matches("20"));
        assert!(!matcher.matches("9"));
        assert!(!matcher.matches("-5"));
    }

    #[test]
    fn test_parameter_range_unparsable_fails() {
        let matcher = ParameterMatcher::new(&ParamMatchConfig {
            index: 0,
            exact: None,
            range: Some(RangeMatchConfig { start: 10, end: 20 }),
        });
        assert!(!matcher.matches("fifteen"));
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("12.5"));
    }
}

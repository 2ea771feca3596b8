//! Wildcard matching behind the `LIKE` operator.

use regex::bytes::Regex;

/// Decides whether a subject matches a `LIKE` pattern.
pub trait WildcardMatcher: Send + Sync {
    /// Returns true when `subject` matches `pattern`.
    fn matches(&self, pattern: &[u8], subject: &[u8]) -> bool;
}

/// `LIKE` matcher where `%` matches any run of bytes and `_` exactly one.
///
/// Every other byte matches itself. Patterns are anchored at both ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct LikeMatcher;

impl LikeMatcher {
    fn to_regex(pattern: &[u8]) -> String {
        let mut regex = String::with_capacity(pattern.len() * 2 + 8);
        regex.push_str("(?s-u)^");
        for &byte in pattern {
            match byte {
                b'%' => regex.push_str(".*"),
                b'_' => regex.push('.'),
                byte if byte.is_ascii_alphanumeric() => regex.push(char::from(byte)),
                byte => regex.push_str(&format!("\\x{byte:02x}")),
            }
        }
        regex.push('$');
        regex
    }
}

impl WildcardMatcher for LikeMatcher {
    fn matches(&self, pattern: &[u8], subject: &[u8]) -> bool {
        match Regex::new(&Self::to_regex(pattern)) {
            Ok(regex) => regex.is_match(subject),
            Err(_) => false,
        }
    }
}

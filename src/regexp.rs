//! Regular-expression matching with a process-wide pattern cache.

use crate::errors::{UsageError, UsageResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Compiled patterns keyed by their source text.
static CACHE: Lazy<Mutex<HashMap<String, Regex>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Compiles `pattern`, reusing an earlier compilation of the same text.
pub fn compile(pattern: &str) -> UsageResult<Regex> {
    let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }

    let re = Regex::new(pattern).map_err(|source| UsageError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    cache.insert(pattern.to_string(), re.clone());
    Ok(re)
}

pub fn is_match(text: &str, re: &Regex) -> bool {
    re.is_match(text)
}

/// Matches `text` against a pattern given as source text.
pub fn is_match_str(text: &str, pattern: &str) -> UsageResult<bool> {
    Ok(is_match(text, &compile(pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_match() {
        let re = Regex::new(r"^[a-z]+\[[0-9]+\]$").unwrap();
        assert!(is_match("adam[23]", &re));
        assert!(!is_match("adam[23", &re));
    }

    #[test]
    fn test_is_match_str() {
        assert!(is_match_str("Hello World", "Wor").unwrap());
        assert!(is_match_str("Hello World", r"^Hello\s").unwrap());
        assert!(!is_match_str("Hello World", "^World").unwrap());
    }

    #[test]
    fn test_compile_is_cached() {
        let first = compile("cached-[0-9]+").unwrap();
        let second = compile("cached-[0-9]+").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(CACHE
            .lock()
            .unwrap()
            .contains_key("cached-[0-9]+"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = is_match_str("text", "(unclosed").unwrap_err();
        assert!(matches!(err, UsageError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert!(err.to_string().starts_with("invalid pattern `(unclosed`"));
    }
}

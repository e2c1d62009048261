//! Regex word tokenizer with n-gram expansion

use coursepredict_core::Result;
use regex::Regex;
use std::collections::HashSet;

/// Default token pattern: runs of two or more word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Splits text into word tokens and joins them into n-grams
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    lowercase: bool,
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Create a new tokenizer.
    ///
    /// `token_pattern` may contain at most one capture group; when present,
    /// the group is the token instead of the whole match.
    pub fn new(
        token_pattern: &str,
        lowercase: bool,
        ngram_range: (usize, usize),
        stop_words: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let pattern = Regex::new(token_pattern).map_err(|e| {
            coursepredict_core::Error::artifact(format!("Failed to compile token pattern: {}", e))
        })?;

        // captures_len counts the implicit whole-match group
        if pattern.captures_len() > 2 {
            return Err(coursepredict_core::Error::artifact(format!(
                "token pattern '{}' has more than one capture group",
                token_pattern
            )));
        }

        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(coursepredict_core::Error::artifact(format!(
                "invalid ngram range ({}, {})",
                min_n, max_n
            )));
        }

        Ok(Self {
            pattern,
            lowercase,
            ngram_range,
            stop_words: stop_words.into_iter().collect(),
        })
    }

    /// Split text into single tokens, stop words removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let grouped = self.pattern.captures_len() == 2;

        self.pattern
            .captures_iter(&text)
            .filter_map(|caps| {
                let m = if grouped { caps.get(1) } else { caps.get(0) };
                m.map(|m| m.as_str().to_string())
            })
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    /// Tokenize and expand into n-grams, shortest first
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let (min_n, max_n) = self.ngram_range;

        if max_n == 1 {
            return tokens;
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"),
            lowercase: true,
            ngram_range: (1, 1),
            stop_words: HashSet::new(),
        }
    }
}

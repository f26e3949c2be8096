// src/input.rs
use regex::Regex;
use std::collections::HashSet;

/// Turns raw user text and uploaded file content into the clean address
/// lists the pipeline expects as its input precondition.
pub struct EmailInputParser {
    separator_regex: Regex,
    address_regex: Regex,
}

impl EmailInputParser {
    pub fn new() -> Self {
        Self {
            separator_regex: Regex::new(r"[\n,;]+").unwrap(),
            address_regex: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
        }
    }

    /// Splits pasted text on newlines, commas, or semicolons, trimming
    /// each piece and dropping empties.
    pub fn split_input(&self, text: &str) -> Vec<String> {
        self.separator_regex
            .split(text)
            .map(|piece| piece.trim())
            .filter(|piece| !piece.is_empty())
            .map(|piece| piece.to_string())
            .collect()
    }

    /// Pulls candidate addresses out of arbitrary file content (CSV or
    /// TXT alike), de-duplicated in first-seen order.
    pub fn extract_emails(&self, content: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        self.address_regex
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .filter(|email| seen.insert(email.clone()))
            .collect()
    }
}

//! Text canonicalization applied before matching.

use std::{fmt, ops::Deref};

/// Message text after trimming, case-folding and whitespace collapsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedMessage {
    text: String,
}

impl NormalizedMessage {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Deref for NormalizedMessage {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl fmt::Display for NormalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lower-case `raw` and collapse every whitespace run (including newlines) into a single space.
///
/// Leading and trailing whitespace is dropped, so all-whitespace input yields the empty string.
pub fn normalize(raw: &str) -> NormalizedMessage {
    let text = raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ");

    NormalizedMessage { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  hola   mundo\n\n").as_str(), "hola mundo");
        assert_eq!(normalize("que\ttal\r\namigo").as_str(), "que tal amigo");
    }

    #[test]
    fn test_case_folds() {
        assert_eq!(normalize("HOLA ¿Cómo ESTÁS?").as_str(), "hola ¿cómo estás?");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize(" \n\t ").as_str(), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["  Hola   Mundo ", "\n\nQUE   tal\t", "ÁRBOL  ñandú", "", "   ", "ya-normalizado"];

        for sample in samples {
            let once = normalize(sample);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalizing {sample:?} twice changed it");
        }
    }
}

//! Trigger classification of normalized message text.
//!
//! Greetings are matched per whole word token because the greeting words are short and
//! would otherwise fire inside unrelated words ("chola" is not "hola"). The remaining
//! categories are multi-word phrases and use plain substring containment.

use std::fmt;

/// Greeting vocabulary, matched against whole word tokens.
pub const GREETINGS: &[&str] = &["hola", "gola", "ola", "hi", "oa"];

/// Status questions, matched as substrings.
pub const STATUS_QUESTIONS: &[&str] = &["¿como estás?", "como tas?", "como andas", "que tal", "como estas"];

/// Status acknowledgments, matched as substrings.
pub const ACKNOWLEDGMENTS: &[&str] = &["ando bien", "chill", "fino", "piola"];

/// Compliments, matched as substrings.
pub const COMPLIMENTS: &[&str] = &["que educado"];

/// The kind of incidental message the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerCategory {
    Greeting,
    StatusQuestion,
    Acknowledgment,
    Compliment,
}

impl fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerCategory::Greeting => "greeting",
            TriggerCategory::StatusQuestion => "status_question",
            TriggerCategory::Acknowledgment => "acknowledgment",
            TriggerCategory::Compliment => "compliment",
        };

        f.write_str(name)
    }
}

/// Split `text` into maximal runs of alphanumeric or underscore characters.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_')).filter(|token| !token.is_empty())
}

/// Classify normalized text, checking greeting, status question, acknowledgment and
/// compliment in that order. The first match wins.
pub fn classify(text: &str) -> Option<TriggerCategory> {
    if tokens(text).any(|token| GREETINGS.contains(&token)) {
        return Some(TriggerCategory::Greeting);
    }

    let contains_any = |phrases: &[&str]| phrases.iter().any(|phrase| text.contains(phrase));

    if contains_any(STATUS_QUESTIONS) {
        Some(TriggerCategory::StatusQuestion)
    } else if contains_any(ACKNOWLEDGMENTS) {
        Some(TriggerCategory::Acknowledgment)
    } else if contains_any(COMPLIMENTS) {
        Some(TriggerCategory::Compliment)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let found: Vec<_> = tokens("¡hola, que_tal! 42veces").collect();

        assert_eq!(found, vec!["hola", "que_tal", "42veces"]);
    }

    #[test]
    fn test_greeting_matches_whole_tokens() {
        assert_eq!(classify("hola a todos"), Some(TriggerCategory::Greeting));
        assert_eq!(classify("¡hola!"), Some(TriggerCategory::Greeting));
        assert_eq!(classify("ola"), Some(TriggerCategory::Greeting));
        assert_eq!(classify("hi there"), Some(TriggerCategory::Greeting));
        assert_eq!(classify("oa, gola"), Some(TriggerCategory::Greeting));
    }

    #[test]
    fn test_greeting_ignores_embedded_words() {
        assert_eq!(classify("chola"), None);
        assert_eq!(classify("this is history"), None);
        assert_eq!(classify("holanda"), None);
        assert_eq!(classify("hola_mundo"), None);
    }

    #[test]
    fn test_status_question() {
        assert_eq!(classify("oye, como andas hermano"), Some(TriggerCategory::StatusQuestion));
        assert_eq!(classify("¿como estás?"), Some(TriggerCategory::StatusQuestion));
        assert_eq!(classify("y vos como tas?"), Some(TriggerCategory::StatusQuestion));
        assert_eq!(classify("que tal el dia"), Some(TriggerCategory::StatusQuestion));
        assert_eq!(classify("como estas"), Some(TriggerCategory::StatusQuestion));
    }

    #[test]
    fn test_acknowledgment() {
        assert_eq!(classify("ando bien gracias"), Some(TriggerCategory::Acknowledgment));
        assert_eq!(classify("todo piola"), Some(TriggerCategory::Acknowledgment));
        assert_eq!(classify("re chill"), Some(TriggerCategory::Acknowledgment));
        // Phrase matching is substring based.
        assert_eq!(classify("un chiller"), Some(TriggerCategory::Acknowledgment));
    }

    #[test]
    fn test_compliment() {
        assert_eq!(classify("que educado el bot"), Some(TriggerCategory::Compliment));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(classify("hola, que tal"), Some(TriggerCategory::Greeting));
        assert_eq!(classify("que tal, ando bien"), Some(TriggerCategory::StatusQuestion));
        assert_eq!(classify("ando bien, que educado"), Some(TriggerCategory::Acknowledgment));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("!crypto bitcoin"), None);
        assert_eq!(classify("buenas noches"), None);
    }
}

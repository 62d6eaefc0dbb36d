use std::sync::OnceLock;

use regex::Regex;

use crate::ranking::stop_words::StopWords;

/// Two or more Unicode word characters between word boundaries.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// Lowercases `text`, splits it into terms and drops stop words.
/// Duplicates are kept: the caller counts them as term frequency.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|term| !stop_words.contains(term))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        let terms = tokenize("Python, JAVA; cloud-security", &StopWords::None);
        assert_eq!(terms, vec!["python", "java", "cloud", "security"]);
    }

    #[test]
    fn test_single_character_tokens_dropped() {
        let terms = tokenize("C# and C++ or R", &StopWords::None);
        assert_eq!(terms, vec!["and", "or"]);
    }

    #[test]
    fn test_stop_words_removed() {
        let terms = tokenize("The developer with experience", &StopWords::English);
        assert_eq!(terms, vec!["developer", "experience"]);
    }

    #[test]
    fn test_accented_words_stay_whole() {
        let terms = tokenize("Informáticos en la nube", &StopWords::None);
        assert_eq!(terms, vec!["informáticos", "en", "la", "nube"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let terms = tokenize("rust rust go", &StopWords::None);
        assert_eq!(terms, vec!["rust", "rust", "go"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", &StopWords::English).is_empty());
        assert!(tokenize("  \n\t ", &StopWords::English).is_empty());
    }
}

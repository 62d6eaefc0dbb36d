//! Stop-word sets removed from documents before vectorization.
//!
//! The set is part of the service configuration (`STOP_WORDS`). `English` is the
//! default and matches the list shipped with scikit-learn's `TfidfVectorizer`.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout", "thru",
    "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

const SPANISH: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "eran", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estaba", "estas",
    "este", "esto", "estos", "fue", "fueron", "ha", "han", "hasta", "hay", "la", "las", "le",
    "les", "lo", "los", "mas", "me", "mi", "mis", "mucho", "muy", "más", "nada", "ni", "no",
    "nos", "nosotros", "o", "otra", "otras", "otro", "otros", "para", "pero", "poco", "por",
    "porque", "que", "quien", "qué", "se", "sea", "ser", "si", "sin", "sobre", "son", "su",
    "sus", "sí", "también", "tanto", "te", "tiene", "tienen", "todo", "todos", "tu", "tus", "un",
    "una", "uno", "unos", "usted", "y", "ya", "yo", "él",
];

fn english_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH.iter().copied().collect())
}

fn spanish_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| SPANISH.iter().copied().collect())
}

#[derive(Debug, Error)]
#[error("Unknown stop-word setting '{0}' (expected english, spanish, none or custom:<words>)")]
pub struct UnknownStopWords(pub String);

/// Terms dropped by the tokenizer. Custom terms are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopWords {
    #[default]
    English,
    Spanish,
    None,
    Custom(BTreeSet<String>),
}

impl StopWords {
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords::Custom(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// `term` is expected to be lowercased already.
    pub fn contains(&self, term: &str) -> bool {
        match self {
            StopWords::English => english_set().contains(term),
            StopWords::Spanish => spanish_set().contains(term),
            StopWords::None => false,
            StopWords::Custom(words) => words.contains(term),
        }
    }
}

impl FromStr for StopWords {
    type Err = UnknownStopWords;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();
        if let Some(list) = lowered.strip_prefix("custom:") {
            return Ok(StopWords::custom(list.split(',')));
        }
        match lowered.as_str() {
            // An empty setting (`STOP_WORDS=`) keeps the default list.
            "" => Ok(StopWords::default()),
            "english" | "en" => Ok(StopWords::English),
            "spanish" | "es" => Ok(StopWords::Spanish),
            "none" => Ok(StopWords::None),
            _ => Err(UnknownStopWords(trimmed.to_string())),
        }
    }
}

impl fmt::Display for StopWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopWords::English => f.write_str("english"),
            StopWords::Spanish => f.write_str("spanish"),
            StopWords::None => f.write_str("none"),
            StopWords::Custom(words) => write!(f, "custom ({} terms)", words.len()),
        }
    }
}

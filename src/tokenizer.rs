use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::lang::Language;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
}

/// Tokenize text into indexable terms: NFKC normalization, lowercasing, word
/// extraction, stemming, then dropping terms shorter than three characters or
/// present in the locale's stopword set. Order is preserved and duplicates
/// are kept.
pub fn tokenize(text: &str, lang: &Language) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let mut terms = Vec::new();
    for mat in WORD.find_iter(&normalized) {
        let stem = lang.stem(mat.as_str());
        if stem.chars().count() < 3 || lang.is_stopword(&stem) {
            continue;
        }
        terms.push(stem);
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Locale;

    #[test]
    fn basic_tokenize() {
        let lang = Language::new(Locale::En);
        let terms = tokenize("Running, runner's run!", &lang);
        assert!(terms.iter().any(|t| t == "run"));
    }

    #[test]
    fn normalizes_unicode() {
        let lang = Language::new(Locale::En);
        // NFKC folds compatibility forms but keeps accents: café stays café.
        let terms = tokenize("The cafe\u{0301}'s menu", &lang);
        assert!(terms.iter().any(|t| t == "café"));
        assert!(terms.iter().any(|t| t == "menu"));
    }

    #[test]
    fn drops_short_terms_and_stopwords() {
        let lang = Language::new(Locale::En);
        let terms = tokenize("to be, or not to be", &lang);
        assert!(terms.is_empty());
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let lang = Language::new(Locale::En);
        let terms = tokenize("lock picks lock", &lang);
        assert_eq!(terms, vec!["lock", "pick", "lock"]);
    }
}

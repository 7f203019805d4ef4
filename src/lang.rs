use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Nl,
}

lazy_static! {
    static ref STOPWORDS_EN: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
    static ref STOPWORDS_NL: HashSet<&'static str> = {
        let words: &[&str] = &[
            "aan","al","alles","als","altijd","andere","ben","bij",
            "daar","dan","dat","de","der","deze","die","dit","doch","doen","door","dus",
            "een","eens","en","er","ge","geen","geweest",
            "haar","had","heb","hebben","heeft","hem","het","hier","hij","hoe","hun",
            "iemand","iets","ik","in","is","ja","je",
            "kan","kon","kunnen","maar","me","meer","men","met","mij","mijn","moet",
            "na","naar","niet","niets","nog","nu",
            "of","om","omdat","onder","ons","ook","op","over",
            "reeds","te","tegen","toch","toen","tot",
            "u","uit","uw","van","veel","voor",
            "want","waren","was","wat","werd","wezen","wie","wil","worden","wordt",
            "zal","ze","zelf","zich","zij","zijn","zo","zonder","zou"
        ];
        words.iter().copied().collect()
    };
}

/// Per-locale stemming and stopword removal, injected into the tokenizer.
/// The application rebuilds the index with a fresh `Language` when the
/// active locale changes.
pub struct Language {
    stemmer: Stemmer,
    stopwords: &'static HashSet<&'static str>,
}

impl Language {
    pub fn new(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                stemmer: Stemmer::create(Algorithm::English),
                stopwords: &STOPWORDS_EN,
            },
            Locale::Nl => Self {
                stemmer: Stemmer::create(Algorithm::Dutch),
                stopwords: &STOPWORDS_NL,
            },
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }

    pub fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_per_locale() {
        let en = Language::new(Locale::En);
        assert_eq!(en.stem("running"), "run");
        let nl = Language::new(Locale::Nl);
        assert_eq!(nl.stem("fietsen"), "fiets");
    }

    #[test]
    fn stopwords_per_locale() {
        assert!(Language::new(Locale::En).is_stopword("the"));
        assert!(Language::new(Locale::Nl).is_stopword("het"));
        assert!(!Language::new(Locale::En).is_stopword("het"));
    }
}

// Annotator trait: the swap-ready linguistic front end.
//
// The scoring pipeline never tokenizes text itself. It asks an Annotator for
// a Document (tokens with lemma, tag and flags) and for the stop-word set the
// lemma filter uses. The default implementation is the rule-based annotator in
// `text::rules`; tests plug in small hand-built doubles.

use std::collections::HashSet;

/// One annotated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw, case-preserving text
    pub text: String,
    /// Lowercased text, used for stop-word lookups
    pub lower: String,
    /// Dictionary base form
    pub lemma: String,
    /// Fine-grained part-of-speech tag (Penn style: "NN", "POS", "_SP", ...)
    pub tag: String,
    pub is_punct: bool,
    pub is_space: bool,
}

impl Token {
    /// A plain content word token. `lemma` is taken as given.
    pub fn word(text: &str, lemma: &str, tag: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            lemma: lemma.to_string(),
            tag: tag.to_string(),
            is_punct: false,
            is_space: false,
        }
    }

    pub fn punct(text: &str, tag: &str) -> Self {
        Self {
            is_punct: true,
            ..Self::word(text, text, tag)
        }
    }

    pub fn space(text: &str) -> Self {
        Self {
            is_space: true,
            ..Self::word(text, text, "_SP")
        }
    }
}

/// An immutable, ordered sequence of annotated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Lowercased stop-word set consulted by the lemma filter.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// English stop words from the `stop-words` crate.
    pub fn english() -> Self {
        Self::new(stop_words::get(stop_words::LANGUAGE::English))
    }

    /// Add more words to the set. Blank entries are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Expects an already lowercased word.
    pub fn contains(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Turns raw text into a Document and supplies the stop-word set.
pub trait Annotator {
    /// Annotate a piece of raw text.
    fn annotate(&self, text: &str) -> Document;

    /// The stop words used when filtering lemmas.
    fn stop_words(&self) -> &StopWords;
}

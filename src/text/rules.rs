// Rule-based annotator: the default, in-process Annotator.
//
// No model files and no network: tokens come from a single regex, tags from a
// handful of surface rules, and lemmas from an irregular-form table with the
// Snowball English stemmer as fallback. Good enough for short English texts;
// a statistical tagger can replace it behind the Annotator trait.

use anyhow::Result;
use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

use super::annotator::{Annotator, Document, StopWords, Token};

/// Word characters: anything except whitespace and ASCII punctuation.
/// Hyphenated compounds stay one token, apostrophe clitics split off.
const TOKEN_PATTERN: &str = r"(?P<space>\s+)|(?P<word>[^\s!-/:-@\[-`{-~]+(?:-[^\s!-/:-@\[-`{-~]+)*)|(?P<clitic>'[A-Za-z]+)|(?P<punct>\S)";

/// Contraction clitics: (text, lemma, tag). "'s" doubles as the possessive.
const CLITICS: &[(&str, &str, &str)] = &[
    ("'s", "'s", "POS"),
    ("'t", "not", "RB"),
    ("'re", "be", "VBP"),
    ("'ve", "have", "VBP"),
    ("'ll", "will", "MD"),
    ("'d", "would", "MD"),
    ("'m", "be", "VBP"),
];

/// Irregular inflections the stemmer cannot map to a base form.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("sat", "sit"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Upper bound on irregular/stem passes; real words settle in two or three.
const MAX_REDUCTIONS: usize = 8;

/// English stop-word forms of the contraction clitics.
const CLITIC_STOP_WORDS: &[&str] = &["'s", "'t", "n't", "'re", "'ve", "'ll", "'d", "'m"];

pub struct RuleAnnotator {
    pattern: Regex,
    stemmer: Stemmer,
    stop_words: StopWords,
}

impl RuleAnnotator {
    /// Annotator with the English stop-word list.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(StopWords::english())
    }

    /// Annotator with a caller-supplied stop-word set. The clitic forms are
    /// always added.
    pub fn with_stop_words(mut stop_words: StopWords) -> Result<Self> {
        stop_words.extend(CLITIC_STOP_WORDS);
        let pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| anyhow::anyhow!("Failed to compile token pattern: {e}"))?;

        debug!(stop_words = stop_words.len(), "Rule annotator ready");

        Ok(Self {
            pattern,
            stemmer: Stemmer::create(Algorithm::English),
            stop_words,
        })
    }

    /// Lemma for a word token. Annotating the returned lemma as a word yields
    /// the same lemma again, so scoring a vocabulary entry finds its own column.
    fn lemma_of(&self, text: &str, lower: &str) -> String {
        if is_acronym(text) || is_number(text) {
            return text.to_string();
        }
        let base = self.base_form(lower);
        // A stop-word base would vanish once scored as a word; keep the surface form
        if self.stop_words.contains(&base) && !self.stop_words.contains(lower) {
            return lower.to_string();
        }
        base
    }

    /// Irregular lookup or Snowball stem, repeated until the form is stable.
    fn base_form(&self, lower: &str) -> String {
        let mut form = lower.to_string();
        for _ in 0..MAX_REDUCTIONS {
            let next = match IRREGULAR_LEMMAS.iter().find(|(f, _)| *f == form) {
                Some((_, lemma)) => (*lemma).to_string(),
                None => self.stemmer.stem(&form).into_owned(),
            };
            if next == form {
                break;
            }
            form = next;
        }
        form
    }

    fn word_token(&self, text: &str) -> Token {
        let lower = text.to_lowercase();
        let lemma = self.lemma_of(text, &lower);
        Token {
            text: text.to_string(),
            lower,
            lemma,
            tag: word_tag(text).to_string(),
            is_punct: false,
            is_space: false,
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Document {
        let mut tokens = Vec::new();
        // Whether the previous match was a word ending right where this one starts
        let mut after_word = false;
        let mut prev_end = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            let adjacent = after_word && m.start() == prev_end;
            prev_end = m.end();
            after_word = false;

            if let Some(space) = caps.name("space") {
                // A single separating space belongs to the previous token
                if space.as_str() != " " {
                    tokens.push(Token::space(space.as_str()));
                }
            } else if let Some(word) = caps.name("word") {
                tokens.push(self.word_token(word.as_str()));
                after_word = true;
            } else if let Some(clitic) = caps.name("clitic") {
                let raw = clitic.as_str();
                let lower = raw.to_lowercase();
                match CLITICS.iter().find(|(form, _, _)| *form == lower) {
                    Some((_, lemma, tag)) if adjacent => {
                        tokens.push(Token {
                            text: raw.to_string(),
                            lower,
                            lemma: (*lemma).to_string(),
                            tag: (*tag).to_string(),
                            is_punct: false,
                            is_space: false,
                        });
                    }
                    _ => {
                        // Opening quote: split into the mark and the word
                        tokens.push(Token::punct("'", "``"));
                        tokens.push(self.word_token(&raw[1..]));
                        after_word = true;
                    }
                }
            } else if let Some(punct) = caps.name("punct") {
                let p = punct.as_str();
                let next_is_boundary = text[m.end()..]
                    .chars()
                    .next()
                    .map_or(true, |c| c.is_whitespace());
                let ends_in_s = tokens
                    .last()
                    .is_some_and(|t: &Token| t.lower.ends_with('s'));
                if p == "'" && adjacent && ends_in_s && next_is_boundary {
                    tokens.push(Token::punct(p, "POS"));
                } else {
                    tokens.push(Token::punct(p, punct_tag(p)));
                }
            }
        }

        Document::new(tokens)
    }

    fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

fn is_acronym(text: &str) -> bool {
    text.chars().count() >= 2 && text.chars().all(|c| c.is_uppercase())
}

fn is_number(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '-')
}

fn word_tag(text: &str) -> &'static str {
    if is_number(text) {
        "CD"
    } else if text.chars().next().is_some_and(char::is_uppercase) {
        "NNP"
    } else {
        "NN"
    }
}

fn punct_tag(p: &str) -> &'static str {
    match p {
        "." | "!" | "?" => ".",
        ":" | ";" => ":",
        "\"" | "'" => "``",
        _ => ",",
    }
}

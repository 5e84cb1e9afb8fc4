//! Sentence segmentation
//!
//! Rule-based splitting on terminal punctuation with abbreviation
//! suppression. Surface text is preserved verbatim (apart from trimming
//! surrounding whitespace) so selected sentences can be returned exactly
//! as they appeared in the input.

use rustc_hash::FxHashSet;

/// Rule-based sentence segmenter.
///
/// Splits on `.`, `!`, `?` when followed by whitespace or end of input.
/// A period does not end a sentence when the preceding word is a known
/// abbreviation or a single-letter initial; an ellipsis run splits only
/// at its final dot. Closing quotes and brackets after the terminal
/// attach to the finished sentence.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Lower-cased abbreviations that suppress a period boundary.
    abbreviations: FxHashSet<String>,
}

/// English abbreviations that commonly precede a non-terminal period.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "rep", "st", "jr", "sr", "vs", "etc",
    "e.g", "i.e", "cf", "al", "no", "vol", "fig", "inc", "ltd", "co", "corp", "dept", "univ",
    "approx", "est", "min", "max", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun",
];

/// Characters that may trail a terminal and still belong to the sentence.
const CLOSERS: &[char] = &['"', '\'', '\u{201d}', '\u{2019}', ')', ']', '\u{00bb}'];

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::english()
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the bundled English abbreviation set.
    pub fn english() -> Self {
        Self {
            abbreviations: ENGLISH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a segmenter with a custom abbreviation list (lower-case,
    /// without the trailing period).
    pub fn with_abbreviations(words: &[&str]) -> Self {
        Self {
            abbreviations: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add abbreviations to the suppression set.
    pub fn add_abbreviations(&mut self, words: &[&str]) {
        for word in words {
            self.abbreviations.insert(word.to_lowercase());
        }
    }

    /// Split text into sentences, preserving each sentence's surface text.
    ///
    /// Returns an empty vec for empty or whitespace-only input.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < len {
            let c = chars[i];

            if c == '!' || c == '?' {
                // Runs like "?!" split at the final terminal.
                if i + 1 < len && (chars[i + 1] == '!' || chars[i + 1] == '?') {
                    i += 1;
                    continue;
                }
                let end = consume_closers(&chars, i + 1);
                if end >= len || chars[end].is_whitespace() {
                    push_trimmed(&chars[start..end], &mut sentences);
                    start = end;
                    i = end;
                    continue;
                }
            } else if c == '.' {
                // Ellipsis runs split only at the final dot.
                if i + 1 < len && chars[i + 1] == '.' {
                    i += 1;
                    continue;
                }
                let end = consume_closers(&chars, i + 1);
                let followed_by_break = end >= len || chars[end].is_whitespace();
                if followed_by_break && !self.is_abbreviation(&chars, i) {
                    push_trimmed(&chars[start..end], &mut sentences);
                    start = end;
                    i = end;
                    continue;
                }
            }

            i += 1;
        }

        // Text that never reached a terminal still forms a sentence.
        push_trimmed(&chars[start..], &mut sentences);

        sentences
    }

    /// Check whether the word ending at the period `chars[dot]` is an
    /// abbreviation or a single-letter initial.
    fn is_abbreviation(&self, chars: &[char], dot: usize) -> bool {
        let mut begin = dot;
        while begin > 0 {
            let p = chars[begin - 1];
            // Internal periods kept so "e.g" matches as one word.
            if p.is_alphanumeric() || (p == '.' && begin >= 2 && chars[begin - 2].is_alphanumeric())
            {
                begin -= 1;
            } else {
                break;
            }
        }
        if begin == dot {
            return false;
        }

        let word: String = chars[begin..dot].iter().collect::<String>().to_lowercase();
        if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
            // Single-letter initials: "J. Smith".
            return true;
        }
        self.abbreviations.contains(&word)
    }
}

/// Extend `from` past any closing quotes or brackets.
fn consume_closers(chars: &[char], mut from: usize) -> usize {
    while from < chars.len() && CLOSERS.contains(&chars[from]) {
        from += 1;
    }
    from
}

/// Trim a char slice and push it when non-empty.
fn push_trimmed(slice: &[char], out: &mut Vec<String>) {
    let sentence: String = slice.iter().collect::<String>().trim().to_string();
    if !sentence.is_empty() {
        out.push(sentence);
    }
}

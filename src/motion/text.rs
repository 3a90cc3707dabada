//! Splits display strings into individually animated tokens.

use unicode_segmentation::UnicodeSegmentation;

use super::easing::FLOW;
use super::reveal::RevealLatch;

pub const WORD_STAGGER_SECS: f64 = 0.1;
pub const LETTER_STAGGER_SECS: f64 = 0.05;

const NO_BREAK_SPACE: &str = "\u{00A0}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenMode {
    /// Body copy: one token per whitespace-separated word.
    Words,
    /// Headings: one token per user-perceived character.
    Letters,
}

impl TokenMode {
    pub fn stagger_secs(self) -> f64 {
        match self {
            Self::Words => WORD_STAGGER_SECS,
            Self::Letters => LETTER_STAGGER_SECS,
        }
    }

    pub fn duration_secs(self) -> f64 {
        match self {
            Self::Words => 0.6,
            Self::Letters => 0.8,
        }
    }

    fn hidden_transform(self) -> &'static str {
        match self {
            Self::Words => "translateY(50px) rotateX(-90deg)",
            Self::Letters => "translateY(100px) rotateY(-90deg)",
        }
    }

    fn revealed_transform(self) -> &'static str {
        match self {
            Self::Words => "translateY(0) rotateX(0deg)",
            Self::Letters => "translateY(0) rotateY(0deg)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub delay_secs: f64,
}

impl Token {
    pub fn style(&self, mode: TokenMode, latch: RevealLatch) -> String {
        let (opacity, transform) = if latch.is_revealed() {
            (1, mode.revealed_transform())
        } else {
            (0, mode.hidden_transform())
        };
        let duration = mode.duration_secs();
        let delay = self.delay_secs;
        let curve = FLOW.css();

        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {duration}s {curve} {delay}s, transform {duration}s {curve} {delay}s;"
        )
    }
}

pub fn stagger_delay(base_secs: f64, index: usize, increment_secs: f64) -> f64 {
    // Rounded to milliseconds so CSS never sees float noise like 0.30000000000000004s.
    let raw = base_secs.max(0.0) + index as f64 * increment_secs;
    (raw * 1_000.0).round() / 1_000.0
}

pub fn tokenize(text: &str, mode: TokenMode, base_delay_secs: f64) -> Vec<Token> {
    let pieces: Vec<String> = match mode {
        TokenMode::Words => {
            let words: Vec<&str> = text.split_whitespace().collect();
            let last = words.len().saturating_sub(1);
            words
                .into_iter()
                .enumerate()
                .map(|(index, word)| {
                    if index < last {
                        format!("{word}{NO_BREAK_SPACE}")
                    } else {
                        word.to_string()
                    }
                })
                .collect()
        }
        TokenMode::Letters => text
            .graphemes(true)
            .map(|grapheme| {
                if grapheme.chars().all(char::is_whitespace) {
                    NO_BREAK_SPACE.to_string()
                } else {
                    grapheme.to_string()
                }
            })
            .collect(),
    };

    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| Token {
            index,
            text,
            delay_secs: stagger_delay(base_delay_secs, index, mode.stagger_secs()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("", TokenMode::Words, 0.0).is_empty());
        assert!(tokenize("", TokenMode::Letters, 0.0).is_empty());
        assert!(tokenize("   \t ", TokenMode::Words, 0.5).is_empty());
    }

    #[test]
    fn words_stagger_by_a_tenth_of_a_second() {
        let tokens = tokenize("Web Designer & Developer", TokenMode::Words, 0.5);
        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(texts, ["Web\u{00A0}", "Designer\u{00A0}", "&\u{00A0}", "Developer"]);

        let delays: Vec<f64> = tokens.iter().map(|token| token.delay_secs).collect();
        assert_eq!(delays, [0.5, 0.6, 0.7, 0.8]);
    }

    #[test]
    fn repeated_whitespace_does_not_create_empty_words() {
        let tokens = tokenize("  flowing   river ", TokenMode::Words, 0.0);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn rendered_words_keep_a_gap_between_them() {
        let rendered: String = tokenize("Web  Designer & Developer", TokenMode::Words, 0.0)
            .into_iter()
            .map(|token| token.text)
            .collect();
        assert_eq!(rendered.replace('\u{00A0}', " "), "Web Designer & Developer");

        let single = tokenize("river", TokenMode::Words, 0.0);
        assert_eq!(single[0].text, "river");
    }

    #[test]
    fn letters_keep_spaces_as_non_breaking() {
        let tokens = tokenize("Hi you", TokenMode::Letters, 0.0);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[2].text, "\u{00A0}");
        assert_eq!(tokens[5].delay_secs, 0.25);
    }

    #[test]
    fn letters_split_on_grapheme_clusters() {
        let tokens = tokenize("e\u{301}🇳🇵", TokenMode::Letters, 0.0);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn token_style_follows_latch() {
        let token = Token {
            index: 3,
            text: "river".to_string(),
            delay_secs: 0.3,
        };
        let hidden = token.style(TokenMode::Words, RevealLatch::Pending);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("rotateX(-90deg)"));

        let shown = token.style(TokenMode::Words, RevealLatch::Revealed);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("0.6s cubic-bezier(0.25, 0.25, 0, 1) 0.3s"));
    }
}

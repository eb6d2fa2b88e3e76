//! Single-pass tokenizer for Discord message markup.
//!
//! Recognises two markers, `<:name:id>` (custom emoji) and `<@id>` (user
//! mention). Everything else is literal text. A marker commits as soon as its
//! two-character sigil is seen: if the closing `:` or `>` never appears the
//! marker swallows the rest of the input and still yields a token.

use std::iter::Peekable;
use std::str::Chars;

use crate::token::Token;

/// Splits `input` into an ordered sequence of tokens.
///
/// Never fails. Empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use discmark_core::{tokenize, Token};
///
/// let tokens = tokenize("hi <@42>");
/// assert_eq!(tokens, vec![Token::text("hi "), Token::mention("42")]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens = Tokenizer::new(input).run();
    log::trace!("tokenized {} chars into {} tokens", input.len(), tokens.len());
    tokens
}

struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    tokens: Vec<Token>,
    pending: String,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            tokens: Vec::new(),
            pending: String::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.chars.next() {
            if c != '<' {
                self.pending.push(c);
                continue;
            }

            match self.chars.peek() {
                Some(':') => {
                    self.chars.next();
                    self.flush();
                    let (name, closed) = self.take_until(':');
                    let id = if closed {
                        self.take_until('>').0
                    } else {
                        String::new()
                    };
                    self.tokens.push(Token::Emoji { name, id });
                }
                Some('@') => {
                    self.chars.next();
                    self.flush();
                    let (id, _) = self.take_until('>');
                    self.tokens.push(Token::Mention { id });
                }
                _ => self.pending.push(c),
            }
        }

        self.flush();
        self.tokens
    }

    /// Collects characters up to `delim`, consuming the delimiter itself.
    ///
    /// The flag reports whether `delim` was found before end of input.
    fn take_until(&mut self, delim: char) -> (String, bool) {
        let mut out = String::new();
        for c in self.chars.by_ref() {
            if c == delim {
                return (out, true);
            }
            out.push(c);
        }
        (out, false)
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let content = std::mem::take(&mut self.pending);
            self.tokens.push(Token::Text { content });
        }
    }
}

//! Literal scanner for translation calls.
//!
//! Finds `<call_name>(` occurrences in arbitrary source text and extracts the
//! first argument when it is a plain string literal. There is no parser
//! behind this: the scanner is a small state machine that walks the text one
//! character at a time, and anything it cannot prove safe is dropped.
//!
//! A literal is rejected when it is empty, contains a raw line break, or
//! contains `${`. A literal that is never closed is abandoned and scanning
//! resumes right after the call token that opened it.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Single,
    Double,
    Backtick,
}

impl Delimiter {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// A literal being consumed.
#[derive(Debug)]
struct Literal {
    delimiter: Delimiter,
    /// Byte offset just past the call token; scanning resumes here if the
    /// literal is never closed.
    resume: usize,
    text: String,
    after_dollar: bool,
    rejected: bool,
}

impl Literal {
    fn new(delimiter: Delimiter, resume: usize) -> Self {
        Self {
            delimiter,
            resume,
            text: String::new(),
            after_dollar: false,
            rejected: false,
        }
    }

    fn push(&mut self, c: char) {
        if c == '\n' || c == '\r' || (c == '{' && self.after_dollar) {
            self.rejected = true;
        }
        self.after_dollar = c == '$';
        self.text.push(c);
    }

    fn into_key(self) -> Option<String> {
        (!self.rejected && !self.text.is_empty()).then_some(self.text)
    }
}

#[derive(Debug)]
enum State {
    SeekingCall,
    SeekingQuote { resume: usize },
    InLiteral(Literal),
    Escaped(Literal),
}

/// Extract translation keys from `text`.
///
/// Keys are returned in first-occurrence order without duplicates.
///
/// ```
/// use glotsync::core::scanner::extract_keys;
///
/// let keys = extract_keys(r#"tr("Save") + tr('Cancel') + tr("Save")"#, "tr");
/// assert_eq!(keys, vec!["Save", "Cancel"]);
/// ```
pub fn extract_keys(text: &str, call_name: &str) -> Vec<String> {
    let token = format!("{}(", call_name);
    let mut keys = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut pos = 0;
    let mut state = State::SeekingCall;

    loop {
        state = match state {
            State::SeekingCall => match find_call(text, &token, pos) {
                Some(end) => {
                    pos = end;
                    State::SeekingQuote { resume: end }
                }
                None => break,
            },
            State::SeekingQuote { resume } => {
                let Some(c) = text[pos..].chars().next() else {
                    break;
                };
                if c.is_whitespace() {
                    pos += c.len_utf8();
                    State::SeekingQuote { resume }
                } else if let Some(delimiter) = Delimiter::from_char(c) {
                    pos += c.len_utf8();
                    State::InLiteral(Literal::new(delimiter, resume))
                } else {
                    pos = resume;
                    State::SeekingCall
                }
            }
            State::InLiteral(mut literal) => {
                let Some(c) = text[pos..].chars().next() else {
                    pos = literal.resume;
                    state = State::SeekingCall;
                    continue;
                };
                pos += c.len_utf8();
                if c == '\\' {
                    literal.push(c);
                    State::Escaped(literal)
                } else if c == literal.delimiter.as_char() {
                    if let Some(key) = literal.into_key()
                        && !seen.contains(&key)
                    {
                        seen.insert(key.clone());
                        keys.push(key);
                    }
                    State::SeekingCall
                } else {
                    literal.push(c);
                    State::InLiteral(literal)
                }
            }
            State::Escaped(mut literal) => {
                let Some(c) = text[pos..].chars().next() else {
                    pos = literal.resume;
                    state = State::SeekingCall;
                    continue;
                };
                pos += c.len_utf8();
                literal.push(c);
                State::InLiteral(literal)
            }
        };
    }

    keys
}

/// Find the next call token at or after `from` and return the offset just past it.
fn find_call(text: &str, token: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(offset) = text[search..].find(token) {
        let start = search + offset;
        let end = start + token.len();
        if is_call_boundary(text, start) {
            return Some(end);
        }
        search = end;
    }
    None
}

/// `attr(` must not match `tr(`, but `this.tr(` and `$tr(` should.
fn is_call_boundary(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

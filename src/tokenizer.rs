use core::str::CharIndices;

use crate::options::{CR, LF};

/// A lexical unit of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single delimiter character.
    Delimiter,
    /// CRLF, LF or CR.
    RecordSeparator,
    /// A run opened by the escape marker.
    ///
    /// `text` excludes the opening marker and, when `closed`, the closing one.
    /// Doubled markers inside `text` are kept as they appear in the input.
    QuotedRun { text: &'a str, closed: bool },
    /// Anything up to the next delimiter or record separator, stray escape
    /// markers included.
    PlainRun(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    FieldStart,
    InPlainRun,
    InQuotedRun,
    AfterQuote,
}

/// Splits the input into tokens in a single forward pass.
///
/// Every character is looked at once or twice (one lookahead), so the scan is
/// linear in the input length whatever the quoting looks like.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    buf: &'a str,
    chars: CharIndices<'a>,
    delimiter: char,
    escape: char,
}

impl<'a> Tokens<'a> {
    pub fn new(buf: &'a str, delimiter: char, escape: char) -> Self {
        Tokens {
            buf,
            chars: buf.char_indices(),
            delimiter,
            escape,
        }
    }

    /// The byte offset of the next token.
    #[inline]
    pub fn offset(&self) -> usize {
        self.buf.len() - self.chars.as_str().len()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.as_str().chars().next()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let delimiter = self.delimiter;
        let escape = self.escape;
        let start = self.offset();
        let mut state = State::FieldStart;

        let token = loop {
            state = match state {
                State::FieldStart => {
                    let (_, c) = self.chars.next()?;

                    if c == delimiter {
                        break Token::Delimiter;
                    } else if c == CR {
                        if self.peek() == Some(LF) {
                            self.chars.next();
                        }
                        break Token::RecordSeparator;
                    } else if c == LF {
                        break Token::RecordSeparator;
                    } else if c == escape {
                        State::InQuotedRun
                    } else {
                        State::InPlainRun
                    }
                }
                State::InPlainRun => match self.peek() {
                    Some(c) if c != delimiter && c != CR && c != LF => {
                        self.chars.next();
                        State::InPlainRun
                    }
                    _ => break Token::PlainRun(&self.buf[start..self.offset()]),
                },
                State::InQuotedRun => match self.chars.next() {
                    Some((_, c)) if c == escape => State::AfterQuote,
                    Some(_) => State::InQuotedRun,
                    None => {
                        break Token::QuotedRun {
                            text: &self.buf[start + escape.len_utf8()..],
                            closed: false,
                        };
                    }
                },
                State::AfterQuote => {
                    if self.peek() == Some(escape) {
                        self.chars.next();
                        State::InQuotedRun
                    } else {
                        let end = self.offset() - escape.len_utf8();

                        break Token::QuotedRun {
                            text: &self.buf[start + escape.len_utf8()..end],
                            closed: true,
                        };
                    }
                }
            };
        };

        trace!("found {:?} @ {}..{}", token, start, self.offset());

        Some(token)
    }
}

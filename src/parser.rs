use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::options::Options;
use crate::tokenizer::{Token, Tokens};

/// An ordered sequence of fields.
pub type Record = Vec<String>;

/// An ordered sequence of records.
pub type Table = Vec<Record>;

#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: Options,
}

impl From<Options> for Parser {
    fn from(options: Options) -> Self {
        Parser::new(options)
    }
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse the whole text into a table.
    ///
    /// Never fails, malformed quoting is absorbed into the field content.
    pub fn parse(&self, text: &str) -> Table {
        let table = self.records(text).collect::<Vec<_>>();

        debug!(
            "parsed {} records from {} bytes",
            table.len(),
            text.len()
        );

        table
    }

    /// Iterate over the records of the text, one at a time.
    pub fn records<'a>(&self, text: &'a str) -> Records<'a> {
        Records {
            tokens: Tokens::new(text, self.options.delimiter, self.options.escape),
            escape: self.options.escape,
            record: Vec::new(),
            field: None,
            line: 0,
        }
    }

    /// Decode `buf` from a legacy encoding, then parse it.
    #[cfg(feature = "codec")]
    pub fn decode(
        &self,
        buf: &[u8],
        encoding: ::encoding::EncodingRef,
        trap: ::encoding::DecoderTrap,
    ) -> crate::Result<Table> {
        let text = encoding
            .decode(buf, trap)
            .map_err(crate::Error::Decode)?;

        Ok(self.parse(&text))
    }
}

#[derive(Clone, Debug)]
pub struct Records<'a> {
    tokens: Tokens<'a>,
    escape: char,
    record: Record,
    /// `None` until some run contributed to the field, even an empty one.
    field: Option<String>,
    line: usize,
}

impl<'a> Records<'a> {
    /// The number of records returned so far.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The byte offset where the next record starts.
    #[inline]
    pub fn offset(&self) -> usize {
        self.tokens.offset()
    }

    fn push_text(&mut self, text: Cow<'a, str>) {
        match self.field {
            Some(ref mut field) => field.push_str(&text),
            None => self.field = Some(text.into_owned()),
        }
    }

    fn finish_field(&mut self) {
        let field = self.field.take().unwrap_or_default();

        self.record.push(field);
    }

    fn finish_record(&mut self) -> Record {
        self.finish_field();
        self.line += 1;

        trace!("found record #{}: {:?}", self.line, self.record);

        mem::take(&mut self.record)
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.tokens.next() {
            match token {
                Token::Delimiter => self.finish_field(),
                Token::RecordSeparator => return Some(self.finish_record()),
                Token::QuotedRun { text, .. } => {
                    let text = unescape(text, self.escape);

                    self.push_text(text)
                }
                Token::PlainRun(text) => self.push_text(text.into()),
            }
        }

        if !self.record.is_empty() || self.field.is_some() {
            Some(self.finish_record())
        } else {
            None
        }
    }
}

/// Collapse every doubled escape marker into a single one.
///
/// Borrows the input when it holds no escape marker.
pub fn unescape(text: &str, escape: char) -> Cow<str> {
    if !text.contains(escape) {
        return text.into();
    }

    let mut s = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        s.push(c);

        if c == escape {
            // a lone trailing marker is kept
            if let Some(next) = chars.next() {
                if next != escape {
                    s.push(next);
                }
            }
        }
    }

    s.into()
}

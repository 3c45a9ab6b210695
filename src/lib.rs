//! Lenient conversion between CSV text and a table of string fields.
//!
//! Parsing accepts CRLF, LF and CR as record separators and never fails:
//! an unterminated quote runs to the end of the input, text following a
//! closed quote is appended to the field verbatim.
//!
//! ```
//! let table = lax_csv::parse("a,\"b,c\"\r\n\"d\"e,f\n");
//!
//! assert_eq!(table, vec![vec!["a", "b,c"], vec!["de", "f"]]);
//! assert_eq!(lax_csv::stringify(&table), "a,\"b,c\"\r\nde,f\r\n");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate cfg_if;

extern crate alloc;

mod error;
mod options;
mod parser;
mod tokenizer;
mod writer;

use alloc::string::String;

pub use crate::error::{Error, Result};
pub use crate::options::{Builder, Options, COMMA, CR, CRLF, LF, QUOTE};
pub use crate::parser::{unescape, Parser, Record, Records, Table};
pub use crate::tokenizer::{Token, Tokens};
pub use crate::writer::Writer;

cfg_if! {
    if #[cfg(feature = "codec")] {
        pub use encoding::{DecoderTrap, EncoderTrap, EncodingRef};
    }
}

/// Parse the text with the default options.
pub fn parse(text: &str) -> Table {
    Parser::default().parse(text)
}

/// Stringify the table with the default options.
pub fn stringify<T, R, F>(table: T) -> String
where
    T: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    Writer::default().stringify(table)
}

#[cfg(test)]
mod tests {
    cfg_if! {
        if #[cfg(not(feature = "std"))] {
            use alloc::{vec, vec::Vec};
        }
    }

    use super::*;

    #[test]
    fn test_escaping_round_trip() {
        let _ = pretty_env_logger::try_init();

        let s = stringify(vec![vec!["a\"b"]]);

        assert_eq!(s, "\"a\"\"b\"\r\n");
        assert_eq!(parse(&s), vec![vec!["a\"b"]]);
    }

    #[test]
    fn test_delimiter_in_field() {
        let _ = pretty_env_logger::try_init();

        let s = stringify(vec![vec!["a,b"]]);

        assert_eq!(s, "\"a,b\"\r\n");
        assert_eq!(parse(&s), vec![vec!["a,b"]]);
    }

    #[test]
    fn test_configuration_override() {
        let _ = pretty_env_logger::try_init();

        let options = Options::builder().with_delimiter(';').build();

        assert_eq!(Parser::new(options).parse("a;b"), vec![vec!["a", "b"]]);
        assert_eq!(parse("a;b"), vec![vec!["a;b"]]);
    }

    #[test]
    fn test_malformed_input() {
        let _ = pretty_env_logger::try_init();

        assert_eq!(parse("\"abc"), vec![vec!["abc"]]);
        assert_eq!(parse("\"a\"b,c"), vec![vec!["ab", "c"]]);
        assert_eq!(parse("a,b\r\n"), vec![vec!["a", "b"]]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let _ = pretty_env_logger::try_init();

        let options: Options =
            serde_json::from_str(r#"{"delimiter": "\t", "newline": "\n", "eof": false}"#).unwrap();
        let table = vec![vec!["a", "b\tc"], vec!["d", "e"]];
        let s = Writer::new(options.clone()).stringify(&table);

        assert_eq!(s, "a\t\"b\tc\"\nd\te");
        assert_eq!(Parser::new(options).parse(&s), table);
    }
}

#[cfg(feature = "codec")]
use alloc::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("delimiter and escape marker are both {0:?}")]
    DelimiterIsEscape(char),

    #[error("{role} {ch:?} is a record separator")]
    RecordSeparator { role: &'static str, ch: char },

    #[error("newline must not be empty")]
    EmptyNewline,

    #[error("newline {newline:?} contains the {role} {ch:?}")]
    NewlineOverlap {
        newline: alloc::string::String,
        role: &'static str,
        ch: char,
    },

    #[cfg(feature = "codec")]
    #[error("decode input: {0}")]
    Decode(Cow<'static, str>),

    #[cfg(feature = "codec")]
    #[error("encode output: {0}")]
    Encode(Cow<'static, str>),
}

pub type Result<T> = core::result::Result<T, Error>;

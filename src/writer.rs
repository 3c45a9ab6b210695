use alloc::borrow::Cow;
use alloc::string::String;

use crate::options::Options;

#[derive(Clone, Debug, Default)]
pub struct Writer {
    options: Options,
}

impl From<Options> for Writer {
    fn from(options: Options) -> Self {
        Writer::new(options)
    }
}

impl Writer {
    pub fn new(options: Options) -> Self {
        Writer { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Join the records with the configured newline.
    ///
    /// With `eof` enabled a non-empty table also ends with a newline, an empty
    /// table always produces an empty string.
    pub fn stringify<T, R, F>(&self, table: T) -> String
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut s = String::new();
        let mut records = 0;

        for record in table {
            if records > 0 {
                s.push_str(&self.options.newline);
            }
            self.write_record(record, &mut s);
            records += 1;
        }

        if self.options.eof && records > 0 {
            s.push_str(&self.options.newline);
        }

        debug!("stringified {} records into {} bytes", records, s.len());

        s
    }

    /// Append the fields of a record to `s`, without any terminator.
    pub fn write_record<R, F>(&self, record: R, s: &mut String)
    where
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        for (i, field) in record.into_iter().enumerate() {
            if i > 0 {
                s.push(self.options.delimiter);
            }
            s.push_str(&self.escape_field(field.as_ref()));
        }
    }

    /// Quote the field if it holds the delimiter, the escape marker, CR or LF.
    pub fn escape_field<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if !self.options.needs_escape(field) {
            return field.into();
        }

        let escape = self.options.escape;
        let mut s = String::with_capacity(field.len() + 2);

        s.push(escape);
        for c in field.chars() {
            if c == escape {
                s.push(escape);
            }
            s.push(c);
        }
        s.push(escape);

        trace!("escaped field {:?} as {:?}", field, s);

        s.into()
    }

    /// Stringify the table, then encode it with a legacy encoding.
    #[cfg(feature = "codec")]
    pub fn encode<T, R, F>(
        &self,
        table: T,
        encoding: ::encoding::EncodingRef,
        trap: ::encoding::EncoderTrap,
    ) -> crate::Result<alloc::vec::Vec<u8>>
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        encoding
            .encode(&self.stringify(table), trap)
            .map_err(crate::Error::Encode)
    }
}

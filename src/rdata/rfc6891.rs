//! Record data from [RFC 6891]: the OPT pseudo record.
//!
//! The OPT record is not a normal resource record. It appears at most
//! once, in the additional section, and overloads the record header fields
//! to extend the message header. This module only provides the record
//! data, a sequence of EDNS options. Interpreting the overloaded header
//! fields is the job of [`EdnsHeader`][crate::base::opt::EdnsHeader].
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use crate::base::iana::OptionCode;
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Opt -----------------------------------------------------------

/// OPT record data.
///
/// The data of an OPT record is a sequence of options, each a code, a
/// length, and that many octets of data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Opt {
    options: Vec<EdnsOption>,
}

impl Opt {
    /// Creates new OPT record data from a sequence of options.
    pub fn new(options: Vec<EdnsOption>) -> Self {
        Opt { options }
    }

    /// Returns the options of the record data.
    pub fn options(&self) -> &[EdnsOption] {
        &self.options
    }

    /// Returns the first option with the given code, if present.
    pub fn option(&self, code: OptionCode) -> Option<&EdnsOption> {
        self.options.iter().find(|option| option.code() == code)
    }

    /// Parses OPT record data up to the end of `parser`.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            options.push(EdnsOption::parse(parser)?);
        }
        Ok(Opt::new(options))
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for option in &self.options {
            write!(f, "{}{}", sep, option)?;
            sep = ", ";
        }
        Ok(())
    }
}

//------------ EdnsOption ----------------------------------------------------

/// A single EDNS option.
///
/// The option data is kept as raw octets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdnsOption {
    code: OptionCode,
    data: Bytes,
}

impl EdnsOption {
    /// Creates a new option from a code and raw data.
    pub fn new(code: OptionCode, data: Bytes) -> Self {
        EdnsOption { code, data }
    }

    /// Returns the option code.
    pub fn code(&self) -> OptionCode {
        self.code
    }

    /// Returns the raw option data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Parses a single option from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let code = OptionCode::parse(parser)?;
        let len = usize::from(u16::parse(parser)?);
        let data = parser.parse_octets(len)?;
        Ok(EdnsOption::new(code, data))
    }
}

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.code)?;
        for ch in self.data.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_options() {
        let octets = Bytes::from_static(b"");
        let mut parser = Parser::from_ref(&octets);
        let opt = Opt::parse(&mut parser).unwrap();
        assert!(opt.options().is_empty());
    }

    #[test]
    fn parse_options() {
        // An NSID option followed by a COOKIE option.
        let octets = Bytes::from_static(
            b"\x00\x03\x00\x04ns-1\
              \x00\x0a\x00\x08\x01\x02\x03\x04\x05\x06\x07\x08",
        );
        let mut parser = Parser::from_ref(&octets);
        let opt = Opt::parse(&mut parser).unwrap();
        assert_eq!(opt.options().len(), 2);
        assert_eq!(opt.options()[0].code(), OptionCode::NSID);
        assert_eq!(opt.options()[0].data().as_ref(), b"ns-1");
        assert_eq!(opt.options()[1].code(), OptionCode::COOKIE);
        assert!(opt.option(OptionCode::NSID).is_some());
        assert!(opt.option(OptionCode::PADDING).is_none());
    }

    #[test]
    fn truncated_option_fails() {
        let octets = Bytes::from_static(b"\x00\x03\x00\x06ns-1");
        let mut parser = Parser::from_ref(&octets);
        assert!(Opt::parse(&mut parser).is_err());
    }

    #[test]
    fn unknown_option_code_kept() {
        let octets = Bytes::from_static(b"\xfd\xe8\x00\x01\xff");
        let mut parser = Parser::from_ref(&octets);
        let opt = Opt::parse(&mut parser).unwrap();
        assert_eq!(opt.options()[0].code(), OptionCode::from_int(65000));
    }
}

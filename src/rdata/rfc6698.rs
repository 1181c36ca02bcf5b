//! Record data from [RFC 6698]: the TLSA record.
//!
//! [RFC 6698]: https://tools.ietf.org/html/rfc6698

use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Tlsa ----------------------------------------------------------

/// TLSA record data.
///
/// The TLSA record associates a TLS server certificate or public key with
/// the owner name, as defined in [RFC 6698].
///
/// [RFC 6698]: https://tools.ietf.org/html/rfc6698
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tlsa {
    cert_usage: u8,
    selector: u8,
    matching_type: u8,
    cert_data: Bytes,
}

impl Tlsa {
    /// Creates new TLSA record data from its components.
    pub fn new(
        cert_usage: u8,
        selector: u8,
        matching_type: u8,
        cert_data: Bytes,
    ) -> Self {
        Tlsa {
            cert_usage,
            selector,
            matching_type,
            cert_data,
        }
    }

    /// Returns the certificate usage field.
    pub fn cert_usage(&self) -> u8 {
        self.cert_usage
    }

    /// Returns the selector field.
    pub fn selector(&self) -> u8 {
        self.selector
    }

    /// Returns the matching type field.
    pub fn matching_type(&self) -> u8 {
        self.matching_type
    }

    /// Returns the certificate association data.
    pub fn cert_data(&self) -> &Bytes {
        &self.cert_data
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(3) {
            Some(len) => len,
            None => return Err(ParseError::ShortInput),
        };
        Ok(Tlsa::new(
            u8::parse(parser)?,
            u8::parse(parser)?,
            u8::parse(parser)?,
            parser.parse_octets(len)?,
        ))
    }
}

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.cert_usage, self.selector, self.matching_type
        )?;
        for ch in self.cert_data.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//============ Testing =======================================================

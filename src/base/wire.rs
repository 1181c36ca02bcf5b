//! Consuming data in wire format.
//!
//! Everything in this crate reads from an [`octseq`] parser positioned
//! somewhere inside the octets of a DNS message. This module provides the
//! error types shared by all decoders, a [`Parse`] helper trait for the
//! fixed-width primitives, and the bounded sub-decode combinator used for
//! length-prefixed data such as record data.

use bytes::Bytes;
use core::fmt;
use octseq::parse::{Parser, ShortInput};
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ parse_bounded -------------------------------------------------

/// Runs a sub-decoder over exactly `len` octets.
///
/// The sub-decoder receives a parser that is limited to the next `len`
/// octets of `parser` but still shares the underlying message octets, so
/// compression pointers can be followed backwards. The function fails if
/// fewer than `len` octets are left or if the sub-decoder leaves data
/// behind. On success, `parser` is positioned right after the `len` octets.
///
/// This is the only way length-prefixed content is decoded: a misbehaving
/// sub-decoder can never desynchronise the position used for subsequent
/// data.
pub fn parse_bounded<T, F>(
    parser: &mut Parser<'_, Bytes>,
    len: usize,
    op: F,
) -> Result<T, ParseError>
where
    F: FnOnce(&mut Parser<'_, Bytes>) -> Result<T, ParseError>,
{
    let mut sub = parser.parse_parser(len)?;
    let res = op(&mut sub)?;
    if sub.remaining() > 0 {
        return Err(ParseError::form_error("trailing data in bounded decode"));
    }
    Ok(res)
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value of itself from a parser.
///
/// Implementations exist for the fixed-width primitives appearing in DNS
/// wire data. All multi-octet integers are big-endian.
pub trait Parse: Sized {
    /// Extracts a value from the beginning of `parser`.
    ///
    /// If parsing fails, the parser position is undefined.
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError>;
}

impl Parse for u8 {
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }
}

impl Parse for u16 {
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }
}

impl Parse for u32 {
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }
}

impl Parse for Ipv4Addr {
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u8::parse(parser)?,
            u8::parse(parser)?,
            u8::parse(parser)?,
            u8::parse(parser)?,
        ))
    }
}

impl Parse for Ipv6Addr {
    fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the parser.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================

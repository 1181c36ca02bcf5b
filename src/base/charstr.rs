//! Character strings.
//!
//! The somewhat ill-named character string of RFC 1035 is a sequence of up
//! to 255 arbitrary octets prefixed by a single length octet. TXT record
//! data consists of one or more of them.

use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ CharStr -------------------------------------------------------

/// A length-prefixed string of at most 255 octets.
///
/// The octets are copied out of the message; the length octet is not kept,
/// since it is implied by the length of the data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CharStr {
    octets: Bytes,
}

impl CharStr {
    /// Parses a character string from the wire format.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = parser.parse_u8()?;
        Ok(CharStr {
            octets: parser.parse_octets(usize::from(len))?,
        })
    }

    /// Returns the content octets.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns the length of the content in octets.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the character string is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }
}

//--- AsRef

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        self.octets.as_ref()
    }
}

//--- Display

impl fmt::Display for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.octets.as_ref() {
            if ch == b'"' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", ch as char)?;
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let octets = Bytes::from_static(b"\x03foo\x00bar");
        let mut parser = Parser::from_ref(&octets);
        let cs = CharStr::parse(&mut parser).unwrap();
        assert_eq!(cs.as_slice(), b"foo");
        let cs = CharStr::parse(&mut parser).unwrap();
        assert!(cs.is_empty());
        assert_eq!(parser.remaining(), 3);
    }

    #[test]
    fn parse_short_input() {
        let octets = Bytes::from_static(b"\x05foo");
        let mut parser = Parser::from_ref(&octets);
        assert_eq!(
            CharStr::parse(&mut parser),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn display() {
        let octets = Bytes::from_static(b"\x06a\"b\\c\x01");
        let mut parser = Parser::from_ref(&octets);
        let cs = CharStr::parse(&mut parser).unwrap();
        assert_eq!(cs.to_string(), "a\\\"b\\\\c\\001");
    }
}

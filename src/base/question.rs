//! A single question of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question of a DNS message.
///
/// A question carries a domain name and a record type and asks for all
/// records of that type at that name. On the wire it also carries a class,
/// but in practice that is always IN, so we drop it during decoding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    qname: Name,
    qtype: Rtype,
}

impl Question {
    /// Creates a new question from a name and a record type.
    pub fn new(qname: Name, qtype: Rtype) -> Self {
        Question { qname, qtype }
    }

    /// Returns the requested domain name.
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the requested record type.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Parses a question from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let qname = Name::parse(parser)?;
        let qtype = Rtype::parse(parser)?;
        let _ = Class::parse(parser)?;
        Ok(Question { qname, qtype })
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} IN {}", self.qname, self.qtype)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_question() {
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\x00\x01\x00\x01",
        );
        let mut parser = Parser::from_ref(&octets);
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", question.qname()), "example.com.");
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn class_is_dropped() {
        // The class octets still have to be present and are consumed.
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\x00\x01\x00\xFF",
        );
        let mut parser = Parser::from_ref(&octets);
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn missing_class_fails() {
        let octets = Bytes::from_static(b"\x07example\x03com\x00\x00\x01");
        let mut parser = Parser::from_ref(&octets);
        assert_eq!(
            Question::parse(&mut parser),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn display() {
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\x00\x1c\x00\x01",
        );
        let mut parser = Parser::from_ref(&octets);
        let question = Question::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", question), "example.com. IN AAAA");
    }
}

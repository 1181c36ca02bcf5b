//! Record data from [RFC 1183]: the RP record.
//!
//! [RFC 1183]: https://tools.ietf.org/html/rfc1183

use crate::base::name::Name;
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Rp ------------------------------------------------------------

/// RP record data.
///
/// The responsible person record names a mailbox for the person responsible
/// for an owner name plus a domain name where TXT records with further
/// information can be found. It is defined in section 2.2 of [RFC 1183].
///
/// [RFC 1183]: https://tools.ietf.org/html/rfc1183
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rp {
    mbox: Name,
    txt: Name,
}

impl Rp {
    /// Creates new RP record data from the two names.
    pub fn new(mbox: Name, txt: Name) -> Self {
        Rp { mbox, txt }
    }

    /// Returns the mailbox of the responsible person.
    pub fn mbox(&self) -> &Name {
        &self.mbox
    }

    /// Returns the name under which TXT records with more information
    /// live.
    pub fn txt(&self) -> &Name {
        &self.txt
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Rp::new(Name::parse_mailbox(parser)?, Name::parse(parser)?))
    }
}

impl fmt::Display for Rp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.mbox, self.txt)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rp_parse() {
        let octets = Bytes::from_static(
            b"\x05admin\x07example\x03com\x00\
              \x04info\xc0\x06",
        );
        let mut parser = Parser::from_ref(&octets);
        let rp = Rp::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", rp.mbox()), "admin.example.com.");
        assert_eq!(format!("{}", rp.txt()), "info.example.com.");
        assert_eq!(parser.remaining(), 0);
    }
}

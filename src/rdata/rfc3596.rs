//! Record data from [RFC 3596]: the AAAA record.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// AAAA record data.
///
/// An AAAA record contains the IPv6 address of a host. It is defined in
/// [RFC 3596].
///
/// [RFC 3596]: https://tools.ietf.org/html/rfc3596
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// Creates new AAAA record data from an IPv6 address.
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    /// Returns the address of the record data.
    pub fn addr(self) -> Ipv6Addr {
        self.addr
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ipv6Addr::parse(parser).map(Self::new)
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aaaa_parse_display() {
        let octets = Bytes::from_static(
            b"\x20\x01\x0d\xb8\x00\x00\x00\x00\
              \x00\x00\x00\x00\x00\x00\x00\x01",
        );
        let mut parser = Parser::from_ref(&octets);
        let aaaa = Aaaa::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", aaaa), "2001:db8::1");
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn aaaa_short_input() {
        let octets = Bytes::from_static(b"\x20\x01\x0d\xb8");
        let mut parser = Parser::from_ref(&octets);
        assert!(Aaaa::parse(&mut parser).is_err());
    }
}

//! Record data from [RFC 1035]: the initial record types.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use crate::base::charstr::CharStr;
use crate::base::name::Name;
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// A record data.
///
/// An A record contains the IPv4 address of a host. It is defined in
/// section 3.4.1 of [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates new A record data from an IPv4 address.
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    /// Returns the address of the record data.
    pub fn addr(self) -> Ipv4Addr {
        self.addr
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ipv4Addr::parse(parser).map(Self::new)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Ns, Cname, Ptr ------------------------------------------------

name_rdata! {
    /// NS record data.
    ///
    /// NS records specify a host authoritative for a zone, defined in
    /// section 3.3.11 of [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    Ns, nsdname
}

name_rdata! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for its
    /// owner, defined in section 3.3.1 of [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    Cname, cname
}

name_rdata! {
    /// PTR record data.
    ///
    /// PTR records are used in special domains to point to some other
    /// location in the domain space, defined in section 3.3.12 of
    /// [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    Ptr, ptrdname
}

//------------ Soa -----------------------------------------------------------

/// SOA record data.
///
/// SOA records mark the top of a zone and carry maintenance parameters for
/// it. They are defined in section 3.3.13 of [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new SOA record data from its components.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// Returns the name of the zone's primary name server.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// Returns the mailbox of the person responsible for the zone.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// Returns the serial number of the zone.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the refresh interval in seconds.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// Returns the retry interval in seconds.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// Returns the expire interval in seconds.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// Returns the minimum TTL of the zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Soa::new(
            Name::parse(parser)?,
            Name::parse_mailbox(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
            u32::parse(parser)?,
        ))
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//------------ Null ----------------------------------------------------------

/// NULL record data.
///
/// NULL records can contain whatever data. They are defined in section
/// 3.3.10 of [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Null {
    data: Bytes,
}

impl Null {
    /// Creates new NULL record data from arbitrary octets.
    pub fn new(data: Bytes) -> Self {
        Null { data }
    }

    /// Returns the raw content of the record data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = parser.remaining();
        parser.parse_octets(len).map(Self::new).map_err(Into::into)
    }
}

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in self.data.iter() {
            write!(f, " {:02x}", ch)?
        }
        Ok(())
    }
}

//------------ Mx ------------------------------------------------------------

/// MX record data.
///
/// MX records specify a host willing to accept mail for the owner name.
/// They are defined in section 3.3.9 of [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// Creates new MX record data from a preference and an exchange.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// Returns the preference of this record.
    ///
    /// Lower values are preferred over higher ones.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the name of the mail exchange host.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Mx::new(u16::parse(parser)?, Name::parse(parser)?))
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//------------ Txt -----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold a sequence of character strings with descriptive text.
/// They are defined in section 3.3.14 of [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Txt {
    strings: Vec<CharStr>,
}

impl Txt {
    /// Creates new TXT record data from a sequence of character strings.
    pub fn new(strings: Vec<CharStr>) -> Self {
        Txt { strings }
    }

    /// Returns the character strings of the record data.
    pub fn strings(&self) -> &[CharStr] {
        &self.strings
    }

    /// Parses TXT record data up to the end of `parser`.
    ///
    /// A TXT record must contain at least one character string, which may
    /// be empty.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let mut strings = Vec::new();
        strings.push(CharStr::parse(parser)?);
        while parser.remaining() > 0 {
            strings.push(CharStr::parse(parser)?);
        }
        Ok(Txt::new(strings))
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.strings.iter();
        if let Some(first) = iter.next() {
            write!(f, "\"{}\"", first)?;
            for string in iter {
                write!(f, " \"{}\"", string)?;
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
    fn a_parse_display() {
        let octets = Bytes::from_static(b"\xc6\x33\x64\x02");
        let mut parser = Parser::from_ref(&octets);
        let a = A::parse(&mut parser).unwrap();
        assert_eq!(a.addr(), Ipv4Addr::new(198, 51, 100, 2));
        assert_eq!(format!("{}", a), "198.51.100.2");
    }

    #[test]
    fn soa_parse() {
        let octets = Bytes::from_static(
            b"\x03ns1\x07example\x03com\x00\
              \x0ahostmaster\xc0\x04\
              \x78\x48\xc0\xd4\
              \x00\x00\x1c\x20\
              \x00\x00\x0e\x10\
              \x00\x24\xea\x00\
              \x00\x00\x01\x2c",
        );
        let mut parser = Parser::from_ref(&octets);
        let soa = Soa::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", soa.mname()), "ns1.example.com.");
        assert_eq!(format!("{}", soa.rname()), "hostmaster.example.com.");
        assert_eq!(soa.serial(), 0x7848c0d4);
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 3600);
        assert_eq!(soa.expire(), 2419200);
        assert_eq!(soa.minimum(), 300);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn mx_parse() {
        let octets = Bytes::from_static(
            b"\x00\x0a\x04mail\x07example\x03com\x00",
        );
        let mut parser = Parser::from_ref(&octets);
        let mx = Mx::parse(&mut parser).unwrap();
        assert_eq!(mx.preference(), 10);
        assert_eq!(format!("{}", mx.exchange()), "mail.example.com.");
    }

    #[test]
    fn txt_parse() {
        let octets = Bytes::from_static(b"\x05hello\x05world");
        let mut parser = Parser::from_ref(&octets);
        let txt = Txt::parse(&mut parser).unwrap();
        assert_eq!(txt.strings().len(), 2);
        assert_eq!(format!("{}", txt), "\"hello\" \"world\"");
    }

    #[test]
    fn txt_empty_input_fails() {
        let octets = Bytes::from_static(b"");
        let mut parser = Parser::from_ref(&octets);
        assert!(Txt::parse(&mut parser).is_err());
    }

    #[test]
    fn txt_truncated_string_fails() {
        let octets = Bytes::from_static(b"\x05hel");
        let mut parser = Parser::from_ref(&octets);
        assert!(Txt::parse(&mut parser).is_err());
    }

    #[test]
    fn null_takes_everything() {
        let octets = Bytes::from_static(b"\x01\x02\x03");
        let mut parser = Parser::from_ref(&octets);
        let null = Null::parse(&mut parser).unwrap();
        assert_eq!(null.data().as_ref(), b"\x01\x02\x03");
        assert_eq!(format!("{}", null), "\\# 3 01 02 03");
        assert_eq!(parser.remaining(), 0);
    }
}

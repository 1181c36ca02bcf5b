//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet header: a 16 bit message
//! identifier, a 16 bit flags word, and the number of entries in each of
//! the four sections that follow. Content and format are defined in
//! section 4.1.1 of [RFC 1035].
//!
//! The identifier and flags end up in [`Header`]; the four counts live in
//! [`HeaderCounts`] and only drive section decoding, so a decoded message
//! does not retain them.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Header --------------------------------------------------------

/// The identifier and flags of a DNS message.
///
/// Note that the rcode carried in [`Flags`] is, at first, only the four bit
/// value from the flags word. Message decoding replaces it with the
/// effective, possibly EDNS-extended code once the additional section has
/// been examined; see [`Message`][crate::base::message::Message].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    id: u16,
    flags: Flags,
}

impl Header {
    /// Creates a new header from its components.
    pub fn new(id: u16, flags: Flags) -> Self {
        Header { id, flags }
    }

    /// Returns the message identifier.
    ///
    /// The ID is chosen by whoever creates a query and copied into the
    /// response by the server, allowing responses to be matched to their
    /// queries.
    pub fn id(self) -> u16 {
        self.id
    }

    /// Returns the flags of the message.
    pub fn flags(self) -> Flags {
        self.flags
    }

    /// Returns this header with the rcode replaced by `rcode`.
    pub fn with_rcode(self, rcode: Rcode) -> Self {
        Header {
            id: self.id,
            flags: Flags { rcode, ..self.flags },
        }
    }

    /// Parses the first four octets of a message header.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Header {
            id: u16::parse(parser)?,
            flags: Flags::from_u16(u16::parse(parser)?),
        })
    }
}

//------------ Flags ---------------------------------------------------------

/// The flags word of the DNS message header.
///
/// The word is laid out like this, with bit 15 transmitted first:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// Most fields are defined in [RFC 1035]; the AD and CD bits come from
/// [RFC 4035]. The reserved Z bit is ignored.
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 4035]: https://tools.ietf.org/html/rfc4035
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Flags {
    /// The `QR` bit specifies whether the message is a query (`false`) or
    /// a response (`true`).
    pub qr: bool,

    /// The kind of query the message contains.
    pub opcode: Opcode,

    /// Whether a responding name server is authoritative for the requested
    /// domain name, i.e., whether this is an *authoritative answer.*
    pub aa: bool,

    /// The *truncation* bit is set if there was more data available than
    /// fit into the message.
    pub tc: bool,

    /// The *recursion desired* bit asks the name server to recursively
    /// gather a response; its value is copied into the response.
    pub rd: bool,

    /// Whether the responding name server supports recursion.
    pub ra: bool,

    /// The *authentic data* bit states that all RRsets in the response
    /// have passed DNSSEC validation at the server.
    pub ad: bool,

    /// The *checking disabled* bit asks upstream servers not to perform
    /// DNSSEC verification.
    pub cd: bool,

    /// The response code.
    ///
    /// When decoded from the flags word, this is the low four bits only.
    pub rcode: Rcode,
}

/// Masks and positions of the fields within the flags word.
impl Flags {
    const QR: u16 = 0x8000;
    const OPCODE_MASK: u16 = 0x7800;
    const OPCODE_SHIFT: u16 = 11;
    const AA: u16 = 0x0400;
    const TC: u16 = 0x0200;
    const RD: u16 = 0x0100;
    const RA: u16 = 0x0080;
    const AD: u16 = 0x0020;
    const CD: u16 = 0x0010;
    const RCODE_MASK: u16 = 0x000F;
}

impl Flags {
    /// Creates new flags.
    ///
    /// All bits are unset, the opcode is QUERY, the rcode NOERROR.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the flags from the 16 bit flags word.
    pub fn from_u16(word: u16) -> Self {
        Flags {
            qr: word & Self::QR != 0,
            opcode: Opcode::from_int(
                ((word & Self::OPCODE_MASK) >> Self::OPCODE_SHIFT) as u8,
            ),
            aa: word & Self::AA != 0,
            tc: word & Self::TC != 0,
            rd: word & Self::RD != 0,
            ra: word & Self::RA != 0,
            ad: word & Self::AD != 0,
            cd: word & Self::CD != 0,
            rcode: Rcode::from_int(word & Self::RCODE_MASK),
        }
    }

    /// Returns the 16 bit flags word for the flags.
    ///
    /// Only the low four bits of the rcode fit the word; a possible EDNS
    /// extension is cut off.
    pub fn to_u16(self) -> u16 {
        let mut word = u16::from(self.opcode.to_int()) << Self::OPCODE_SHIFT;
        word |= self.rcode.to_int() & Self::RCODE_MASK;
        if self.qr {
            word |= Self::QR
        }
        if self.aa {
            word |= Self::AA
        }
        if self.tc {
            word |= Self::TC
        }
        if self.rd {
            word |= Self::RD
        }
        if self.ra {
            word |= Self::RA
        }
        if self.ad {
            word |= Self::AD
        }
        if self.cd {
            word |= Self::CD
        }
        word
    }
}

//--- Default

impl Default for Flags {
    fn default() -> Self {
        Flags {
            qr: false,
            opcode: Opcode::QUERY,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            ad: false,
            cd: false,
            rcode: Rcode::NOERROR,
        }
    }
}

//--- Display

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (bit, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
            (self.ad, "AD"),
            (self.cd, "CD"),
        ] {
            if bit {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section counts of a DNS message header.
///
/// These four 16 bit integers state the number of entries in each of the
/// message's sections and drive section decoding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl HeaderCounts {
    /// Returns the number of questions.
    pub fn qdcount(self) -> u16 {
        self.qdcount
    }

    /// Returns the number of answer records.
    pub fn ancount(self) -> u16 {
        self.ancount
    }

    /// Returns the number of authority records.
    pub fn nscount(self) -> u16 {
        self.nscount
    }

    /// Returns the number of additional records.
    pub fn arcount(self) -> u16 {
        self.arcount
    }

    /// Parses the count portion of a message header.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: u16::parse(parser)?,
            ancount: u16::parse(parser)?,
            nscount: u16::parse(parser)?,
            arcount: u16::parse(parser)?,
        })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! test_bit {
        ($field:ident, $mask:expr) => {{
            let flags = Flags::from_u16($mask);
            assert!(flags.$field);
            assert_eq!(
                flags,
                Flags {
                    $field: true,
                    ..Default::default()
                }
            );
            assert_eq!(flags.to_u16(), $mask);
            assert!(!Flags::from_u16(!$mask).$field);
        }};
    }

    #[test]
    fn single_bits() {
        test_bit!(qr, 0x8000);
        test_bit!(aa, 0x0400);
        test_bit!(tc, 0x0200);
        test_bit!(rd, 0x0100);
        test_bit!(ra, 0x0080);
        test_bit!(ad, 0x0020);
        test_bit!(cd, 0x0010);
    }

    #[test]
    fn opcode_field() {
        assert_eq!(Flags::from_u16(0x0000).opcode, Opcode::QUERY);
        assert_eq!(Flags::from_u16(0x2000).opcode, Opcode::NOTIFY);
        assert_eq!(Flags::from_u16(0x2800).opcode, Opcode::UPDATE);
        assert_eq!(
            Flags {
                opcode: Opcode::STATUS,
                ..Default::default()
            }
            .to_u16(),
            0x1000
        );
    }

    #[test]
    fn rcode_field() {
        assert_eq!(Flags::from_u16(0x0003).rcode, Rcode::NXDOMAIN);
        assert_eq!(Flags::from_u16(0xFFF5).rcode, Rcode::REFUSED);
        assert_eq!(
            Flags {
                rcode: Rcode::SERVFAIL,
                ..Default::default()
            }
            .to_u16(),
            0x0002
        );
    }

    #[test]
    fn typical_response_flags() {
        // QR and RA set, RD copied from the query, everything else clear.
        let flags = Flags::from_u16(0x8180);
        assert_eq!(
            flags,
            Flags {
                qr: true,
                opcode: Opcode::QUERY,
                aa: false,
                tc: false,
                rd: true,
                ra: true,
                ad: false,
                cd: false,
                rcode: Rcode::NOERROR,
            }
        );
    }

    #[test]
    fn reserved_bit_ignored() {
        assert_eq!(Flags::from_u16(0x0040), Flags::new());
    }

    #[test]
    fn parse_header() {
        let octets = Bytes::from_static(b"\x12\x34\x81\x80");
        let mut parser = Parser::from_ref(&octets);
        let header = Header::parse(&mut parser).unwrap();
        assert_eq!(header.id(), 0x1234);
        assert!(header.flags().qr);
        assert_eq!(header.flags().rcode, Rcode::NOERROR);
    }

    #[test]
    fn with_rcode() {
        let header = Header::new(1, Flags::new()).with_rcode(Rcode::BADVERS);
        assert_eq!(header.flags().rcode, Rcode::BADVERS);
        assert_eq!(header.id(), 1);
        assert!(!header.flags().qr);
    }

    #[test]
    fn parse_counts() {
        let octets = Bytes::from_static(
            b"\x00\x01\x00\x02\x00\x03\x00\x04",
        );
        let mut parser = Parser::from_ref(&octets);
        let counts = HeaderCounts::parse(&mut parser).unwrap();
        assert_eq!(counts.qdcount(), 1);
        assert_eq!(counts.ancount(), 2);
        assert_eq!(counts.nscount(), 3);
        assert_eq!(counts.arcount(), 4);
    }

    #[test]
    fn short_header_fails() {
        let octets = Bytes::from_static(b"\x12\x34\x81");
        let mut parser = Parser::from_ref(&octets);
        assert_eq!(Header::parse(&mut parser), Err(ParseError::ShortInput));
    }
}

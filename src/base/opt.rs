//! The EDNS portion of a message header.
//!
//! EDNS, defined in [RFC 6891], extends the fixed message header through
//! an OPT pseudo record in the additional section. The OPT record reuses
//! its header fields: the class carries the requestor's UDP payload size
//! and the TTL carries the upper bits of an extended rcode, the EDNS
//! version, and a flags field:
//!
//! ```text
//! +------------+------------+------------+------------+
//! | ext rcode  |  version   | DO|        zero          |
//! +------------+------------+------------+------------+
//! ```
//!
//! This module interprets those fields. [`EdnsHeader::from_additional`]
//! folds the additional section of a decoded message into an
//! [`EdnsHeader`] and the effective twelve bit rcode.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use super::iana::{Rcode, Rtype};
use super::record::Record;
use crate::rdata::{EdnsOption, RecordData};

//------------ EdnsHeader ----------------------------------------------------

/// The EDNS portion of a message header.
///
/// A message without an OPT record has no EDNS header. A message whose
/// OPT record breaks the rules of [RFC 6891], by not owning the root name
/// or by appearing more than once, is `Invalid`; such a message would be
/// answered with FORMERR, but the rest of it decodes normally.
///
/// [RFC 6891]: https://tools.ietf.org/html/rfc6891
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EdnsHeader {
    /// The message does not use EDNS.
    None,

    /// The message carries a well-formed OPT record.
    Edns(Edns),

    /// The message carries OPT records that violate RFC 6891.
    Invalid,
}

/// Positions of the fields within the OPT record's TTL.
const EXT_RCODE_SHIFT: u32 = 24;
const VERSION_SHIFT: u32 = 16;
const DO_BIT: u32 = 0x0000_8000;

impl EdnsHeader {
    /// Extracts the EDNS header from the additional section.
    ///
    /// Returns the header and the effective rcode of the message, which
    /// combines `header_rcode` with the extended rcode bits of a present
    /// OPT record.
    ///
    /// A lone OPT record with the root name as its owner yields
    /// [`EdnsHeader::Edns`]. Anything else that involves an OPT record,
    /// a non-root owner or a second OPT, yields [`EdnsHeader::Invalid`]
    /// together with the BADVERS rcode.
    pub fn from_additional(
        header_rcode: Rcode,
        additional: &[Record],
    ) -> (Self, Rcode) {
        let mut opts = additional
            .iter()
            .filter(|record| record.rtype() == Rtype::OPT);
        let record = match (opts.next(), opts.next()) {
            (None, _) => return (EdnsHeader::None, header_rcode),
            (Some(record), None) => record,
            (Some(_), Some(_)) => {
                return (EdnsHeader::Invalid, Rcode::BADVERS)
            }
        };
        if !record.owner().is_root() {
            return (EdnsHeader::Invalid, Rcode::BADVERS);
        }
        let options = match record.data() {
            RecordData::Opt(opt) => opt.options().to_vec(),
            _ => return (EdnsHeader::Invalid, Rcode::BADVERS),
        };
        let ttl = record.ttl();
        let edns = Edns {
            version: (ttl >> VERSION_SHIFT) as u8,
            udp_payload_size: record.class().to_int(),
            dnssec_ok: ttl & DO_BIT != 0,
            options,
        };
        let rcode =
            Rcode::from_parts(header_rcode, (ttl >> EXT_RCODE_SHIFT) as u8);
        (EdnsHeader::Edns(edns), rcode)
    }

    /// Returns the EDNS data if the header is well-formed.
    pub fn as_edns(&self) -> Option<&Edns> {
        match self {
            EdnsHeader::Edns(edns) => Some(edns),
            _ => None,
        }
    }
}

//------------ Edns ----------------------------------------------------------

/// The data of a well-formed EDNS header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edns {
    version: u8,
    udp_payload_size: u16,
    dnssec_ok: bool,
    options: Vec<EdnsOption>,
}

impl Edns {
    /// Returns the EDNS version of the message.
    ///
    /// Only version 0 is currently defined. A server receiving a query
    /// with a higher version responds with BADVERS.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the maximum UDP payload size the sender can handle.
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// Returns whether the DNSSEC OK bit is set.
    ///
    /// A set bit asks the responder to include DNSSEC records.
    pub fn dnssec_ok(&self) -> bool {
        self.dnssec_ok
    }

    /// Returns the EDNS options of the message.
    pub fn options(&self) -> &[EdnsOption] {
        &self.options
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::name::Name;
    use crate::rdata::{Opt, A};
    use bytes::Bytes;
    use std::net::Ipv4Addr;

    fn opt_record(owner: Name, class: u16, ttl: u32) -> Record {
        Record::new(
            owner,
            Rtype::OPT,
            Class::from_int(class),
            ttl,
            RecordData::Opt(Opt::new(Vec::new())),
        )
    }

    fn a_record() -> Record {
        Record::new(
            Name::root(),
            Rtype::A,
            Class::IN,
            0,
            RecordData::A(A::new(Ipv4Addr::new(192, 0, 2, 1))),
        )
    }

    #[test]
    fn no_opt_record() {
        let (header, rcode) =
            EdnsHeader::from_additional(Rcode::NXDOMAIN, &[a_record()]);
        assert_eq!(header, EdnsHeader::None);
        assert_eq!(rcode, Rcode::NXDOMAIN);
    }

    #[test]
    fn plain_opt_record() {
        let record = opt_record(Name::root(), 1232, 0);
        let (header, rcode) =
            EdnsHeader::from_additional(Rcode::NOERROR, &[record]);
        let edns = header.as_edns().unwrap();
        assert_eq!(edns.version(), 0);
        assert_eq!(edns.udp_payload_size(), 1232);
        assert!(!edns.dnssec_ok());
        assert!(edns.options().is_empty());
        assert_eq!(rcode, Rcode::NOERROR);
    }

    #[test]
    fn dnssec_ok_bit() {
        let record = opt_record(Name::root(), 4096, 0x0000_8000);
        let (header, _) =
            EdnsHeader::from_additional(Rcode::NOERROR, &[record]);
        assert!(header.as_edns().unwrap().dnssec_ok());
    }

    #[test]
    fn extended_rcode() {
        // Upper eight bits 0x01, header rcode 2: effective rcode 18.
        let record = opt_record(Name::root(), 4096, 0x0100_0000);
        let (_, rcode) =
            EdnsHeader::from_additional(Rcode::SERVFAIL, &[record]);
        assert_eq!(rcode, Rcode::from_int(18));
        assert_eq!(rcode.to_parts(), (Rcode::SERVFAIL, 1));
    }

    #[test]
    fn version_field() {
        let record = opt_record(Name::root(), 4096, 0x0003_0000);
        let (header, _) =
            EdnsHeader::from_additional(Rcode::NOERROR, &[record]);
        assert_eq!(header.as_edns().unwrap().version(), 3);
    }

    #[test]
    fn non_root_owner_is_invalid() {
        let octets =
            Bytes::from_static(b"\x07example\x03com\x00");
        let mut parser = octseq::parse::Parser::from_ref(&octets);
        let owner = Name::parse(&mut parser).unwrap();
        let record = opt_record(owner, 4096, 0);
        let (header, rcode) =
            EdnsHeader::from_additional(Rcode::NOERROR, &[record]);
        assert_eq!(header, EdnsHeader::Invalid);
        assert_eq!(rcode, Rcode::BADVERS);
    }

    #[test]
    fn two_opt_records_are_invalid() {
        let records = [
            opt_record(Name::root(), 4096, 0),
            opt_record(Name::root(), 512, 0),
        ];
        let (header, rcode) =
            EdnsHeader::from_additional(Rcode::NOERROR, &records);
        assert_eq!(header, EdnsHeader::Invalid);
        assert_eq!(rcode, Rcode::BADVERS);
    }
}

//! Record data.
//!
//! Each record type defines its own record data format. This module
//! collects the implemented formats, organized into submodules by the RFC
//! that defines them, and ties them together in the enum [`RecordData`].
//!
//! Decoding is driven by a registry that maps record types to decoder
//! functions. Data of a type without a registered decoder ends up as
//! [`UnknownRecordData`], which simply keeps the raw octets.

#[macro_use]
mod macros;

pub mod rfc1035;
pub mod rfc1183;
pub mod rfc2782;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc5155;
pub mod rfc6672;
pub mod rfc6698;
pub mod rfc6891;
pub mod rfc7344;

pub use self::rfc1035::{Cname, Mx, Ns, Null, Ptr, Soa, Txt, A};
pub use self::rfc1183::Rp;
pub use self::rfc2782::Srv;
pub use self::rfc3596::Aaaa;
pub use self::rfc4034::{Dnskey, Ds, Nsec, Rrsig};
pub use self::rfc5155::{Nsec3, Nsec3param};
pub use self::rfc6672::Dname;
pub use self::rfc6698::Tlsa;
pub use self::rfc6891::{EdnsOption, Opt};
pub use self::rfc7344::{Cdnskey, Cds};

use crate::base::iana::Rtype;
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::collections::HashMap;
use std::sync::OnceLock;

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
///
/// One variant per implemented record type, plus [`Unknown`] for
/// everything else.
///
/// [`Unknown`]: RecordData::Unknown
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordData {
    A(A),
    Ns(Ns),
    Cname(Cname),
    Soa(Soa),
    Null(Null),
    Ptr(Ptr),
    Mx(Mx),
    Txt(Txt),
    Rp(Rp),
    Aaaa(Aaaa),
    Srv(Srv),
    Dname(Dname),
    Opt(Opt),
    Ds(Ds),
    Rrsig(Rrsig),
    Nsec(Nsec),
    Dnskey(Dnskey),
    Nsec3(Nsec3),
    Nsec3param(Nsec3param),
    Tlsa(Tlsa),
    Cds(Cds),
    Cdnskey(Cdnskey),
    Unknown(UnknownRecordData),
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::A(inner) => inner.fmt(f),
            RecordData::Ns(inner) => inner.fmt(f),
            RecordData::Cname(inner) => inner.fmt(f),
            RecordData::Soa(inner) => inner.fmt(f),
            RecordData::Null(inner) => inner.fmt(f),
            RecordData::Ptr(inner) => inner.fmt(f),
            RecordData::Mx(inner) => inner.fmt(f),
            RecordData::Txt(inner) => inner.fmt(f),
            RecordData::Rp(inner) => inner.fmt(f),
            RecordData::Aaaa(inner) => inner.fmt(f),
            RecordData::Srv(inner) => inner.fmt(f),
            RecordData::Dname(inner) => inner.fmt(f),
            RecordData::Opt(inner) => inner.fmt(f),
            RecordData::Ds(inner) => inner.fmt(f),
            RecordData::Rrsig(inner) => inner.fmt(f),
            RecordData::Nsec(inner) => inner.fmt(f),
            RecordData::Dnskey(inner) => inner.fmt(f),
            RecordData::Nsec3(inner) => inner.fmt(f),
            RecordData::Nsec3param(inner) => inner.fmt(f),
            RecordData::Tlsa(inner) => inner.fmt(f),
            RecordData::Cds(inner) => inner.fmt(f),
            RecordData::Cdnskey(inner) => inner.fmt(f),
            RecordData::Unknown(inner) => inner.fmt(f),
        }
    }
}

//------------ UnknownRecordData ---------------------------------------------

/// Record data of an unregistered record type.
///
/// Keeps the raw octets of the data. Displays in the unknown record data
/// format of [RFC 3597].
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownRecordData {
    data: Bytes,
}

impl UnknownRecordData {
    /// Creates unknown record data from raw octets.
    pub fn new(data: Bytes) -> Self {
        UnknownRecordData { data }
    }

    /// Returns the raw octets of the record data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = parser.remaining();
        parser.parse_octets(len).map(Self::new).map_err(Into::into)
    }
}

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in self.data.iter() {
            write!(f, " {:02x}", ch)?
        }
        Ok(())
    }
}

//------------ The decoder registry ------------------------------------------

/// The type of a record data decoder function.
///
/// A decoder receives a parser delimited to exactly the RDLENGTH octets of
/// the record and must consume all of them.
pub type RdataDecoder =
    fn(&mut Parser<'_, Bytes>) -> Result<RecordData, ParseError>;

/// Returns the registry mapping record types to their decoders.
fn registry() -> &'static HashMap<Rtype, RdataDecoder> {
    static REGISTRY: OnceLock<HashMap<Rtype, RdataDecoder>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert(Rtype::A, (|parser| {
            A::parse(parser).map(RecordData::A)
        }) as RdataDecoder);
        map.insert(Rtype::NS, |parser| {
            Ns::parse(parser).map(RecordData::Ns)
        });
        map.insert(Rtype::CNAME, |parser| {
            Cname::parse(parser).map(RecordData::Cname)
        });
        map.insert(Rtype::SOA, |parser| {
            Soa::parse(parser).map(RecordData::Soa)
        });
        map.insert(Rtype::NULL, |parser| {
            Null::parse(parser).map(RecordData::Null)
        });
        map.insert(Rtype::PTR, |parser| {
            Ptr::parse(parser).map(RecordData::Ptr)
        });
        map.insert(Rtype::MX, |parser| {
            Mx::parse(parser).map(RecordData::Mx)
        });
        map.insert(Rtype::TXT, |parser| {
            Txt::parse(parser).map(RecordData::Txt)
        });
        map.insert(Rtype::RP, |parser| {
            Rp::parse(parser).map(RecordData::Rp)
        });
        map.insert(Rtype::AAAA, |parser| {
            Aaaa::parse(parser).map(RecordData::Aaaa)
        });
        map.insert(Rtype::SRV, |parser| {
            Srv::parse(parser).map(RecordData::Srv)
        });
        map.insert(Rtype::DNAME, |parser| {
            Dname::parse(parser).map(RecordData::Dname)
        });
        map.insert(Rtype::OPT, |parser| {
            Opt::parse(parser).map(RecordData::Opt)
        });
        map.insert(Rtype::DS, |parser| {
            Ds::parse(parser).map(RecordData::Ds)
        });
        map.insert(Rtype::RRSIG, |parser| {
            Rrsig::parse(parser).map(RecordData::Rrsig)
        });
        map.insert(Rtype::NSEC, |parser| {
            Nsec::parse(parser).map(RecordData::Nsec)
        });
        map.insert(Rtype::DNSKEY, |parser| {
            Dnskey::parse(parser).map(RecordData::Dnskey)
        });
        map.insert(Rtype::NSEC3, |parser| {
            Nsec3::parse(parser).map(RecordData::Nsec3)
        });
        map.insert(Rtype::NSEC3PARAM, |parser| {
            Nsec3param::parse(parser).map(RecordData::Nsec3param)
        });
        map.insert(Rtype::TLSA, |parser| {
            Tlsa::parse(parser).map(RecordData::Tlsa)
        });
        map.insert(Rtype::CDS, |parser| {
            Cds::parse(parser).map(RecordData::Cds)
        });
        map.insert(Rtype::CDNSKEY, |parser| {
            Cdnskey::parse(parser).map(RecordData::Cdnskey)
        });
        map
    })
}

/// Decodes the record data for a record of type `rtype`.
///
/// The parser must be delimited to exactly the record's RDLENGTH octets.
/// Types without a registered decoder are kept as raw octets in
/// [`RecordData::Unknown`].
pub fn parse_rdata(
    rtype: Rtype,
    parser: &mut Parser<'_, Bytes>,
) -> Result<RecordData, ParseError> {
    match registry().get(&rtype) {
        Some(decoder) => decoder(parser),
        None => {
            UnknownRecordData::parse(parser).map(RecordData::Unknown)
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn registered_type_dispatches() {
        let octets = Bytes::from_static(b"\xc0\x00\x02\x01");
        let mut parser = Parser::from_ref(&octets);
        let data = parse_rdata(Rtype::A, &mut parser).unwrap();
        assert_eq!(
            data,
            RecordData::A(A::new(Ipv4Addr::new(192, 0, 2, 1)))
        );
    }

    #[test]
    fn unregistered_type_keeps_octets() {
        let octets = Bytes::from_static(b"\x01\x02\x03\x04\x05");
        let mut parser = Parser::from_ref(&octets);
        let data = parse_rdata(Rtype::from_int(4000), &mut parser).unwrap();
        match data {
            RecordData::Unknown(data) => {
                assert_eq!(data.data().len(), 5);
                assert_eq!(
                    format!("{}", data),
                    "\\# 5 01 02 03 04 05"
                );
            }
            other => panic!("unexpected data: {:?}", other),
        }
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn registered_decoder_error_propagates() {
        let octets = Bytes::from_static(b"\xc0\x00");
        let mut parser = Parser::from_ref(&octets);
        assert!(parse_rdata(Rtype::A, &mut parser).is_err());
    }
}

//! Resource records.
//!
//! This module provides [`Record`], the decoded form of the resource
//! records that make up the answer, authority, and additional sections of
//! a DNS message. The record data itself lives in the enum
//! [`RecordData`][crate::rdata::RecordData] over in the [rdata] module.
//!
//! [rdata]: crate::rdata

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{parse_bounded, Parse, ParseError};
use crate::rdata::{parse_rdata, RecordData};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// A record announces a fact about a domain name, here called the *owner*
/// of the record. What kind of fact is described by the record type, and
/// the fact itself is carried in the record data. The *TTL* states for how
/// many seconds the record may be cached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    owner: Name,
    rtype: Rtype,
    class: Class,
    ttl: u32,
    data: RecordData,
}

impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        owner: Name,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Record {
            owner,
            rtype,
            class,
            ttl,
            data,
        }
    }

    /// Returns the owner name of the record.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    ///
    /// OPT records reuse this field for the requestor's UDP payload size.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the time to live of the record.
    ///
    /// OPT records reuse this field for an extension of the message
    /// header; see [`EdnsHeader`][crate::base::opt::EdnsHeader].
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Converts the record into its data.
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Parses a record from the beginning of `parser`.
    ///
    /// The record data is decoded within the bounds given by the RDLENGTH
    /// field. A decoder that reads beyond those bounds or leaves octets
    /// behind results in an error.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = u32::parse(parser)?;
        let rdlen = u16::parse(parser)?;
        let data = parse_bounded(parser, usize::from(rdlen), |parser| {
            parse_rdata(rtype, parser)
        })?;
        Ok(Record {
            owner,
            rtype,
            class,
            ttl,
            data,
        })
    }

    /// Parses a complete record section.
    ///
    /// Reads exactly `count` records as announced by the message header.
    pub fn parse_section(
        parser: &mut Parser<'_, Bytes>,
        count: u16,
    ) -> Result<Vec<Self>, ParseError> {
        let mut section = Vec::with_capacity(usize::from(count).min(64));
        for _ in 0..count {
            section.push(Record::parse(parser)?);
        }
        Ok(section)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner, self.ttl, self.class, self.rtype, self.data
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn parse_a_record() {
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\x00\x00\x0e\x10\
              \x00\x04\xc0\x00\x02\x01",
        );
        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", record.owner()), "example.com.");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 3600);
        match record.data() {
            RecordData::A(a) => {
                assert_eq!(a.addr(), Ipv4Addr::new(192, 0, 2, 1))
            }
            other => panic!("unexpected data: {:?}", other),
        }
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn rdlen_mismatch_fails() {
        // An A record whose RDLENGTH claims ten octets. The address
        // decoder reads four, leaving six behind, which is an error.
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\x00\x00\x0e\x10\
              \x00\x0a\xc0\x00\x02\x01\x00\x00\x00\x00\x00\x00",
        );
        let mut parser = Parser::from_ref(&octets);
        assert!(Record::parse(&mut parser).is_err());
    }

    #[test]
    fn rdlen_too_short_fails() {
        // RDLENGTH of two cuts the address decoder off after two octets.
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\x00\x00\x0e\x10\
              \x00\x02\xc0\x00",
        );
        let mut parser = Parser::from_ref(&octets);
        assert!(Record::parse(&mut parser).is_err());
    }

    #[test]
    fn unknown_type_keeps_octets() {
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x0f\xa0\x00\x01\x00\x00\x0e\x10\
              \x00\x05hello",
        );
        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(record.rtype(), Rtype::from_int(4000));
        match record.data() {
            RecordData::Unknown(data) => {
                assert_eq!(data.data().as_ref(), b"hello")
            }
            other => panic!("unexpected data: {:?}", other),
        }
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_section_reads_count_records() {
        let mut buf = Vec::new();
        for _ in 0..3 {
            buf.extend_from_slice(
                b"\x07example\x03com\x00\
                  \x00\x01\x00\x01\x00\x00\x0e\x10\
                  \x00\x04\xc0\x00\x02\x01",
            );
        }
        let octets = Bytes::from(buf);
        let mut parser = Parser::from_ref(&octets);
        let section = Record::parse_section(&mut parser, 3).unwrap();
        assert_eq!(section.len(), 3);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn short_section_fails() {
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\x00\x00\x0e\x10\
              \x00\x04\xc0\x00\x02\x01",
        );
        let mut parser = Parser::from_ref(&octets);
        assert!(Record::parse_section(&mut parser, 2).is_err());
    }

    #[test]
    fn compressed_name_in_rdata() {
        // A PTR record whose target is a pointer back to the owner name.
        let octets = Bytes::from_static(
            b"\x07example\x03com\x00\
              \x00\x0c\x00\x01\x00\x00\x0e\x10\
              \x00\x02\xc0\x00",
        );
        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        match record.data() {
            RecordData::Ptr(ptr) => {
                assert_eq!(format!("{}", ptr.ptrdname()), "example.com.")
            }
            other => panic!("unexpected data: {:?}", other),
        }
        assert_eq!(parser.remaining(), 0);
    }
}

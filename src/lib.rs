//! A decoder for the DNS wire format.
//!
//! This crate decodes DNS messages from the wire format defined in
//! [RFC 1035], including compressed domain names and a good selection of
//! record data types, and reconstructs the EDNS extension of the message
//! header from [RFC 6891].
//!
//! The entry point is [`Message`][base::Message]:
//!
//! ```
//! use dns_wire::base::Message;
//! use dns_wire::base::iana::Rtype;
//!
//! let wire = b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
//!              \x07example\x03com\x00\x00\x01\x00\x01";
//! let msg = Message::from_slice(wire).unwrap();
//!
//! assert_eq!(msg.header().id(), 0x1234);
//! assert!(msg.header().flags().rd);
//! assert_eq!(msg.questions().len(), 1);
//! assert_eq!(msg.questions()[0].qtype(), Rtype::A);
//! assert_eq!(format!("{}", msg.questions()[0].qname()), "example.com.");
//! ```
//!
//! The crate is organized in two top-level modules: [base] for the
//! message structure and everything else that is independent of record
//! types, and [rdata] for the record data implementations.
//!
//! Decoding record data is driven by a registry mapping record types to
//! decoder functions; data of types without a decoder is kept as raw
//! octets. See [rdata] for details.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

pub mod base;
pub mod rdata;

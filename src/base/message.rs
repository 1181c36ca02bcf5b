//! A decoded DNS message.

use super::header::{Header, HeaderCounts};
use super::iana::{Rcode, Rtype};
use super::opt::EdnsHeader;
use super::question::Question;
use super::record::Record;
use super::wire::ParseError;
use bytes::Bytes;
use octseq::parse::Parser;

//------------ Message -------------------------------------------------------

/// A DNS message decoded from its wire format.
///
/// A message consists of a header followed by four sections: the questions
/// and the answer, authority, and additional records. The header states
/// how many entries each section has and decoding reads exactly that many.
///
/// An OPT record in the additional section is folded into the message's
/// [`EdnsHeader`] during decoding and removed from the section, and the
/// rcode of the header is widened to the effective, possibly extended
/// code. If the OPT records of a message violate RFC 6891, the EDNS header
/// is [`EdnsHeader::Invalid`], the rcode becomes BADVERS, and the
/// additional section is left untouched.
#[derive(Clone, Debug)]
pub struct Message {
    header: Header,
    edns: EdnsHeader,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

impl Message {
    /// Decodes a message from its wire format.
    ///
    /// Octets past the end of the additional section are ignored. Some
    /// transports pad messages, so their presence is not an error.
    pub fn from_octets(octets: Bytes) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(&octets);
        let header = Header::parse(&mut parser)?;
        let counts = HeaderCounts::parse(&mut parser)?;
        let mut questions =
            Vec::with_capacity(usize::from(counts.qdcount()).min(64));
        for _ in 0..counts.qdcount() {
            questions.push(Question::parse(&mut parser)?);
        }
        let answers = Record::parse_section(&mut parser, counts.ancount())?;
        let authority = Record::parse_section(&mut parser, counts.nscount())?;
        let mut additional =
            Record::parse_section(&mut parser, counts.arcount())?;
        let (edns, rcode) =
            EdnsHeader::from_additional(header.flags().rcode, &additional);
        if !matches!(edns, EdnsHeader::Invalid) {
            additional.retain(|record| record.rtype() != Rtype::OPT);
        }
        Ok(Message {
            header: header.with_rcode(rcode),
            edns,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Decodes a message from a slice of its wire format.
    ///
    /// The slice is copied into owned octets first.
    pub fn from_slice(slice: &[u8]) -> Result<Self, ParseError> {
        Self::from_octets(Bytes::copy_from_slice(slice))
    }

    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns the EDNS portion of the message header.
    pub fn edns(&self) -> &EdnsHeader {
        &self.edns
    }

    /// Returns the effective response code of the message.
    ///
    /// This is the extended code if the message carries a well-formed OPT
    /// record and the plain header code otherwise.
    pub fn rcode(&self) -> Rcode {
        self.header.flags().rcode
    }

    /// Returns the question section.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    ///
    /// A well-formed OPT record does not appear here; it lives on as the
    /// message's [`EdnsHeader`].
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }
}

//============ Testing =======================================================

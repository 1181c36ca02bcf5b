//! Domain names.
//!
//! Inside a message, a domain name is a sequence of labels, each prefixed
//! by its length, terminated by the empty root label. To save space, a name
//! may end early in a compression pointer referring back to an earlier
//! occurrence in the same message. Decoding resolves all pointers and
//! produces an owned, uncompressed name, so the result never refers back
//! into the message buffer.

use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// The name is kept in uncompressed wire format: a sequence of labels of at
/// most 63 octets each, terminated by the root label, with a total length
/// of at most 255 octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    octets: Bytes,
}

impl Name {
    /// Creates the root name.
    pub fn root() -> Self {
        Name {
            octets: Bytes::from_static(b"\0"),
        }
    }

    /// Returns whether the name consists of the root label only.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns the uncompressed wire format of the name.
    pub fn as_wire_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The final root label is not included.
    pub fn iter_labels(&self) -> LabelIter<'_> {
        LabelIter {
            slice: self.octets.as_ref(),
        }
    }
}

/// # Parsing
///
impl Name {
    /// Parses a name from the wire format, following compression pointers.
    ///
    /// On success, `parser` is positioned right after the in-place part of
    /// the name, i.e., after the root label or the first compression
    /// pointer. Pointer targets are only accepted if they lie strictly
    /// before the pointer itself, which both catches corrupt messages and
    /// bounds pointer chasing on adversarial input.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let mut wire = Vec::new();

        // Phase one: labels in place. If the name ends in a root label, we
        // are done. Otherwise we hit the first compression pointer.
        let mut ptr = match Self::parse_labels(parser, &mut wire)? {
            None => return Ok(Name::from_wire(wire)),
            Some(ptr) => ptr,
        };

        // Phase two: chase pointers on a copy of the parser so the caller's
        // position stays right behind the name.
        let mut parser = *parser;
        loop {
            // The two pointer octets have already been consumed, so a
            // pointer to anything at or after `pos - 2` would point at or
            // beyond itself.
            if ptr >= parser.pos() - 2 {
                return Err(ParseError::form_error(
                    "compression pointer not pointing backwards",
                ));
            }
            parser.seek(ptr)?;
            match Self::parse_labels(&mut parser, &mut wire)? {
                None => return Ok(Name::from_wire(wire)),
                Some(next) => ptr = next,
            }
        }
    }

    /// Parses a mailbox-encoded name.
    ///
    /// Mailboxes, such as the RNAME of a SOA record or the MBOX of an RP
    /// record, are transmitted as ordinary domain names whose first label
    /// holds the local part. The wire format is identical to [`parse`],
    /// but callers decoding master-file style data on top of this crate
    /// need the distinction.
    ///
    /// [`parse`]: Self::parse
    pub fn parse_mailbox(
        parser: &mut Parser<'_, Bytes>,
    ) -> Result<Self, ParseError> {
        Self::parse(parser)
    }

    /// Appends labels to `wire` until a root label or pointer is found.
    ///
    /// Returns the pointer target if the label sequence ended in a
    /// compression pointer, `None` if it ended in the root label.
    fn parse_labels(
        parser: &mut Parser<'_, Bytes>,
        wire: &mut Vec<u8>,
    ) -> Result<Option<usize>, ParseError> {
        loop {
            let len = parser.parse_u8()?;
            if len == 0 {
                wire.push(0);
                return Ok(None);
            } else if len & 0xC0 == 0xC0 {
                let lo = parser.parse_u8()?;
                return Ok(Some(
                    (usize::from(len & 0x3F) << 8) | usize::from(lo),
                ));
            } else if len & 0xC0 != 0 {
                return Err(ParseError::form_error("unknown label type"));
            }
            // The label plus its length octet plus the eventual root label
            // must still fit the 255 octet bound.
            if wire.len() + usize::from(len) + 2 > 255 {
                return Err(ParseError::form_error("long domain name"));
            }
            wire.push(len);
            let label = parser.parse_octets(usize::from(len))?;
            wire.extend_from_slice(label.as_ref());
        }
    }

    fn from_wire(wire: Vec<u8>) -> Self {
        Name {
            octets: wire.into(),
        }
    }
}

//--- Display

impl fmt::Display for Name {
    /// Formats the name as its master file representation.
    ///
    /// Names are absolute and printed with a trailing dot; the root name
    /// prints as a single dot. Unprintable octets and octets special to
    /// the master file format are escaped.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.iter_labels() {
            for &ch in label {
                if ch == b'.' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if !(0x21..0x7F).contains(&ch) {
                    write!(f, "\\{:03}", ch)?;
                } else {
                    write!(f, "{}", ch as char)?;
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels of a name.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    slice: &'a [u8],
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        if len == 0 {
            return None;
        }
        let (label, tail) = tail.split_at(usize::from(len));
        self.slice = tail;
        Some(label)
    }
}

//============ Testing =======================================================

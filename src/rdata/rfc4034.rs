//! Record data from [RFC 4034]: DS, DNSKEY, RRSIG, and NSEC records.
//!
//! This module provides the record data types for the DNSSEC resource
//! records as decoded from the wire. No validation is performed on the
//! cryptographic material they carry.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::name::Name;
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Ds ------------------------------------------------------------

/// DS record data.
///
/// The delegation signer record carries a digest of the DNSKEY record of
/// a delegated zone. It is defined in section 5 of [RFC 4034].
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ds {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    digest: Bytes,
}

impl Ds {
    /// Creates new DS record data from its components.
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Bytes,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// Returns the key tag of the referenced DNSKEY.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the security algorithm of the referenced DNSKEY.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the digest algorithm used for the digest.
    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    /// Returns the digest of the referenced DNSKEY.
    pub fn digest(&self) -> &Bytes {
        &self.digest
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(4) {
            Some(len) => len,
            None => return Err(ParseError::ShortInput),
        };
        Ok(Ds::new(
            u16::parse(parser)?,
            SecAlg::parse(parser)?,
            DigestAlg::parse(parser)?,
            parser.parse_octets(len)?,
        ))
    }
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        for ch in self.digest.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//------------ Dnskey --------------------------------------------------------

/// DNSKEY record data.
///
/// The DNSKEY record carries a public key used for DNSSEC signing. It is
/// defined in section 2 of [RFC 4034].
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dnskey {
    flags: u16,
    protocol: u8,
    algorithm: SecAlg,
    public_key: Bytes,
}

impl Dnskey {
    /// Creates new DNSKEY record data from its components.
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Bytes,
    ) -> Self {
        Dnskey {
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    /// Returns the flags of the key.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns the protocol field.
    ///
    /// This field must be 3 for the key to be used in DNSSEC validation.
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Returns the security algorithm of the key.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the raw public key material.
    pub fn public_key(&self) -> &Bytes {
        &self.public_key
    }

    /// Returns whether the zone key flag is set.
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    /// Returns whether the secure entry point flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0x0001 != 0
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(4) {
            Some(len) => len,
            None => return Err(ParseError::ShortInput),
        };
        Ok(Dnskey::new(
            u16::parse(parser)?,
            u8::parse(parser)?,
            SecAlg::parse(parser)?,
            parser.parse_octets(len)?,
        ))
    }
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ", self.flags, self.protocol, self.algorithm)?;
        for ch in self.public_key.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//------------ Rrsig ---------------------------------------------------------

/// RRSIG record data.
///
/// The RRSIG record carries the signature over one RRset. It is defined
/// in section 3 of [RFC 4034].
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rrsig {
    type_covered: Rtype,
    algorithm: SecAlg,
    labels: u8,
    original_ttl: u32,
    expiration: u32,
    inception: u32,
    key_tag: u16,
    signer_name: Name,
    signature: Bytes,
}

impl Rrsig {
    /// Creates new RRSIG record data from its components.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: Rtype,
        algorithm: SecAlg,
        labels: u8,
        original_ttl: u32,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer_name: Name,
        signature: Bytes,
    ) -> Self {
        Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    /// Returns the record type of the covered RRset.
    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    /// Returns the security algorithm of the signature.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the number of labels of the owner name of the covered
    /// RRset, not counting a possible wildcard label.
    pub fn labels(&self) -> u8 {
        self.labels
    }

    /// Returns the original TTL of the covered RRset.
    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// Returns the expiration time of the signature as a Unix timestamp.
    pub fn expiration(&self) -> u32 {
        self.expiration
    }

    /// Returns the inception time of the signature as a Unix timestamp.
    pub fn inception(&self) -> u32 {
        self.inception
    }

    /// Returns the key tag of the signing key.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the name of the zone that holds the signing key.
    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    /// Returns the raw signature.
    pub fn signature(&self) -> &Bytes {
        &self.signature
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let type_covered = Rtype::parse(parser)?;
        let algorithm = SecAlg::parse(parser)?;
        let labels = u8::parse(parser)?;
        let original_ttl = u32::parse(parser)?;
        let expiration = u32::parse(parser)?;
        let inception = u32::parse(parser)?;
        let key_tag = u16::parse(parser)?;
        let signer_name = Name::parse(parser)?;
        let len = parser.remaining();
        let signature = parser.parse_octets(len)?;
        Ok(Rrsig::new(
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        ))
    }
}

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} ",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name
        )?;
        for ch in self.signature.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//------------ Nsec ----------------------------------------------------------

/// NSEC record data.
///
/// The NSEC record links to the next owner name in canonical zone order
/// and states the record types present at its own owner name. It is
/// defined in section 4 of [RFC 4034].
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nsec {
    next_name: Name,
    types: RtypeBitmap,
}

impl Nsec {
    /// Creates new NSEC record data from its components.
    pub fn new(next_name: Name, types: RtypeBitmap) -> Self {
        Nsec { next_name, types }
    }

    /// Returns the next owner name in canonical zone order.
    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// Returns the type bitmap.
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Nsec::new(
            Name::parse(parser)?,
            RtypeBitmap::parse(parser)?,
        ))
    }
}

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.next_name, self.types)
    }
}

//------------ RtypeBitmap ---------------------------------------------------

/// The type bitmap of NSEC and NSEC3 record data.
///
/// The bitmap is a sequence of window blocks, each consisting of a window
/// number, a length octet, and one to 32 octets of bitmap. Bit zero of
/// the bitmap is the most significant bit of the first octet. The format
/// is defined in section 4.1.2 of [RFC 4034].
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RtypeBitmap {
    octets: Bytes,
}

impl RtypeBitmap {
    /// Creates a type bitmap from its wire format.
    ///
    /// Checks that the octets are a correctly encoded sequence of window
    /// blocks.
    pub fn from_octets(octets: Bytes) -> Result<Self, ParseError> {
        let mut data = octets.as_ref();
        while !data.is_empty() {
            // Window number, length octet, that many octets of bitmap.
            let len = usize::from(*data.get(1).ok_or_else(|| {
                ParseError::form_error("truncated type bitmap window")
            })?);
            if len == 0 || len > 32 {
                return Err(ParseError::form_error(
                    "invalid type bitmap window length",
                ));
            }
            if data.len() < len + 2 {
                return Err(ParseError::form_error(
                    "truncated type bitmap window",
                ));
            }
            data = &data[len + 2..];
        }
        Ok(RtypeBitmap { octets })
    }

    /// Returns the raw octets of the bitmap.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns whether the bitmap contains the given record type.
    pub fn contains(&self, rtype: Rtype) -> bool {
        self.iter().any(|item| item == rtype)
    }

    /// Returns an iterator over the record types in the bitmap.
    pub fn iter(&self) -> RtypeBitmapIter<'_> {
        RtypeBitmapIter {
            data: self.octets.as_ref(),
            octet: 0,
            bit: 0,
        }
    }

    /// Parses a type bitmap taking up the remainder of `parser`.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = parser.remaining();
        Self::from_octets(parser.parse_octets(len)?)
    }
}

impl fmt::Display for RtypeBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(rtype) = iter.next() {
            write!(f, "{}", rtype)?;
            for rtype in iter {
                write!(f, " {}", rtype)?
            }
        }
        Ok(())
    }
}

//------------ RtypeBitmapIter -----------------------------------------------

/// An iterator over the record types in a type bitmap.
#[derive(Clone, Debug)]
pub struct RtypeBitmapIter<'a> {
    /// The remaining bitmap data, starting with the current window block.
    data: &'a [u8],

    /// The current octet within the current window's bitmap.
    octet: usize,

    /// The current bit within that octet.
    bit: u16,
}

impl<'a> Iterator for RtypeBitmapIter<'a> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Rtype> {
        loop {
            if self.data.is_empty() {
                return None;
            }
            let window = u16::from(self.data[0]);
            let len = usize::from(self.data[1]);
            if self.octet >= len {
                self.data = &self.data[len + 2..];
                self.octet = 0;
                self.bit = 0;
                continue;
            }
            let octet = self.data[2 + self.octet];
            while self.bit < 8 {
                let bit = self.bit;
                self.bit += 1;
                if octet & (0x80 >> bit) != 0 {
                    return Some(Rtype::from_int(
                        window << 8 | (self.octet as u16) << 3 | bit,
                    ));
                }
            }
            self.octet += 1;
            self.bit = 0;
        }
    }
}

//============ Testing =======================================================

//! Record data from [RFC 7344]: CDS and CDNSKEY records.
//!
//! The child DS and child DNSKEY records let a child zone signal desired
//! updates to its delegation. On the wire they are identical to DS and
//! DNSKEY.
//!
//! [RFC 7344]: https://tools.ietf.org/html/rfc7344

use crate::base::iana::{DigestAlg, SecAlg};
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Cds -----------------------------------------------------------

/// CDS record data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cds {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    digest: Bytes,
}

impl Cds {
    /// Creates new CDS record data from its components.
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Bytes,
    ) -> Self {
        Cds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// Returns the key tag of the referenced key.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the security algorithm of the referenced key.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the digest algorithm used for the digest.
    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    /// Returns the digest of the referenced key.
    pub fn digest(&self) -> &Bytes {
        &self.digest
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(4) {
            Some(len) => len,
            None => return Err(ParseError::ShortInput),
        };
        Ok(Cds::new(
            u16::parse(parser)?,
            SecAlg::parse(parser)?,
            DigestAlg::parse(parser)?,
            parser.parse_octets(len)?,
        ))
    }
}

impl fmt::Display for Cds {
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

//------------ Cdnskey -------------------------------------------------------

/// CDNSKEY record data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cdnskey {
    flags: u16,
    protocol: u8,
    algorithm: SecAlg,
    public_key: Bytes,
}

impl Cdnskey {
    /// Creates new CDNSKEY record data from its components.
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Bytes,
    ) -> Self {
        Cdnskey {
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

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(4) {
            Some(len) => len,
            None => return Err(ParseError::ShortInput),
        };
        Ok(Cdnskey::new(
            u16::parse(parser)?,
            u8::parse(parser)?,
            SecAlg::parse(parser)?,
            parser.parse_octets(len)?,
        ))
    }
}

impl fmt::Display for Cdnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ", self.flags, self.protocol, self.algorithm)?;
        for ch in self.public_key.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//============ Testing =======================================================

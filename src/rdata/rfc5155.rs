//! Record data from [RFC 5155]: NSEC3 and NSEC3PARAM records.
//!
//! [RFC 5155]: https://tools.ietf.org/html/rfc5155

use super::rfc4034::RtypeBitmap;
use crate::base::iana::Nsec3HashAlg;
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Nsec3 ---------------------------------------------------------

/// NSEC3 record data.
///
/// Like NSEC, the NSEC3 record proves the non-existence of names, but it
/// covers hashed owner names. It is defined in section 3 of [RFC 5155].
///
/// [RFC 5155]: https://tools.ietf.org/html/rfc5155
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nsec3 {
    hash_algorithm: Nsec3HashAlg,
    flags: u8,
    iterations: u16,
    salt: Bytes,
    next_owner: Bytes,
    types: RtypeBitmap,
}

impl Nsec3 {
    /// Creates new NSEC3 record data from its components.
    pub fn new(
        hash_algorithm: Nsec3HashAlg,
        flags: u8,
        iterations: u16,
        salt: Bytes,
        next_owner: Bytes,
        types: RtypeBitmap,
    ) -> Self {
        Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        }
    }

    /// Returns the hash algorithm used for owner names.
    pub fn hash_algorithm(&self) -> Nsec3HashAlg {
        self.hash_algorithm
    }

    /// Returns the flags field.
    ///
    /// Currently only the least significant bit, the opt-out flag, is
    /// assigned.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the opt-out flag is set.
    pub fn opt_out(&self) -> bool {
        self.flags & 0x01 != 0
    }

    /// Returns the number of additional hash iterations.
    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    /// Returns the salt mixed into the hash.
    pub fn salt(&self) -> &Bytes {
        &self.salt
    }

    /// Returns the hash of the next owner name in hash order.
    pub fn next_owner(&self) -> &Bytes {
        &self.next_owner
    }

    /// Returns the type bitmap.
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let hash_algorithm = Nsec3HashAlg::parse(parser)?;
        let flags = u8::parse(parser)?;
        let iterations = u16::parse(parser)?;
        let salt_len = usize::from(u8::parse(parser)?);
        let salt = parser.parse_octets(salt_len)?;
        let hash_len = usize::from(u8::parse(parser)?);
        let next_owner = parser.parse_octets(hash_len)?;
        let types = RtypeBitmap::parse(parser)?;
        Ok(Nsec3::new(
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        ))
    }
}

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        fmt_salt(f, &self.salt)?;
        f.write_str(" ")?;
        for ch in self.next_owner.iter() {
            write!(f, "{:02x}", ch)?
        }
        write!(f, " {}", self.types)
    }
}

//------------ Nsec3param ----------------------------------------------------

/// NSEC3PARAM record data.
///
/// The NSEC3PARAM record carries the NSEC3 hashing parameters used by a
/// zone. It is defined in section 4 of [RFC 5155].
///
/// [RFC 5155]: https://tools.ietf.org/html/rfc5155
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nsec3param {
    hash_algorithm: Nsec3HashAlg,
    flags: u8,
    iterations: u16,
    salt: Bytes,
}

impl Nsec3param {
    /// Creates new NSEC3PARAM record data from its components.
    pub fn new(
        hash_algorithm: Nsec3HashAlg,
        flags: u8,
        iterations: u16,
        salt: Bytes,
    ) -> Self {
        Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        }
    }

    /// Returns the hash algorithm used for owner names.
    pub fn hash_algorithm(&self) -> Nsec3HashAlg {
        self.hash_algorithm
    }

    /// Returns the flags field.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns the number of additional hash iterations.
    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    /// Returns the salt mixed into the hash.
    pub fn salt(&self) -> &Bytes {
        &self.salt
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let hash_algorithm = Nsec3HashAlg::parse(parser)?;
        let flags = u8::parse(parser)?;
        let iterations = u16::parse(parser)?;
        let salt_len = usize::from(u8::parse(parser)?);
        let salt = parser.parse_octets(salt_len)?;
        Ok(Nsec3param::new(hash_algorithm, flags, iterations, salt))
    }
}

impl fmt::Display for Nsec3param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.hash_algorithm, self.flags, self.iterations
        )?;
        fmt_salt(f, &self.salt)
    }
}

//------------ Helpers -------------------------------------------------------

/// Formats a salt in presentation format, a dash if it is empty.
fn fmt_salt(f: &mut fmt::Formatter, salt: &Bytes) -> fmt::Result {
    if salt.is_empty() {
        f.write_str("-")
    } else {
        for ch in salt.iter() {
            write!(f, "{:02x}", ch)?
        }
        Ok(())
    }
}

//============ Testing =======================================================

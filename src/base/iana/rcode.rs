//! DNS response codes.

int_enum! {
    /// DNS response codes.
    ///
    /// The response code indicates what happened when processing a query.
    /// The message header only carries the low four bits of the code; with
    /// EDNS, an OPT pseudo record contributes eight more bits via the upper
    /// byte of its TTL field, extending the code to twelve bits as defined
    /// in [RFC 6891]. This type is wide enough for the extended code; a
    /// code decoded straight from the header always has its upper bits
    /// zero.
    ///
    /// [RFC 6891]: https://tools.ietf.org/html/rfc6891
    =>
    Rcode, u16;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// The server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// The server encountered an internal failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// The queried domain name does not exist.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// The server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// The server refused to perform the operation.
    (REFUSED => 5, "REFUSED")

    /// A name exists that should not.
    (YXDOMAIN => 6, "YXDOMAIN")

    /// An RR set exists that should not.
    (YXRRSET => 7, "YXRRSET")

    /// An RR set that should exist does not.
    (NXRRSET => 8, "NXRRSET")

    /// The server is not authoritative for the zone.
    (NOTAUTH => 9, "NOTAUTH")

    /// A name is not within the zone named in an update.
    (NOTZONE => 10, "NOTZONE")

    /// Bad EDNS version.
    ///
    /// This value doubles as the sentinel for EDNS information that could
    /// not be reconstructed from a message; see
    /// [`EdnsHeader`][crate::base::opt::EdnsHeader].
    (BADVERS => 16, "BADVERS")

    /// A bad or missing server cookie.
    (BADCOOKIE => 23, "BADCOOKIE")
}

/// # Extended response codes
///
/// The twelve bit extended code is deliberately fragmented across the
/// message: the low four bits stay in the header, the high eight bits are
/// transmitted as the top byte of the OPT record's TTL field. These methods
/// put the fragments together and take them apart again.
impl Rcode {
    /// Creates an extended rcode value from its parts.
    ///
    /// `rcode` contributes its low four bits, `ext` becomes bits 4 to 11.
    pub fn from_parts(rcode: Rcode, ext: u8) -> Rcode {
        Rcode::from_int(u16::from(ext) << 4 | (rcode.to_int() & 0x0F))
    }

    /// Returns the two parts of an extended rcode value.
    pub fn to_parts(self) -> (Rcode, u8) {
        (Rcode::from_int(self.to_int() & 0x0F), self.ext())
    }

    /// Returns the extension octet of the extended rcode.
    pub fn ext(self) -> u8 {
        (self.to_int() >> 4) as u8
    }
}

#[cfg(test)]
mod test {
    use super::Rcode;

    #[test]
    fn from_parts() {
        assert_eq!(Rcode::from_parts(Rcode::NOERROR, 0), Rcode::NOERROR);
        assert_eq!(Rcode::from_parts(Rcode::NOERROR, 1), Rcode::BADVERS);
        assert_eq!(
            Rcode::from_parts(Rcode::SERVFAIL, 0x12),
            Rcode::from_int(0x122)
        );
        // Only the low nibble of the header code may contribute.
        assert_eq!(
            Rcode::from_parts(Rcode::from_int(0xFFFF), 0),
            Rcode::from_int(0x000F)
        );
    }

    #[test]
    fn to_parts() {
        assert_eq!(Rcode::BADVERS.to_parts(), (Rcode::NOERROR, 1));
        assert_eq!(
            Rcode::from_int(0x122).to_parts(),
            (Rcode::SERVFAIL, 0x12)
        );
        assert_eq!(Rcode::NXDOMAIN.to_parts(), (Rcode::NXDOMAIN, 0));
    }
}

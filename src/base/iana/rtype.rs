//! Resource record types.

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind
    /// of data it contains. This type wraps that value. Constants exist
    /// for all the types this crate knows how to decode; everything else
    /// is decoded into unknown record data.
    ///
    /// The values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For responsible person.
    (RP => 17, "RP")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// Server selection.
    (SRV => 33, "SRV")

    /// Delegation name.
    (DNAME => 39, "DNAME")

    /// The EDNS OPT pseudo record type.
    (OPT => 41, "OPT")

    /// Delegation signer.
    (DS => 43, "DS")

    /// DNSSEC signature.
    (RRSIG => 46, "RRSIG")

    /// Next secure record.
    (NSEC => 47, "NSEC")

    /// DNS public key.
    (DNSKEY => 48, "DNSKEY")

    /// Hashed authenticated denial of existence.
    (NSEC3 => 50, "NSEC3")

    /// Hashed authenticated denial of existence parameters.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA certificate association.
    (TLSA => 52, "TLSA")

    /// Child delegation signer.
    (CDS => 59, "CDS")

    /// Child DNSKEY.
    (CDNSKEY => 60, "CDNSKEY")
}

#[cfg(test)]
mod test {
    use super::Rtype;

    #[test]
    fn rtype_display() {
        assert_eq!(format!("{}", Rtype::AAAA), "AAAA");
        assert_eq!(format!("{}", Rtype::from_int(1234)), "1234");
    }

    #[test]
    fn rtype_int_roundtrip() {
        assert_eq!(Rtype::from_int(41), Rtype::OPT);
        assert_eq!(Rtype::TLSA.to_int(), 52);
    }
}

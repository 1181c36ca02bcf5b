//! EDNS option codes.

int_enum! {
    /// EDNS option codes.
    ///
    /// Options in an OPT record are identified by a 16 bit code. The
    /// decoder treats options opaquely; the constants merely give the
    /// well-known codes a name.
    =>
    OptionCode, u16;

    /// Long-lived queries.
    (LLQ => 1, "LLQ")

    /// Update leases.
    (UL => 2, "UL")

    /// Name server identifier.
    (NSID => 3, "NSID")

    /// DNSSEC algorithm understood.
    (DAU => 5, "DAU")

    /// DS hash understood.
    (DHU => 6, "DHU")

    /// NSEC3 hash understood.
    (N3U => 7, "N3U")

    /// EDNS client subnet.
    (CLIENT_SUBNET => 8, "edns-client-subnet")

    /// EDNS expire.
    (EXPIRE => 9, "EDNS EXPIRE")

    /// DNS cookies.
    (COOKIE => 10, "COOKIE")

    /// EDNS TCP keepalive.
    (TCP_KEEPALIVE => 11, "edns-tcp-keepalive")

    /// Padding.
    (PADDING => 12, "Padding")

    /// DNSSEC chain query.
    (CHAIN => 13, "CHAIN")

    /// EDNS key tag.
    (KEY_TAG => 14, "edns-key-tag")

    /// Extended DNS errors.
    (EXTENDED_ERROR => 15, "Extended DNS Error")
}

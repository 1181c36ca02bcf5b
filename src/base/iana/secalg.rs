//! DNSSEC security algorithm numbers.

int_enum! {
    /// Security algorithm numbers.
    ///
    /// These numbers identify the public key algorithm of DNSKEY, RRSIG,
    /// and DS records. The decoder only parses them structurally.
    =>
    SecAlg, u8;

    /// RSA/MD5 (deprecated).
    (RSAMD5 => 1, "RSAMD5")

    /// Diffie-Hellman.
    (DH => 2, "DH")

    /// DSA/SHA1.
    (DSA => 3, "DSA")

    /// RSA/SHA-1.
    (RSASHA1 => 5, "RSASHA1")

    /// DSA-NSEC3-SHA1.
    (DSA_NSEC3_SHA1 => 6, "DSA-NSEC3-SHA1")

    /// RSASHA1-NSEC3-SHA1.
    (RSASHA1_NSEC3_SHA1 => 7, "RSASHA1-NSEC3-SHA1")

    /// RSA/SHA-256.
    (RSASHA256 => 8, "RSASHA256")

    /// RSA/SHA-512.
    (RSASHA512 => 10, "RSASHA512")

    /// GOST R 34.10-2001.
    (ECC_GOST => 12, "ECC-GOST")

    /// ECDSA curve P-256 with SHA-256.
    (ECDSAP256SHA256 => 13, "ECDSAP256SHA256")

    /// ECDSA curve P-384 with SHA-384.
    (ECDSAP384SHA384 => 14, "ECDSAP384SHA384")

    /// Ed25519.
    (ED25519 => 15, "ED25519")

    /// Ed448.
    (ED448 => 16, "ED448")
}

//! Delegation signer digest algorithm numbers.

int_enum! {
    /// Digest algorithm numbers used by DS and CDS records.
    =>
    DigestAlg, u8;

    /// SHA-1.
    (SHA1 => 1, "SHA-1")

    /// SHA-256.
    (SHA256 => 2, "SHA-256")

    /// GOST R 34.11-94.
    (GOST => 3, "GOST R 34.11-94")

    /// SHA-384.
    (SHA384 => 4, "SHA-384")
}

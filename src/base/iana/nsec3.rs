//! NSEC3 hash algorithm numbers.

int_enum! {
    /// NSEC3 hash algorithm numbers.
    =>
    Nsec3HashAlg, u8;

    /// SHA-1.
    (SHA1 => 1, "SHA-1")
}

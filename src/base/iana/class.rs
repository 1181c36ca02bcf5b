//! DNS class values.

int_enum! {
    /// DNS class values.
    ///
    /// In practice, the only relevant class is IN, but the field is still
    /// carried by every resource record. For OPT pseudo records, the class
    /// field is reused as the requestor's UDP payload size, so arbitrary
    /// values must round-trip.
    =>
    Class, u16;

    /// The Internet class.
    (IN => 1, "IN")

    /// The Chaos class.
    (CH => 3, "CH")

    /// The Hesiod class.
    (HS => 4, "HS")

    /// Class to delete records in UPDATE requests.
    (NONE => 254, "NONE")

    /// Any class.
    (ANY => 255, "ANY")
}

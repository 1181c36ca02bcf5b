//! DNS opcodes.

int_enum! {
    /// DNS opcodes.
    ///
    /// The opcode specifies the kind of query a message contains. It lives
    /// in bits 11 to 14 of the flags word of the message header.
    =>
    Opcode, u8;

    /// A standard query.
    (QUERY => 0, "QUERY")

    /// An inverse query (obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request.
    (STATUS => 2, "STATUS")

    /// A NOTIFY query.
    (NOTIFY => 4, "NOTIFY")

    /// A dynamic update query.
    (UPDATE => 5, "UPDATE")
}

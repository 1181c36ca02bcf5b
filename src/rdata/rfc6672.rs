//! Record data from [RFC 6672]: the DNAME record.
//!
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

name_rdata! {
    /// DNAME record data.
    ///
    /// The DNAME record redirects an entire subtree of the name space to
    /// another subtree, as defined in [RFC 6672].
    ///
    /// [RFC 6672]: https://tools.ietf.org/html/rfc6672
    Dname, target
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use bytes::Bytes;
    use octseq::parse::Parser;

    #[test]
    fn dname_parse() {
        let octets =
            Bytes::from_static(b"\x07example\x03net\x00");
        let mut parser = Parser::from_ref(&octets);
        let dname = Dname::parse(&mut parser).unwrap();
        assert_eq!(format!("{}", dname.target()), "example.net.");
        assert_eq!(format!("{}", dname), "example.net.");
    }
}

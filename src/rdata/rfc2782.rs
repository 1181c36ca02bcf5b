//! Record data from [RFC 2782]: the SRV record.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::name::Name;
use crate::base::wire::{Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ Srv -----------------------------------------------------------

/// SRV record data.
///
/// SRV records specify the location of a server for a specific protocol
/// and service at an owner name. They are defined in [RFC 2782].
///
/// [RFC 2782]: https://tools.ietf.org/html/rfc2782
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    /// Creates new SRV record data from its components.
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Returns the priority of the target host.
    ///
    /// Clients are supposed to contact the host with the lowest priority
    /// they can reach.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight for selecting among hosts of equal priority.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port of the service on the target host.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the name of the target host.
    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        Ok(Srv::new(
            u16::parse(parser)?,
            u16::parse(parser)?,
            u16::parse(parser)?,
            Name::parse(parser)?,
        ))
    }
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn srv_parse() {
        let octets = Bytes::from_static(
            b"\x00\x0a\x00\x05\x14\x95\
              \x04sip1\x07example\x03com\x00",
        );
        let mut parser = Parser::from_ref(&octets);
        let srv = Srv::parse(&mut parser).unwrap();
        assert_eq!(srv.priority(), 10);
        assert_eq!(srv.weight(), 5);
        assert_eq!(srv.port(), 5269);
        assert_eq!(format!("{}", srv.target()), "sip1.example.com.");
    }
}

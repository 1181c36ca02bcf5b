//! Decodes a complete response the way a stub resolver would see it.

use dns_wire::base::iana::{Class, OptionCode, Rcode, Rtype};
use dns_wire::base::Message;
use dns_wire::rdata::RecordData;
use std::net::Ipv4Addr;

// A response to "www.example.com. IN A": a CNAME chain in the answer
// section, a delegation in the authority section, a glue record and an
// OPT record in the additional section. Names make heavy use of
// compression.
const RESPONSE: &[u8] = b"\xbe\xef\x85\x80\
      \x00\x01\x00\x02\x00\x01\x00\x02\
      \x03www\x07example\x03com\x00\x00\x01\x00\x01\
      \xc0\x0c\x00\x05\x00\x01\x00\x00\x01\x2c\
      \x00\x07\x04mail\xc0\x10\
      \xc0\x2d\x00\x01\x00\x01\x00\x00\x0e\x10\
      \x00\x04\xc6\x33\x64\x01\
      \xc0\x10\x00\x02\x00\x01\x00\x00\x0e\x10\
      \x00\x06\x03ns1\xc0\x10\
      \xc0\x50\x00\x01\x00\x01\x00\x00\x0e\x10\
      \x00\x04\xc6\x33\x64\x35\
      \x00\x00\x29\x04\xd0\x00\x00\x80\x00\
      \x00\x0c\x00\x0a\x00\x08\x01\x02\x03\x04\x05\x06\x07\x08";

#[test]
fn full_response() {
    let msg = Message::from_slice(RESPONSE).unwrap();

    assert_eq!(msg.header().id(), 0xbeef);
    let flags = msg.header().flags();
    assert!(flags.qr && flags.aa && flags.rd && flags.ra);
    assert!(!flags.tc);
    assert_eq!(msg.rcode(), Rcode::NOERROR);

    assert_eq!(msg.questions().len(), 1);
    let question = &msg.questions()[0];
    assert_eq!(format!("{}", question.qname()), "www.example.com.");
    assert_eq!(question.qtype(), Rtype::A);

    assert_eq!(msg.answers().len(), 2);
    let cname = &msg.answers()[0];
    assert_eq!(format!("{}", cname.owner()), "www.example.com.");
    assert_eq!(cname.ttl(), 300);
    match cname.data() {
        RecordData::Cname(data) => {
            assert_eq!(format!("{}", data.cname()), "mail.example.com.")
        }
        other => panic!("unexpected data: {:?}", other),
    }
    let a = &msg.answers()[1];
    assert_eq!(format!("{}", a.owner()), "mail.example.com.");
    assert_eq!(a.class(), Class::IN);
    match a.data() {
        RecordData::A(data) => {
            assert_eq!(data.addr(), Ipv4Addr::new(198, 51, 100, 1))
        }
        other => panic!("unexpected data: {:?}", other),
    }

    assert_eq!(msg.authority().len(), 1);
    let ns = &msg.authority()[0];
    assert_eq!(format!("{}", ns.owner()), "example.com.");
    match ns.data() {
        RecordData::Ns(data) => {
            assert_eq!(format!("{}", data.nsdname()), "ns1.example.com.")
        }
        other => panic!("unexpected data: {:?}", other),
    }

    // The OPT record becomes the EDNS header; only the glue remains.
    assert_eq!(msg.additional().len(), 1);
    let glue = &msg.additional()[0];
    assert_eq!(format!("{}", glue.owner()), "ns1.example.com.");

    let edns = msg.edns().as_edns().unwrap();
    assert_eq!(edns.version(), 0);
    assert_eq!(edns.udp_payload_size(), 1232);
    assert!(edns.dnssec_ok());
    assert_eq!(edns.options().len(), 1);
    assert_eq!(edns.options()[0].code(), OptionCode::COOKIE);
    assert_eq!(
        edns.options()[0].data().as_ref(),
        b"\x01\x02\x03\x04\x05\x06\x07\x08"
    );
}

#[test]
fn display_record() {
    let msg = Message::from_slice(RESPONSE).unwrap();
    assert_eq!(
        format!("{}", msg.answers()[1]),
        "mail.example.com. 3600 IN A 198.51.100.1"
    );
}

#[test]
fn truncating_anywhere_never_panics() {
    for len in 0..RESPONSE.len() {
        let _ = Message::from_slice(&RESPONSE[..len]);
    }
}

//! The basic building blocks of the DNS wire format.
//!
//! This module contains the types for everything in a DNS message except
//! the record data, which lives in [rdata][crate::rdata]. The most likely
//! entry point is [`Message`], which decodes a complete message.

//--- Re-exports

pub use self::charstr::CharStr;
pub use self::header::{Flags, Header, HeaderCounts};
pub use self::message::Message;
pub use self::name::Name;
pub use self::opt::{Edns, EdnsHeader};
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::{FormError, ParseError};

//--- Modules

pub mod charstr;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod opt;
pub mod question;
pub mod record;
pub mod wire;

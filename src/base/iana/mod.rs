//! DNS parameter types maintained by IANA.
//!
//! Numerous parameters of the DNS protocol are carried as integers on the
//! wire but have well-defined, named values maintained in IANA registries.
//! Each such parameter gets its own type wrapping the raw integer, created
//! via the [`int_enum!`] macro: constants for the registered values, plain
//! conversions from and to the integer, and a wire-format `parse` function.
//! Unknown values survive decoding unchanged, which is what keeps the
//! decoder open to record types and codes assigned after it was written.

#[macro_use]
mod macros;

pub mod class;
pub mod digestalg;
pub mod nsec3;
pub mod opcode;
pub mod opt;
pub mod rcode;
pub mod rtype;
pub mod secalg;

pub use self::class::Class;
pub use self::digestalg::DigestAlg;
pub use self::nsec3::Nsec3HashAlg;
pub use self::opcode::Opcode;
pub use self::opt::OptionCode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;
pub use self::secalg::SecAlg;

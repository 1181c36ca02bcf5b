//! Macros for implementing record data types.

/// Defines a record data type wrapping a single domain name.
///
/// Several record types consist of nothing but a domain name. This macro
/// generates the struct, its accessors, parsing, and display for them.
macro_rules! name_rdata {
    ( $(#[$attr:meta])* $target:ident, $field:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            /// Creates new record data from a domain name.
            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            /// Returns the domain name carried by the record data.
            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            /// Parses the record data from the beginning of `parser`.
            pub fn parse(
                parser: &mut ::octseq::parse::Parser<'_, ::bytes::Bytes>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }
        }

        impl ::core::fmt::Display for $target {
            fn fmt(
                &self, f: &mut ::core::fmt::Formatter,
            ) -> ::core::fmt::Result {
                write!(f, "{}", self.$field)
            }
        }
    };
}

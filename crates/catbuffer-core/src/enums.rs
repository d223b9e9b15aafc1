//! Closed enumerations backed by a fixed-width scalar.
//!
//! [`wire_enum!`](crate::wire_enum) declares a `#[repr]` enum together with
//! its raw-value conversions and codec. Decode reads the scalar and matches it
//! against the declared members; anything else is
//! [`ProtocolError::UnknownEnumValue`](crate::ProtocolError::UnknownEnumValue),
//! never a default.

/// Declare a wire enumeration.
///
/// ```
/// catbuffer_core::wire_enum! {
///     /// Link or unlink.
///     pub enum LinkAction: u8 {
///         Unlink = 0,
///         Link = 1,
///     }
/// }
/// assert_eq!(LinkAction::from_raw(1), Some(LinkAction::Link));
/// assert_eq!(LinkAction::from_raw(2), None);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Encoded width in bytes.
            pub const SIZE: usize = ::core::mem::size_of::<$repr>();

            /// Every declared member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            #[inline]
            pub const fn raw(self) -> $repr {
                self as $repr
            }

            pub fn from_raw(value: $repr) -> Option<Self> {
                match value {
                    $(x if x == $name::$variant as $repr => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::ProtocolError;

            fn try_from(value: $repr) -> $crate::Result<Self> {
                $name::from_raw(value).ok_or($crate::ProtocolError::UnknownEnumValue {
                    name: stringify!($name),
                    raw: value as u64,
                })
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::Encode for $name {
            #[inline]
            fn size(&self) -> usize {
                Self::SIZE
            }

            #[inline]
            fn encode(&self, out: &mut $crate::BytesMut) {
                $crate::Encode::encode(&self.raw(), out)
            }
        }

        impl $crate::Decode for $name {
            fn decode(r: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                let raw = <$repr as $crate::Decode>::decode(r)?;
                <$name as ::core::convert::TryFrom<$repr>>::try_from(raw)
            }
        }
    };
}

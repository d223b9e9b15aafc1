//! Declarative primitive field types.
//!
//! - [`scalar!`](crate::scalar) wraps a fixed-width integer in a named newtype
//!   (amounts, heights, ids).
//! - [`fixed_bytes!`](crate::fixed_bytes) declares an opaque byte buffer of a
//!   constant length (addresses, hashes, keys, signatures, proof parts). No
//!   length is written on the wire.
//!
//! Both expand to `Encode`/`Decode` impls that consume exactly the declared
//! width or fail with `Truncated`.

/// Declare a newtype over a little-endian integer.
///
/// ```
/// catbuffer_core::scalar! {
///     /// Block height.
///     pub struct Height(u64);
/// }
/// assert_eq!(Height::SIZE, 8);
/// ```
#[macro_export]
macro_rules! scalar {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($inner:ty);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Encoded width in bytes.
            pub const SIZE: usize = ::core::mem::size_of::<$inner>();

            pub const fn new(value: $inner) -> Self {
                $name(value)
            }

            pub const fn value(self) -> $inner {
                self.0
            }
        }

        impl ::core::convert::From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::Encode for $name {
            #[inline]
            fn size(&self) -> usize {
                Self::SIZE
            }

            #[inline]
            fn encode(&self, out: &mut $crate::BytesMut) {
                $crate::Encode::encode(&self.0, out)
            }
        }

        impl $crate::Decode for $name {
            #[inline]
            fn decode(r: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                <$inner as $crate::Decode>::decode(r).map($name)
            }
        }
    };
}

/// Declare an opaque fixed-length byte buffer.
///
/// ```
/// catbuffer_core::fixed_bytes! {
///     /// 32-byte hash.
///     pub struct Hash256[32];
/// }
/// let h = Hash256::from_hex(&"AB".repeat(32)).unwrap();
/// assert_eq!(h.as_bytes()[0], 0xAB);
/// ```
#[macro_export]
macro_rules! fixed_bytes {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident[$len:expr];
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(pub [u8; $len]);

        impl $name {
            /// Encoded width in bytes.
            pub const SIZE: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }

            pub const fn zeroed() -> Self {
                $name([0u8; $len])
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Parse from a hex string of exactly `2 * SIZE` digits.
            pub fn from_hex(s: &str) -> $crate::Result<Self> {
                let mut bytes = [0u8; $len];
                $crate::hex::decode_to_slice(s, &mut bytes).map_err(|e| {
                    $crate::ProtocolError::invalid(format!(
                        "{}: {}",
                        stringify!($name),
                        e
                    ))
                })?;
                Ok($name(bytes))
            }

            pub fn to_hex(&self) -> String {
                $crate::hex::encode_upper(self.0)
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::zeroed()
            }
        }

        impl ::core::convert::From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl $crate::Encode for $name {
            #[inline]
            fn size(&self) -> usize {
                Self::SIZE
            }

            #[inline]
            fn encode(&self, out: &mut $crate::BytesMut) {
                out.extend_from_slice(&self.0);
            }
        }

        impl $crate::Decode for $name {
            #[inline]
            fn decode(r: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                r.read_array::<{ $len }>().map($name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Decode, Encode, ProtocolError};

    crate::scalar! {
        struct Amount(u64);
    }

    crate::scalar! {
        struct Epoch(u32);
    }

    crate::fixed_bytes! {
        struct Address[24];
    }

    crate::fixed_bytes! {
        struct Signature[64];
    }

    #[test]
    fn scalar_is_little_endian() {
        let bytes = Amount(1).to_bytes();
        assert_eq!(&bytes[..], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Amount::from_bytes(&bytes).unwrap(), Amount(1));
        assert_eq!(Epoch(0x0102_0304).to_bytes()[..], [4, 3, 2, 1]);
    }

    #[test]
    fn address_round_trips_byte_for_byte() {
        let raw: Vec<u8> = (0u8..24).collect();
        let address = Address::from_bytes(&raw).unwrap();
        assert_eq!(address.size(), 24);
        assert_eq!(&address.to_bytes()[..], &raw[..]);
    }

    #[test]
    fn short_buffer_is_truncated() {
        let err = Signature::from_bytes(&[0u8; 63]).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Truncated {
                needed: 64,
                available: 63,
                ..
            }
        ));
    }

    #[test]
    fn hex_parsing_checks_length() {
        assert!(Address::from_hex("00").is_err());
        let a = Address::from_hex(&"0A".repeat(24)).unwrap();
        assert_eq!(a.to_string(), "0A".repeat(24));
        assert_eq!(format!("{a:?}"), format!("Address({})", "0A".repeat(24)));
    }
}

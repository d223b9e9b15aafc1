//! Flag-sets: enumerations whose members combine by bitwise OR.
//!
//! [`wire_flags!`](crate::wire_flags) declares a set type with the
//! enumeration wire form (one scalar of the declared width). The set logic
//! comes from a private `bitflags` type; the public type only wraps a raw
//! scalar that is known to hold declared bits, so a value with undeclared
//! bits cannot be constructed and every value re-decodes to itself.
//! Decoding is strict: a scalar carrying bits outside the declared members is
//! rejected with `UnknownEnumValue` rather than truncated. The empty set
//! encodes as 0 whether or not a zero "none" member exists.

/// Declare a flag-set backed by a fixed-width scalar.
///
/// ```
/// catbuffer_core::wire_flags! {
///     pub struct MosaicFlags: u8 {
///         const SUPPLY_MUTABLE = 1;
///         const TRANSFERABLE = 2;
///         const RESTRICTABLE = 4;
///     }
/// }
/// let f = MosaicFlags::SUPPLY_MUTABLE | MosaicFlags::RESTRICTABLE;
/// assert_eq!(f.bits(), 0x05);
/// assert!(MosaicFlags::try_from_raw(0x08).is_err());
/// assert_eq!(MosaicFlags::from_bits_truncate(0x0D).bits(), 0x05);
/// ```
#[macro_export]
macro_rules! wire_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $repr:ident {
            $(
                $(#[$fmeta:meta])*
                const $flag:ident = $value:expr;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($repr);

        const _: () = {
            $crate::bitflags::bitflags! {
                #[derive(Clone, Copy)]
                struct Inner: $repr {
                    $(const $flag = $value;)+
                }
            }

            impl $name {
                $(
                    $(#[$fmeta])*
                    pub const $flag: Self = Self(Inner::$flag.bits());
                )+

                /// Encoded width in bytes.
                pub const SIZE: usize = ::core::mem::size_of::<$repr>();

                #[inline]
                fn inner(self) -> Inner {
                    Inner::from_bits_truncate(self.0)
                }

                pub const fn empty() -> Self {
                    Self(0)
                }

                pub const fn all() -> Self {
                    Self(Inner::all().bits())
                }

                pub const fn bits(&self) -> $repr {
                    self.0
                }

                /// `None` when `raw` carries undeclared bits.
                pub fn from_bits(raw: $repr) -> Option<Self> {
                    Inner::from_bits(raw).map(|set| Self(set.bits()))
                }

                /// Drop undeclared bits.
                pub fn from_bits_truncate(raw: $repr) -> Self {
                    Self(Inner::from_bits_truncate(raw).bits())
                }

                /// Build a set from a raw scalar, rejecting undeclared bits.
                pub fn try_from_raw(raw: $repr) -> $crate::Result<Self> {
                    Self::from_bits(raw).ok_or($crate::ProtocolError::UnknownEnumValue {
                        name: stringify!($name),
                        raw: raw as u64,
                    })
                }

                pub const fn is_empty(&self) -> bool {
                    self.0 == 0
                }

                pub const fn is_all(&self) -> bool {
                    self.0 == Self::all().0
                }

                pub const fn contains(&self, other: Self) -> bool {
                    self.0 & other.0 == other.0
                }

                pub const fn intersects(&self, other: Self) -> bool {
                    self.0 & other.0 != 0
                }

                #[must_use]
                pub const fn union(self, other: Self) -> Self {
                    Self(self.0 | other.0)
                }

                #[must_use]
                pub const fn intersection(self, other: Self) -> Self {
                    Self(self.0 & other.0)
                }

                #[must_use]
                pub const fn difference(self, other: Self) -> Self {
                    Self(self.0 & !other.0)
                }

                #[must_use]
                pub const fn complement(self) -> Self {
                    Self(!self.0 & Self::all().0)
                }

                pub fn insert(&mut self, other: Self) {
                    self.0 |= other.0;
                }

                pub fn remove(&mut self, other: Self) {
                    self.0 &= !other.0;
                }

                pub fn set(&mut self, other: Self, value: bool) {
                    if value {
                        self.insert(other);
                    } else {
                        self.remove(other);
                    }
                }

                /// Declared members present in the set, in declaration order.
                pub fn iter_names(&self) -> impl Iterator<Item = (&'static str, Self)> {
                    self.inner().iter_names().map(|(name, set)| (name, Self(set.bits())))
                }
            }

            impl ::core::ops::BitOr for $name {
                type Output = Self;

                fn bitor(self, other: Self) -> Self {
                    self.union(other)
                }
            }

            impl ::core::ops::BitOrAssign for $name {
                fn bitor_assign(&mut self, other: Self) {
                    self.insert(other);
                }
            }

            impl ::core::ops::BitAnd for $name {
                type Output = Self;

                fn bitand(self, other: Self) -> Self {
                    self.intersection(other)
                }
            }

            impl ::core::ops::BitAndAssign for $name {
                fn bitand_assign(&mut self, other: Self) {
                    self.0 &= other.0;
                }
            }

            impl ::core::ops::Sub for $name {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    self.difference(other)
                }
            }

            impl ::core::ops::Not for $name {
                type Output = Self;

                fn not(self) -> Self {
                    self.complement()
                }
            }

            impl ::core::fmt::Display for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    if self.is_empty() {
                        return f.write_str("NONE");
                    }
                    for (i, (flag, _)) in self.iter_names().enumerate() {
                        if i > 0 {
                            f.write_str(" | ")?;
                        }
                        f.write_str(flag)?;
                    }
                    Ok(())
                }
            }

            impl ::core::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    write!(f, "{}({})", stringify!($name), self)
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
                fn decode(r: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                    let raw = <$repr as $crate::Decode>::decode(r)?;
                    Self::try_from_raw(raw)
                }
            }
        };
    };
}

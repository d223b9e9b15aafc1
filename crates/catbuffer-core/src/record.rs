//! Composite records from a declarative field list.
//!
//! [`record!`](crate::record) takes the field list in wire order and expands
//! to the struct, a constructor, and `Encode`/`Decode` impls that walk the
//! list in that same order. Entry forms:
//!
//! ```text
//! pub name: Type,                          stored field, codec of Type
//! pub name: Vec<T> = counted(n),           n elements, n read earlier by `count`
//! pub name: Vec<T> = sized(n),             elements spanning n bytes, read by `size`
//! pub name: Vec<T> = sized(n, align 8),    ... each element padded to 8 bytes
//! pub name: Vec<T> = remaining,            elements until the reader is empty
//! pub name: Vec<T> = remaining(align 8),
//! count n: u8 => name,                     element count of `name`, not stored
//! size n: u32 => name,                     padded byte size of `name`, not stored
//! size n: u32 => name align 8,
//! reserved name: u32,                      always zero, not stored
//! ```
//!
//! Records without `count`/`size` entries get public fields as declared and
//! an infallible `new`. Records with derived prefixes get a `new` that
//! checks every collection fits its prefix and returns `Result`, plus
//! read-only accessors; declare their fields private so the check cannot be
//! bypassed.
//!
//! A record that needs a conditional layout is written by hand against the
//! same helpers in [`collection`](crate::collection).

/// Declare a composite record. See the [module docs](crate::record).
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@parse
            meta[$(#[$meta])*] vis[$vis] name[$name]
            fields[] entries[] checks[]
            rest[$($body)*]
        );
    };

    // ---- derived and reserved entries --------------------------------------

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[reserved $ename:ident : $ety:ty, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)*]
            entries[$($entries)* [reserved $ename [$ety] []]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[count $ename:ident : $p:ty => $target:ident, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)*]
            entries[$($entries)* [count $ename [$p] [$target]]]
            checks[$($checks)* $crate::collection::fits::<$p>($target.len())?;]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[size $ename:ident : $p:ty => $target:ident align $a:literal, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)*]
            entries[$($entries)* [bytesize $ename [$p] [$target $a]]]
            checks[$($checks)*
                $crate::collection::fits::<$p>($crate::collection::padded_size(&$target, $a))?;]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[size $ename:ident : $p:ty => $target:ident, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)*] entries[$($entries)*] checks[$($checks)*]
            rest[size $ename : $p => $target align 0, $($rest)*]
        );
    };

    // ---- stored collections -------------------------------------------------

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty = counted($n:ident), $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [counted $field [$fty] [$n]]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty = sized($n:ident, align $a:literal),
            $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [sized $field [$fty] [$n $a]]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty = sized($n:ident), $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [sized $field [$fty] [$n 0]]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty = remaining(align $a:literal),
            $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [remaining $field [$fty] [$a]]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty = remaining, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [remaining $field [$fty] [0]]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    // ---- plain stored field -------------------------------------------------

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$($fields:tt)*] entries[$($entries:tt)*] checks[$($checks:tt)*]
        rest[$(#[$fm:meta])* $fvis:vis $field:ident : $fty:ty, $($rest:tt)*]
    ) => {
        $crate::record!(@parse meta[$($meta)*] vis[$vis] name[$name]
            fields[$($fields)* { [$(#[$fm])*] [$fvis] $field [$fty] }]
            entries[$($entries)* [field $field [$fty] []]]
            checks[$($checks)*]
            rest[$($rest)*]
        );
    };

    // ---- emit ---------------------------------------------------------------

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$({ [$($fattr:tt)*] [$fvis:vis] $field:ident [$fty:ty] })*]
        entries[$($entries:tt)*]
        checks[]
        rest[]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $($($fattr)* $fvis $field: $fty,)*
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $fty),*) -> Self {
                $name { $($field),* }
            }
        }

        $crate::record!(@codec $name fields[$($field)*] entries[$($entries)*]);
    };

    (@parse meta[$($meta:tt)*] vis[$vis:vis] name[$name:ident]
        fields[$({ [$($fattr:tt)*] [$fvis:vis] $field:ident [$fty:ty] })*]
        entries[$($entries:tt)*]
        checks[$($checks:tt)+]
        rest[]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $($($fattr)* $fvis $field: $fty,)*
        }

        impl $name {
            /// Fails with `CountOverflow` when a collection does not fit
            /// its prefix.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $fty),*) -> $crate::Result<Self> {
                $($checks)*
                Ok($name { $($field),* })
            }

            $(
                pub fn $field(&self) -> &$fty {
                    &self.$field
                }
            )*
        }

        $crate::record!(@codec $name fields[$($field)*] entries[$($entries)*]);
    };

    (@codec $name:ident
        fields[$($field:ident)*]
        entries[$([$kind:ident $ename:ident [$ety:ty] [$($extra:tt)*]])*]
    ) => {
        impl $crate::Encode for $name {
            fn size(&self) -> usize {
                0 $(+ $crate::__record_entry!(size self $kind $ename [$ety] [$($extra)*]))*
            }

            fn encode(&self, out: &mut $crate::BytesMut) {
                $($crate::__record_entry!(encode self out $kind $ename [$ety] [$($extra)*]);)*
            }
        }

        impl $crate::Decode for $name {
            fn decode(r: &mut $crate::Reader<'_>) -> $crate::Result<Self> {
                $($crate::__record_entry!(decode r $kind $ename [$ety] [$($extra)*]);)*
                Ok($name { $($field),* })
            }
        }
    };
}

/// Per-entry size / encode / decode for [`record!`](crate::record).
#[doc(hidden)]
#[macro_export]
macro_rules! __record_entry {
    // ---- size ---------------------------------------------------------------
    (size $s:tt field $e:ident [$t:ty] []) => {
        $crate::Encode::size(&$s.$e)
    };
    (size $s:tt counted $e:ident [$t:ty] [$n:ident]) => {
        $crate::Encode::size(&$s.$e)
    };
    (size $s:tt sized $e:ident [$t:ty] [$n:ident $a:literal]) => {
        $crate::collection::padded_size(&$s.$e, $a)
    };
    (size $s:tt remaining $e:ident [$t:ty] [$a:literal]) => {
        $crate::collection::padded_size(&$s.$e, $a)
    };
    (size $s:tt reserved $e:ident [$t:ty] []) => {
        ::core::mem::size_of::<$t>()
    };
    (size $s:tt count $e:ident [$p:ty] [$target:ident]) => {
        ::core::mem::size_of::<$p>()
    };
    (size $s:tt bytesize $e:ident [$p:ty] [$target:ident $a:literal]) => {
        ::core::mem::size_of::<$p>()
    };

    // ---- encode -------------------------------------------------------------
    (encode $s:tt $o:ident field $e:ident [$t:ty] []) => {
        $crate::Encode::encode(&$s.$e, $o)
    };
    (encode $s:tt $o:ident counted $e:ident [$t:ty] [$n:ident]) => {
        $crate::Encode::encode(&$s.$e, $o)
    };
    (encode $s:tt $o:ident sized $e:ident [$t:ty] [$n:ident $a:literal]) => {
        $crate::collection::encode_padded(&$s.$e, $a, $o)
    };
    (encode $s:tt $o:ident remaining $e:ident [$t:ty] [$a:literal]) => {
        $crate::collection::encode_padded(&$s.$e, $a, $o)
    };
    (encode $s:tt $o:ident reserved $e:ident [$t:ty] []) => {
        $crate::Encode::encode(&<$t as ::core::default::Default>::default(), $o)
    };
    (encode $s:tt $o:ident count $e:ident [$p:ty] [$target:ident]) => {
        $crate::collection::encode_count::<$p>(&$s.$target, $o)
    };
    (encode $s:tt $o:ident bytesize $e:ident [$p:ty] [$target:ident $a:literal]) => {
        $crate::collection::encode_byte_size::<$p, _>(&$s.$target, $a, $o)
    };

    // ---- decode -------------------------------------------------------------
    (decode $r:ident field $e:ident [$t:ty] []) => {
        let $e = <$t as $crate::Decode>::decode($r)?;
    };
    (decode $r:ident counted $e:ident [$t:ty] [$n:ident]) => {
        let $e: $t = $crate::collection::read_counted($r, $n)?;
    };
    (decode $r:ident sized $e:ident [$t:ty] [$n:ident $a:literal]) => {
        let $e: $t = $crate::collection::read_sized($r, $n, $a)?;
    };
    (decode $r:ident remaining $e:ident [$t:ty] [$a:literal]) => {
        let $e: $t = $crate::collection::read_remaining_with($r, $a, $crate::Decode::decode)?;
    };
    (decode $r:ident reserved $e:ident [$t:ty] []) => {
        $r.skip_zeroed(::core::mem::size_of::<$t>(), stringify!($e))?;
    };
    (decode $r:ident count $e:ident [$p:ty] [$target:ident]) => {
        let $e = $crate::collection::LengthPrefix::to_len(<$p as $crate::Decode>::decode($r)?)?;
    };
    (decode $r:ident bytesize $e:ident [$p:ty] [$target:ident $a:literal]) => {
        let $e = $crate::collection::LengthPrefix::to_len(<$p as $crate::Decode>::decode($r)?)?;
    };
}

#[cfg(test)]
mod tests {
    use crate::{Decode, Encode, ProtocolError, Reader};

    crate::record! {
        /// Two plain fields.
        struct Pair {
            pub id: u64,
            pub amount: u64,
        }
    }

    crate::record! {
        struct Bundle {
            tag: u16,
            count pairs_count: u8 => pairs,
            size notes_size: u16 => notes,
            reserved bundle_reserved: u32,
            pairs: Vec<Pair> = counted(pairs_count),
            notes: Vec<u8> = sized(notes_size),
            trailer: Vec<u32> = remaining,
        }
    }

    fn bundle() -> Bundle {
        Bundle::new(
            7,
            vec![Pair::new(1, 10), Pair::new(2, 20)],
            b"hi".to_vec(),
            vec![0xAABB_CCDD],
        )
        .unwrap()
    }

    #[test]
    fn plain_record_size_is_sum_of_fields() {
        let pair = Pair::new(1, 2);
        assert_eq!(pair.size(), 16);
        assert_eq!(Pair::from_bytes(&pair.to_bytes()).unwrap(), pair);
    }

    #[test]
    fn derived_prefixes_are_written_in_declared_order() {
        let b = bundle();
        let bytes = b.to_bytes();
        assert_eq!(bytes.len(), b.size());
        assert_eq!(&bytes[..2], &[7, 0]);
        assert_eq!(bytes[2], 2, "pairs count");
        assert_eq!(&bytes[3..5], &[2, 0], "notes byte size");
        assert_eq!(&bytes[5..9], &[0, 0, 0, 0], "reserved");
        assert_eq!(Bundle::from_bytes(&bytes).unwrap(), b);
        assert_eq!(b.pairs().len(), 2);
    }

    #[test]
    fn count_overflow_is_rejected_at_construction() {
        let pairs = vec![Pair::new(0, 0); 256];
        assert_eq!(
            Bundle::new(0, pairs, vec![], vec![]),
            Err(ProtocolError::CountOverflow {
                count: 256,
                max: 255
            })
        );
    }

    #[test]
    fn nonzero_reserved_fails_and_rewinds() {
        let mut bytes = bundle().to_bytes().to_vec();
        bytes[6] = 1;
        let mut r = Reader::new(&bytes);
        assert_eq!(
            r.read::<Bundle>(),
            Err(ProtocolError::NonZeroReserved {
                field: "bundle_reserved"
            })
        );
        assert_eq!(r.position(), 0);
    }
}

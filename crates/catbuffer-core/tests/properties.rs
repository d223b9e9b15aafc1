// crates/catbuffer-core/tests/properties.rs
//
// Round-trip and size-agreement properties.

use catbuffer_core::{collection, BytesMut, Decode, Encode, Reader};
use proptest::prelude::*;

catbuffer_core::wire_flags! {
    pub struct Restriction: u16 {
        const ADDRESS = 0x0001;
        const MOSAIC = 0x0002;
        const OPERATION = 0x0004;
        const OUTGOING = 0x4000;
        const BLOCK = 0x8000;
    }
}

catbuffer_core::fixed_bytes! {
    pub struct Key[32];
}

catbuffer_core::record! {
    pub struct Item {
        pub key: Key,
        pub weight: u32,
        pub delta: i16,
    }
}

catbuffer_core::record! {
    pub struct Batch {
        pub tag: u8,
        size items_size: u32 => items align 8,
        count notes_count: u16 => notes,
        reserved batch_reserved: u32,
        items: Vec<Item> = sized(items_size, align 8),
        notes: Vec<u64> = counted(notes_count),
        tail: Vec<u16> = remaining,
    }
}

fn item() -> impl Strategy<Value = Item> {
    (any::<[u8; 32]>(), any::<u32>(), any::<i16>())
        .prop_map(|(key, weight, delta)| Item::new(Key::new(key), weight, delta))
}

fn batch() -> impl Strategy<Value = Batch> {
    (
        any::<u8>(),
        prop::collection::vec(item(), 0..6),
        prop::collection::vec(any::<u64>(), 0..6),
        prop::collection::vec(any::<u16>(), 0..6),
    )
        .prop_map(|(tag, items, notes, tail)| {
            Batch::new(tag, items, notes, tail).expect("small collections fit")
        })
}

proptest! {
    #[test]
    fn integers_round_trip(a in any::<u64>(), b in any::<u32>(), c in any::<i8>()) {
        prop_assert_eq!(u64::from_bytes(&a.to_bytes()).unwrap(), a);
        prop_assert_eq!(u32::from_bytes(&b.to_bytes()).unwrap(), b);
        prop_assert_eq!(i8::from_bytes(&c.to_bytes()).unwrap(), c);
    }

    #[test]
    fn flag_subsets_round_trip(raw in any::<u16>()) {
        let subset = Restriction::from_bits_truncate(raw);
        let bytes = subset.to_bytes();
        prop_assert_eq!(bytes.len(), 2);
        prop_assert_eq!(Restriction::from_bytes(&bytes).unwrap(), subset);
        if raw & !Restriction::all().bits() != 0 {
            prop_assert!(Restriction::from_bytes(&raw.to_le_bytes()).is_err());
        }
    }

    #[test]
    fn batch_round_trips_and_size_agrees(b in batch()) {
        let bytes = b.to_bytes();
        prop_assert_eq!(bytes.len(), b.size());
        prop_assert_eq!(Batch::from_bytes(&bytes).unwrap(), b);
    }

    #[test]
    fn padded_items_are_eight_aligned(items in prop::collection::vec(item(), 0..8)) {
        let mut out = BytesMut::new();
        collection::encode_padded(&items, 8, &mut out);
        prop_assert_eq!(out.len() % 8, 0);
        prop_assert_eq!(out.len(), collection::padded_size(&items, 8));

        let mut r = Reader::new(&out);
        let decoded: Vec<Item> = collection::read_sized(&mut r, out.len(), 8).unwrap();
        prop_assert_eq!(decoded, items);
        prop_assert!(r.is_empty());
    }

    #[test]
    fn fixed_count_consumes_exactly_n(extra in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut wire = vec![0xAB; 5 * 2];
        wire.extend_from_slice(&extra);
        let mut r = Reader::new(&wire);
        let fixed = r.read::<[u16; 5]>().unwrap();
        prop_assert_eq!(fixed, [0xABAB; 5]);
        prop_assert_eq!(r.remaining(), extra.len());
    }
}

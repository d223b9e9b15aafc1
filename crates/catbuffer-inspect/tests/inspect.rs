// crates/catbuffer-inspect/tests/inspect.rs
//
// Library entry points of the inspector on hand-built payloads.

use catbuffer_inspect::input::parse_hex;
use catbuffer_inspect::{
    inspect, list_kinds, verify_roundtrip, Config, Decoded, Family, OutputMode, Registries,
};
use catbuffer_schema::receipt::BalanceChangeReceipt;
use catbuffer_schema::state::{MosaicDefinition, MosaicEntry, MosaicProperties};
use catbuffer_schema::transaction::{TransferBody, TRANSACTION_VERSION};
use catbuffer_schema::{
    Address, Amount, BlockDuration, Encode, EntityType, Height, Mosaic, MosaicFlags, MosaicId,
    NetworkType, PublicKey, Receipt, ReceiptBody, ReceiptHeader, ReceiptType, Signature,
    StateHeader, Timestamp, Transaction, TransactionHeader, UnresolvedAddress,
};

fn transfer() -> Vec<u8> {
    let header = TransactionHeader::new(
        Signature::zeroed(),
        PublicKey::zeroed(),
        TRANSACTION_VERSION,
        NetworkType::Mainnet,
        EntityType::Transfer,
        Amount(1),
        Timestamp(2),
    );
    let body = TransferBody::new(UnresolvedAddress::zeroed(), vec![], b"hi".to_vec()).unwrap();
    Transaction::new(header, body.into()).unwrap().to_bytes().to_vec()
}

fn mosaic_entry() -> MosaicEntry {
    MosaicEntry::new(
        StateHeader::CURRENT,
        MosaicId(0x6BED_913F_A202_23F8),
        Amount(8_999_999_999_000_000),
        MosaicDefinition::new(
            Height(1),
            Address::new([0x68; 24]),
            1,
            MosaicProperties::new(MosaicFlags::TRANSFERABLE, 6, BlockDuration(0)),
        ),
    )
}

#[test]
fn transaction_summary_line() {
    let bytes = transfer();
    let out = inspect(Family::Transaction, &bytes, &Config::default(), &Registries::new()).unwrap();
    assert_eq!(out, format!("transaction, Transfer v1, {}", bytes.len()));
}

#[test]
fn hex_input_through_to_debug_output() {
    let text = hex::encode(transfer());
    let bytes = parse_hex(&text, 1024).unwrap();
    let config = Config {
        output: OutputMode::Debug,
        ..Config::default()
    };
    let out = inspect(Family::Transaction, &bytes, &config, &Registries::new()).unwrap();
    assert!(out.contains("TransferBody"), "{out}");
}

#[test]
fn receipt_and_state_families() {
    let registries = Registries::new();
    let receipt = Receipt::new(
        ReceiptHeader::current(ReceiptType::HarvestFee),
        ReceiptBody::BalanceChange(BalanceChangeReceipt::new(
            Mosaic::new(MosaicId(1), Amount(5)),
            Address::zeroed(),
        )),
    )
    .unwrap();
    let out =
        inspect(Family::Receipt, &receipt.to_bytes(), &Config::default(), &registries).unwrap();
    assert!(out.starts_with("receipt, HarvestFee, "), "{out}");

    let entry = mosaic_entry().to_bytes();
    let out = inspect(Family::MosaicEntry, &entry, &Config::default(), &registries).unwrap();
    assert_eq!(out, format!("mosaic-entry, -, {}", entry.len()));
}

#[test]
fn wrong_family_is_a_decode_error() {
    let bytes = transfer();
    let err =
        inspect(Family::Embedded, &bytes, &Config::default(), &Registries::new()).unwrap_err();
    assert!(format!("{err:#}").contains("cannot decode"), "{err:#}");
}

#[test]
fn oversized_input_is_rejected() {
    let config = Config {
        max_input_bytes: 16,
        ..Config::default()
    };
    let err = inspect(Family::Transaction, &transfer(), &config, &Registries::new()).unwrap_err();
    assert!(err.to_string().contains("limit is 16"), "{err}");
}

#[test]
fn roundtrip_check_reports_the_first_difference() {
    let entry = mosaic_entry();
    let mut input = entry.to_bytes().to_vec();
    assert!(verify_roundtrip(&Decoded::MosaicEntry(entry.clone()), &input).is_ok());

    input[10] ^= 0xFF;
    let err = verify_roundtrip(&Decoded::MosaicEntry(entry), &input).unwrap_err();
    assert!(err.to_string().contains("at byte 10"), "{err}");
}

#[test]
fn kinds_of_layered_families_only() {
    let registries = Registries::new();
    let receipts = list_kinds(Family::Receipt, &registries).unwrap();
    assert!(receipts.contains(&"HarvestFee".to_string()));
    assert!(!receipts.contains(&"TransactionGroup".to_string()));

    let embedded = list_kinds(Family::Embedded, &registries).unwrap();
    assert_eq!(embedded.len(), 22);
    assert!(embedded.contains(&"Transfer v1".to_string()));

    let blocks = list_kinds(Family::Block, &registries).unwrap();
    assert_eq!(blocks.len(), 3);

    assert!(list_kinds(Family::HashLock, &registries).is_err());
}

#[test]
fn every_family_has_a_distinct_name() {
    let mut names: Vec<_> = Family::ALL.iter().map(|f| f.name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 13);
}

//! Text output for decoded entities.
//!
//! Summary format, one line per entity:
//!
//! - `family, kind, size`
//!
//! e.g. `transaction, Transfer v1, 182`. Families with a single layout print
//! `-` as their kind.

use crate::config::OutputMode;
use crate::family::Decoded;

pub fn format_summary(decoded: &Decoded) -> String {
    format!("{}, {}, {}", decoded.family(), decoded.kind(), decoded.size())
}

pub fn format_debug(decoded: &Decoded) -> String {
    format!("{decoded:#?}")
}

pub fn format_output(decoded: &Decoded, mode: OutputMode) -> String {
    match mode {
        OutputMode::Summary => format_summary(decoded),
        OutputMode::Debug => format_debug(decoded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_schema::state::{HashLockInfo, MultisigEntry};
    use catbuffer_schema::{
        Address, Amount, Hash256, Height, LockStatus, Mosaic, MosaicId, StateHeader,
    };

    #[test]
    fn single_layout_family_prints_a_dash() {
        let lock = HashLockInfo::new(
            StateHeader::CURRENT,
            Address::zeroed(),
            Mosaic::new(MosaicId(1), Amount(10)),
            Height(5),
            LockStatus::Unused,
            Hash256::zeroed(),
        );
        let decoded = Decoded::HashLock(lock);
        assert_eq!(format_summary(&decoded), "hash-lock, -, 83");
    }

    #[test]
    fn debug_output_names_the_fields() {
        let entry =
            MultisigEntry::new(StateHeader::CURRENT, 1, 1, Address::zeroed(), vec![], vec![])
                .unwrap();
        let text = format_output(&Decoded::Multisig(entry), OutputMode::Debug);
        assert!(text.starts_with("Multisig("));
        assert!(text.contains("min_approval: 1"));
    }
}

//! Catalogue Shape Tests.
//!
//! Checks ordering across the single-byte, `0xFC`, and `0xFD` groups and the
//! position of well-known instructions.

use wasm_index::catalogue::{self, Entry};

#[test]
fn catalogue_starts_with_unreachable() {
    let first = catalogue::entries().next().unwrap();
    assert_eq!(first.descriptor().map(|d| d.name), Some(r"\UNREACHABLE"));
}

#[test]
fn groups_appear_in_encoding_order() {
    let group = |entry: &Entry| {
        let opcode = entry.opcode();
        if opcode.starts_with(r"\hex{FC}~") {
            1
        } else if opcode.starts_with(r"\hex{FD}~") {
            2
        } else {
            0
        }
    };
    let groups: Vec<u8> = catalogue::entries().map(group).collect();
    assert!(groups.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(groups.iter().filter(|&&g| g == 1).count(), 18);
    assert_eq!(groups.iter().filter(|&&g| g == 2).count(), 236);
}

#[test]
fn reserved_slots_are_unassigned_single_bytes() {
    for entry in catalogue::entries().filter(|e| e.is_reserved()) {
        assert!(entry.descriptor().is_none());
        assert_eq!(entry.opcode().len(), r"\hex{00}".len(), "{}", entry.opcode());
    }
}

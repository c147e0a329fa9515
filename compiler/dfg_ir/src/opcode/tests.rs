use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::{Opcode, UnknownOpcode};

#[test]
fn all_lists_every_opcode_once() {
    let unique: HashSet<Opcode> = Opcode::ALL.iter().copied().collect();
    assert_eq!(unique.len(), Opcode::COUNT);
}

#[test]
fn raw_values_follow_declaration_order() {
    for (i, &op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.raw()), i, "{op} is out of order");
        assert_eq!(Opcode::from_raw(op.raw()), Some(op));
    }
}

#[test]
fn from_raw_rejects_values_past_the_end() {
    let past_end = u16::try_from(Opcode::COUNT).unwrap_or(u16::MAX);
    assert_eq!(Opcode::from_raw(past_end), None);
    assert_eq!(Opcode::from_raw(u16::MAX), None);
}

#[test]
fn names_match_variants() {
    assert_eq!(Opcode::ArithAdd.name(), "ArithAdd");
    assert_eq!(Opcode::GetByValMegamorphic.to_string(), "GetByValMegamorphic");
}

#[test]
fn u16_conversions_round_trip() {
    for &op in Opcode::ALL {
        assert_eq!(Opcode::try_from(u16::from(op)), Ok(op));
    }
}

#[test]
fn unknown_raw_values_are_rejected() {
    let past_end = u16::try_from(Opcode::COUNT).unwrap_or(u16::MAX);
    let err = Opcode::try_from(past_end);
    assert_eq!(err, Err(UnknownOpcode(past_end)));
    assert_eq!(
        UnknownOpcode(past_end).to_string(),
        format!("unknown opcode {past_end}")
    );
}

#[test]
fn switch_is_distinct_from_entry_switch() {
    let names: HashSet<&str> = Opcode::ALL.iter().map(|op| op.name()).collect();
    assert!(names.contains("Switch"));
    assert!(names.contains("EntrySwitch"));
    assert_eq!(Opcode::Switch.to_string(), "Switch");
}

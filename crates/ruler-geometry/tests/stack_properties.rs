//! Property tests for box sequence invariants.

use quickcheck_macros::quickcheck;
use ruler_geometry::{BoxId, BoxStack, Measurements};

fn filled(n: u8) -> BoxStack {
    let mut stack = BoxStack::new();
    for i in 0..n {
        let _ = stack.push(Measurements::from_fields(&format!("{i}px"), "", "", ""));
    }
    stack
}

#[quickcheck]
fn push_grows_by_one_with_increasing_ids(n: u8) -> bool {
    let mut stack = filled(n % 32);
    let before = stack.len();
    let expected = stack.next_id();
    let id = stack.push(Measurements::from_fields("1px", "", "", ""));
    stack.len() == before + 1 && id == expected && stack.outermost().map(|b| b.id) == Some(id)
}

#[quickcheck]
fn remove_preserves_relative_order(n: u8, pick: u8) -> bool {
    let n = n % 32 + 1;
    let mut stack = filled(n);
    let victim = BoxId(u32::from(pick % n) + 1);
    let expected: Vec<BoxId> = stack.iter().map(|b| b.id).filter(|&id| id != victim).collect();
    stack.remove(victim) && stack.iter().map(|b| b.id).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn clear_restarts_ids(n: u8) -> bool {
    let mut stack = filled(n % 32);
    stack.clear();
    stack.is_empty() && stack.push(Measurements::from_fields("", "1px", "", "")) == BoxId::FIRST
}

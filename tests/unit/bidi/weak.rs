use super::*;
use crate::bidi::classify::char_info;

fn run(text: &str, sos: BidiType) -> Vec<BidiType> {
    let mut infos: Vec<CharInfo> = text.chars().map(char_info).collect();
    let seq = IsolatingRunSequence {
        indices: (0..infos.len()).collect(),
        level: 0,
        sos,
        eos: BidiType::L,
    };
    resolve_weak(&mut infos, &seq);
    infos.iter().map(|i| i.ty).collect()
}

use BidiType::{AN, EN, L, ON, R};

#[test]
fn nsm_copies_previous_type() {
    assert_eq!(run("\u{05D0}\u{0300}", L), vec![R, R]);
    assert_eq!(run("\u{0300}", R), vec![R]);
    assert_eq!(run("\u{2069}\u{0300}", L), vec![BidiType::PDI, ON]);
}

#[test]
fn european_digits_after_arabic_letters_become_arabic() {
    assert_eq!(run("\u{0627}1", L), vec![R, AN]);
    assert_eq!(run("\u{05D0}1", L), vec![R, EN]);
}

#[test]
fn single_separators_between_numbers() {
    assert_eq!(run("1+2", R), vec![EN, EN, EN]);
    assert_eq!(run("1,2", R), vec![EN, EN, EN]);
    assert_eq!(run("\u{0661},\u{0662}", R), vec![AN, AN, AN]);
    assert_eq!(run("1++2", R), vec![EN, ON, ON, EN]);
}

#[test]
fn terminators_adjacent_to_numbers() {
    assert_eq!(run("$1", R), vec![EN, EN]);
    assert_eq!(run("1%%", R), vec![EN, EN, EN]);
    assert_eq!(run("$ ", R), vec![ON, BidiType::WS]);
}

#[test]
fn european_numbers_after_l_become_l() {
    assert_eq!(run("a 1", R), vec![L, BidiType::WS, L]);
    assert_eq!(run("1", L), vec![L]);
    assert_eq!(run("1", R), vec![EN]);
}

use super::*;
use crate::bidi::classify::char_info;
use crate::bidi::explicit::{remove_formatting, resolve_explicit};

fn resolved(text: &str, paragraph_level: u8) -> Vec<CharInfo> {
    let mut infos: Vec<CharInfo> = text.chars().map(char_info).collect();
    resolve_explicit(&mut infos, paragraph_level);
    remove_formatting(&mut infos);
    infos
}

#[test]
fn plain_text_is_one_sequence() {
    let infos = resolved("ab c", 0);
    let seqs = isolating_run_sequences(&infos, 0);
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].indices, vec![0, 1, 2, 3]);
    assert_eq!(seqs[0].sos, BidiType::L);
    assert_eq!(seqs[0].eos, BidiType::L);
}

#[test]
fn isolate_delimiters_join_the_outer_sequence() {
    // a RLI b PDI c
    let infos = resolved("a\u{2067}b\u{2069}c", 0);
    let seqs = isolating_run_sequences(&infos, 0);
    assert_eq!(seqs.len(), 2);
    assert_eq!(seqs[0].indices, vec![0, 1, 3, 4]);
    assert_eq!(seqs[1].indices, vec![2]);
    assert_eq!(seqs[1].level, 1);
    assert_eq!(seqs[1].sos, BidiType::R);
    assert_eq!(seqs[1].eos, BidiType::R);
}

#[test]
fn gaps_are_skipped() {
    // a RLE b PDF c: embedding characters become gaps
    let infos = resolved("a\u{202B}b\u{202C}c", 0);
    let seqs = isolating_run_sequences(&infos, 0);
    let all: Vec<Vec<usize>> = seqs.iter().map(|s| s.indices.clone()).collect();
    assert_eq!(all, vec![vec![0], vec![2], vec![4]]);
    assert_eq!(seqs[1].sos, BidiType::R);
    assert_eq!(seqs[1].eos, BidiType::R);
}

#[test]
fn unmatched_initiator_ends_with_paragraph_eos() {
    // a LRI b (no PDI) in an RTL paragraph
    let infos = resolved("a\u{2066}b", 1);
    let seqs = isolating_run_sequences(&infos, 1);
    assert_eq!(seqs[0].indices, vec![0, 1]);
    assert_eq!(seqs[0].eos, BidiType::R);
}

#[test]
fn terminator_and_initiator_scans_agree() {
    let infos = resolved("\u{2067}\u{2066}x\u{2069}\u{2069}\u{2069}", 0);
    assert_eq!(find_isolate_terminator(&infos, 0), Some(4));
    assert_eq!(find_isolate_terminator(&infos, 1), Some(3));
    assert_eq!(find_isolate_initiator(&infos, 4), Some(0));
    assert_eq!(find_isolate_initiator(&infos, 3), Some(1));
    assert_eq!(find_isolate_initiator(&infos, 5), None);
}

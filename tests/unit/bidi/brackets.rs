use super::*;
use crate::bidi::classify::char_info;

fn sequence(text: &str, level: u8) -> (Vec<CharInfo>, IsolatingRunSequence) {
    let infos: Vec<CharInfo> = text.chars().map(char_info).collect();
    let dir = if level % 2 == 0 { BidiType::L } else { BidiType::R };
    let seq = IsolatingRunSequence {
        indices: (0..infos.len()).collect(),
        level,
        sos: dir,
        eos: dir,
    };
    (infos, seq)
}

fn resolved(text: &str, level: u8) -> Vec<BidiType> {
    let (mut infos, seq) = sequence(text, level);
    resolve_brackets(&mut infos, &seq);
    infos.iter().map(|i| i.ty).collect()
}

#[test]
fn pairs_nest_and_skip_mismatches() {
    let (infos, seq) = sequence("a(b[c)d]", 0);
    assert_eq!(locate_pairs(&infos, &seq), vec![(1, 5)]);

    let (infos, seq) = sequence("(a(b)c)", 0);
    assert_eq!(locate_pairs(&infos, &seq), vec![(0, 6), (2, 4)]);
}

#[test]
fn angle_bracket_equivalence_is_kept() {
    let (infos, seq) = sequence("\u{2329}x\u{3009}", 0);
    assert_eq!(locate_pairs(&infos, &seq), vec![(0, 2)]);
    let (infos, seq) = sequence("\u{3008}x\u{232A}", 0);
    assert_eq!(locate_pairs(&infos, &seq), vec![(0, 2)]);
}

#[test]
fn bracket_stack_overflow_stops_pairing() {
    let text = format!("{}x{}", "(".repeat(64), ")".repeat(64));
    let (infos, seq) = sequence(&text, 0);
    assert!(locate_pairs(&infos, &seq).is_empty());

    let text = format!("{}x{}", "(".repeat(63), ")".repeat(63));
    let (infos, seq) = sequence(&text, 0);
    assert_eq!(locate_pairs(&infos, &seq).len(), 63);
}

#[test]
fn embedding_direction_inside_wins() {
    use BidiType::{L, R};
    assert_eq!(resolved("a(b)c", 0), vec![L, L, L, L, L]);
    assert_eq!(
        resolved("\u{05D0}(\u{05D1})", 1),
        vec![R, R, R, R]
    );
}

#[test]
fn opposite_direction_inside_uses_context() {
    use BidiType::{L, R};
    assert_eq!(resolved("a(\u{05D0})", 0), vec![L, L, R, L]);
    assert_eq!(resolved("\u{05D0}(\u{05D1})", 0), vec![R, R, R, R]);
}

#[test]
fn brackets_without_strong_content_stay_neutral() {
    use BidiType::{L, ON, WS};
    assert_eq!(resolved("a( )", 0), vec![L, ON, WS, ON]);
}

#[test]
fn marks_after_resolved_brackets_follow_them() {
    let (mut infos, seq) = sequence("\u{05D0}(\u{05D1})\u{0300}", 1);
    // W1 would have turned the mark into ON after the bracket.
    infos[4].ty = BidiType::ON;
    resolve_brackets(&mut infos, &seq);
    assert_eq!(infos[4].ty, BidiType::R);
}

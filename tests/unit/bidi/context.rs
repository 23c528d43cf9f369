use super::*;
use crate::bidi::types::JoiningType;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn processed(s: &str, hint: BaseDirection) -> (BidiContext, Vec<char>) {
    let text = chars(s);
    let mut ctx = BidiContext::new(64).unwrap();
    ctx.init(&text, hint).unwrap();
    ctx.process(&text).unwrap();
    (ctx, text)
}

#[test]
fn capacity_is_fixed() {
    let mut ctx = BidiContext::new(3).unwrap();
    assert_eq!(ctx.capacity(), 3);
    assert!(ctx.is_empty());
    let err = ctx.init(&chars("abcd"), BaseDirection::Auto).unwrap_err();
    assert!(matches!(
        err,
        EmberError::Capacity {
            requested: 4,
            capacity: 3
        }
    ));
    assert!(ctx.init(&chars("abc"), BaseDirection::Auto).is_ok());
    assert_eq!(ctx.len(), 3);
}

#[test]
fn ltr_text_takes_the_fast_path() {
    let text = chars("plain latin text");
    let mut ctx = BidiContext::new(32).unwrap();
    assert!(!ctx.init(&text, BaseDirection::Auto).unwrap());
    assert!(!ctx.is_bidi_needed());
    assert!(ctx.levels().all(|l| l == 0));
    assert_eq!(ctx.char_level(100), 0);
}

#[test]
fn arabic_digits_alone_do_not_need_bidi() {
    let text = chars("\u{0661}\u{0662}");
    let mut ctx = BidiContext::new(8).unwrap();
    assert!(!ctx.init(&text, BaseDirection::Auto).unwrap());
}

#[test]
fn paragraph_direction_from_content_or_hint() {
    let (ctx, _) = processed("\u{05D0}\u{05D1}", BaseDirection::Auto);
    assert!(ctx.is_rtl());
    assert_eq!(ctx.paragraph_level(), 1);

    let (ctx, _) = processed("abc \u{05D0}", BaseDirection::from(1));
    assert!(ctx.is_rtl());
    assert!(ctx.is_bidi_needed());
    assert_eq!(ctx.char_level(0), 2);
}

#[test]
fn mixed_text_levels() {
    let (ctx, _) = processed("ab \u{05D0}\u{05D1} cd", BaseDirection::Auto);
    let levels: Vec<u8> = ctx.levels().collect();
    assert_eq!(levels, vec![0, 0, 0, 1, 1, 0, 0, 0]);
}

#[test]
fn numbers_inside_rtl_text() {
    let (ctx, _) = processed("\u{05D0} 12", BaseDirection::Auto);
    let levels: Vec<u8> = ctx.levels().collect();
    assert_eq!(levels, vec![1, 1, 2, 2]);
}

#[test]
fn removed_controls_get_neighbour_levels() {
    // a RLE hebrew PDF b
    let (ctx, _) = processed("a\u{202B}\u{05D0}\u{202C}b", BaseDirection::Auto);
    let levels: Vec<u8> = ctx.levels().collect();
    assert_eq!(levels, vec![0, 0, 1, 0, 0]);
    assert_eq!(ctx.char_info(1).unwrap().ty, BidiType::Gap);
    assert_eq!(ctx.char_info(1).unwrap().joining, JoiningType::Transparent);
}

#[test]
fn process_can_run_twice() {
    let text = chars("a \u{05D0}(b)");
    let mut ctx = BidiContext::new(16).unwrap();
    ctx.init(&text, BaseDirection::Rtl).unwrap();
    ctx.process(&text).unwrap();
    let first: Vec<u8> = ctx.levels().collect();
    ctx.process(&text).unwrap();
    assert_eq!(ctx.levels().collect::<Vec<_>>(), first);
}

#[test]
fn length_mismatches_are_rejected() {
    let (mut ctx, _) = processed("ab\u{05D0}", BaseDirection::Auto);
    assert!(ctx.process(&chars("ab")).is_err());
    assert!(ctx.mirror_glyphs(&mut chars("a")).is_err());
    assert!(ctx.complete_row(0..4).is_err());
    assert!(ctx.reorder_chars(0..3, &mut chars("ab")).is_err());
    assert!(ctx.reorder_index(2..1, 0).is_err());
}

#[test]
fn rtl_brackets_resolve_and_mirror() {
    let (ctx, mut text) = processed("\u{05D0}(\u{05D1})", BaseDirection::Auto);
    assert!(ctx.levels().all(|l| l == 1));
    ctx.mirror_glyphs(&mut text).unwrap();
    assert_eq!(text, chars("\u{05D0})\u{05D1}("));
}

#[test]
fn complete_row_resets_trailing_whitespace() {
    let (mut ctx, _) = processed("\u{05D0} a  ", BaseDirection::Ltr);
    ctx.complete_row(0..5).unwrap();
    let levels: Vec<u8> = ctx.levels().collect();
    assert_eq!(levels, vec![1, 0, 0, 0, 0]);

    // a tab between RTL letters resolves to R but drops back to the paragraph level
    let (mut ctx, _) = processed("\u{05D0}\t\u{05D1}", BaseDirection::Ltr);
    assert_eq!(ctx.char_level(1), 1);
    ctx.complete_row(0..3).unwrap();
    assert_eq!(ctx.levels().collect::<Vec<_>>(), vec![1, 0, 1]);
}

#[test]
fn reorder_visual_order() {
    let (mut ctx, mut text) = processed("ab \u{05D0}\u{05D1} cd", BaseDirection::Auto);
    ctx.complete_row(0..8).unwrap();
    ctx.reorder_chars(0..8, &mut text).unwrap();
    assert_eq!(text, chars("ab \u{05D1}\u{05D0} cd"));

    let mut words: Vec<u32> = (0..8).collect();
    ctx.reorder_words(0..8, &mut words).unwrap();
    assert_eq!(words, vec![0, 1, 2, 4, 3, 5, 6, 7]);
}

#[test]
fn index_mapping_within_rows() {
    let (ctx, _) = processed("\u{05D0}\u{05D1}\u{05D2}ab", BaseDirection::Rtl);
    // levels 1 1 1 2 2 -> visual: a b gimel bet alef
    let mut idx: Vec<usize> = (0..5).collect();
    ctx.reorder_indices(0..5, &mut idx).unwrap();
    assert_eq!(idx, vec![3, 4, 2, 1, 0]);
    for (visual, &logical) in idx.iter().enumerate() {
        assert_eq!(ctx.reorder_index(0..5, logical).unwrap(), visual);
        assert_eq!(ctx.reverse_reorder_index(0..5, visual).unwrap(), logical);
    }
    // sub-row mapping is relative to the row start
    assert_eq!(ctx.reorder_index(1..3, 1).unwrap(), 2);
    assert_eq!(ctx.reorder_index(1..3, 4).unwrap(), 4);
}

use super::*;
use crate::bidi::classify::char_info;

fn infos(text: &str) -> Vec<CharInfo> {
    text.chars().map(char_info).collect()
}

fn levels(infos: &[CharInfo]) -> Vec<u8> {
    infos.iter().map(|i| i.level).collect()
}

#[test]
fn paragraph_level_follows_first_strong() {
    assert_eq!(paragraph_level(&infos("abc"), BaseDirection::Auto), 0);
    assert_eq!(paragraph_level(&infos("\u{05D0}bc"), BaseDirection::Auto), 1);
    assert_eq!(paragraph_level(&infos("123 \u{0627}"), BaseDirection::Auto), 1);
    assert_eq!(paragraph_level(&infos("123"), BaseDirection::Auto), 0);
    assert_eq!(paragraph_level(&infos("abc"), BaseDirection::Rtl), 1);
    assert_eq!(paragraph_level(&infos("\u{05D0}"), BaseDirection::Ltr), 0);
}

#[test]
fn paragraph_level_skips_isolated_text() {
    // RLI hebrew PDI latin: the isolate is ignored by P2.
    let text = infos("\u{2067}\u{05D0}\u{2069}a");
    assert_eq!(paragraph_level(&text, BaseDirection::Auto), 0);
}

#[test]
fn embeddings_raise_levels() {
    // a RLE b PDF c
    let mut text = infos("a\u{202B}b\u{202C}c");
    resolve_explicit(&mut text, 0);
    assert_eq!(levels(&text), vec![0, 0, 1, 1, 0]);
}

#[test]
fn override_rewrites_types() {
    // LRO hebrew PDF in an RTL paragraph
    let mut text = infos("\u{202D}\u{05D0}\u{202C}");
    resolve_explicit(&mut text, 1);
    assert_eq!(text[1].level, 2);
    assert_eq!(text[1].ty, BidiType::L);
    assert_eq!(text[1].original, BidiType::R);
}

#[test]
fn isolates_keep_outer_level_on_their_delimiters() {
    let mut text = infos("a\u{2067}b\u{2069}c");
    resolve_explicit(&mut text, 0);
    assert_eq!(levels(&text), vec![0, 0, 1, 0, 0]);
}

#[test]
fn fsi_resolves_from_its_contents() {
    let mut rtl = infos("\u{2068}\u{05D0}\u{2069}");
    resolve_explicit(&mut rtl, 0);
    assert_eq!(rtl[1].level, 1);

    let mut ltr = infos("\u{2068}a\u{05D0}\u{2069}");
    resolve_explicit(&mut ltr, 0);
    assert_eq!(ltr[1].level, 2);
}

#[test]
fn unmatched_pdf_and_pdi_are_ignored() {
    let mut text = infos("a\u{202C}\u{2069}b");
    resolve_explicit(&mut text, 0);
    assert_eq!(levels(&text), vec![0, 0, 0, 0]);
}

#[test]
fn embedding_overflow_truncates_silently() {
    let mut s = String::new();
    for _ in 0..200 {
        s.push('\u{202A}');
        s.push('\u{202B}');
    }
    s.push('x');
    let mut text = infos(&s);
    resolve_explicit(&mut text, 0);
    let max = text.iter().map(|i| i.level).max().unwrap();
    assert_eq!(max, MAX_DEPTH);
    assert_eq!(text.last().unwrap().level, MAX_DEPTH);
}

#[test]
fn x9_marks_gaps_in_place() {
    let mut text = infos("a\u{202B}b\u{200D}\u{202C}");
    remove_formatting(&mut text);
    let tys: Vec<_> = text.iter().map(|i| i.ty).collect();
    assert_eq!(
        tys,
        vec![BidiType::L, BidiType::Gap, BidiType::L, BidiType::Gap, BidiType::Gap]
    );
    assert_eq!(text[1].original, BidiType::RLE);
}

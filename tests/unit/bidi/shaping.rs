use super::*;
use crate::bidi::classify::char_info;

fn shaped(text: &str, fonts: &[&dyn GlyphSource]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let infos: Vec<CharInfo> = chars.iter().copied().map(char_info).collect();
    shape(&infos, &mut chars, None, fonts);
    chars.into_iter().collect()
}

fn any(_: char) -> bool {
    true
}

#[test]
fn letters_take_positional_forms() {
    // beh beh beh
    assert_eq!(
        shaped("\u{0628}\u{0628}\u{0628}", &[&any]),
        "\u{FE91}\u{FE92}\u{FE90}"
    );
    // isolated beh
    assert_eq!(shaped("\u{0628}", &[&any]), "\u{FE8F}");
}

#[test]
fn right_joining_letters_break_the_chain() {
    // beh alef beh: alef does not join forward
    assert_eq!(
        shaped("\u{0628}\u{0627}\u{0628}", &[&any]),
        "\u{FE91}\u{FE8E}\u{FE8F}"
    );
}

#[test]
fn transparent_marks_are_skipped() {
    assert_eq!(
        shaped("\u{0628}\u{064E}\u{0628}", &[&any]),
        "\u{FE91}\u{064E}\u{FE90}"
    );
}

#[test]
fn missing_glyphs_fall_back_to_the_original() {
    let none = |_: char| false;
    assert_eq!(shaped("\u{0628}\u{0628}", &[&none]), "\u{0628}\u{0628}");
    // No font at all behaves the same.
    assert_eq!(shaped("\u{0628}\u{0628}", &[]), "\u{0628}\u{0628}");
}

#[test]
fn lam_alef_ligatures() {
    assert_eq!(shaped("\u{0644}\u{0627}", &[&any]), "\u{FEFB}\u{FEFF}");
    // medial lam gives the final ligature
    assert_eq!(
        shaped("\u{0628}\u{0644}\u{0622}", &[&any]),
        "\u{FE91}\u{FEF6}\u{FEFF}"
    );
    let no_ligatures = |c: char| !('\u{FEF5}'..='\u{FEFC}').contains(&c);
    assert_eq!(
        shaped("\u{0644}\u{0627}", &[&no_ligatures]),
        "\u{FEDF}\u{FE8E}"
    );
}

#[test]
fn attributes_select_fonts() {
    let mut chars: Vec<char> = "\u{0628}\u{0628}".chars().collect();
    let infos: Vec<CharInfo> = chars.iter().copied().map(char_info).collect();
    let none = |_: char| false;
    // first character uses font 1 (shapes), second font 0 (does not)
    shape(&infos, &mut chars, Some(&[0x0001_0001u32, 0][..]), &[&none, &any]);
    assert_eq!(chars, vec!['\u{FE91}', '\u{0628}']);
}

#[test]
fn level_changes_split_joining_runs() {
    let mut chars: Vec<char> = "\u{0628}\u{0628}".chars().collect();
    let mut infos: Vec<CharInfo> = chars.iter().copied().map(char_info).collect();
    infos[1].level = 2;
    shape(&infos, &mut chars, None, &[&any]);
    assert_eq!(chars, vec!['\u{FE8F}', '\u{FE8F}']);
}

#[test]
fn mirroring_applies_to_odd_levels_only() {
    let mut chars: Vec<char> = "(a)".chars().collect();
    let mut infos: Vec<CharInfo> = chars.iter().copied().map(char_info).collect();
    infos[0].level = 1;
    mirror(&infos, &mut chars);
    assert_eq!(chars, vec![')', 'a', ')']);
}

//! End-to-end tests for marker parsing and document conversion

use runescript_core::{
    convert_document, default_markers, find_replacements, parse_blocks, parse_line_commands,
    ReplacementKind,
};

const SCRIPTS: &[&str] = &["Futhorc", "ElderFuthark", "YoungerFuthark", "Medieval", "Gothic"];

#[test]
fn test_each_script_block_converts() {
    let text = "<Futhorc>thing</Futhorc> <ElderFuthark>thing</ElderFuthark> \
                <YoungerFuthark>thing</YoungerFuthark> <Medieval>th</Medieval> \
                <Gothic>guth</Gothic>";
    let out = convert_document(text, &default_markers());

    assert_eq!(out.replacements.len(), 5);
    assert_eq!(out.text, "ᚦᛁᛝ ᚦᛁᛜ ᛏᚼᛁᚴ ᛐᚼ 𐌲𐌿𐌸");
}

#[test]
fn test_first_matching_close_tag_wins() {
    let text = "<Futhorc>a</Futhorc>b</Futhorc>";
    let blocks = parse_blocks(text, SCRIPTS);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "a");
    assert_eq!(blocks[0].end, "<Futhorc>a</Futhorc>".len());
}

#[test]
fn test_nested_different_markers_do_not_nest() {
    // The outer block swallows the inner tags verbatim
    let text = "<Futhorc>x <Gothic>y</Gothic> z</Futhorc>";
    let blocks = parse_blocks(text, SCRIPTS);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].marker, "Futhorc");
    assert_eq!(blocks[0].content, "x <Gothic>y</Gothic> z");
}

#[test]
fn test_unterminated_block_ignored_but_later_block_found() {
    let text = "<Futhorc>dangling <Gothic>a</Gothic>";
    let blocks = parse_blocks(text, SCRIPTS);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].marker, "Gothic");
}

#[test]
fn test_marker_not_in_allow_list() {
    assert!(parse_blocks("<Futhorc>a</Futhorc>", &["Gothic"]).is_empty());
    let empty: &[&str] = &[];
    assert!(parse_blocks("<Futhorc>a</Futhorc>", empty).is_empty());
}

#[test]
fn test_block_tags_are_case_sensitive() {
    assert!(parse_blocks("<futhorc>a</futhorc>", SCRIPTS).is_empty());
}

#[test]
fn test_multiline_block() {
    let text = "<Latin>\nveni\nvidi\n</Latin>";
    let out = convert_document(text, &default_markers());
    assert_eq!(out.text, "VENI VIDI");
}

#[test]
fn test_char_offsets_with_multibyte_prefix() {
    let text = "ᚠᚢ <Gothic>a</Gothic>";
    let blocks = parse_blocks(text, SCRIPTS);
    assert_eq!(blocks[0].char_start, 3);
    assert_eq!(blocks[0].char_end, 3 + "<Gothic>a</Gothic>".len());
    assert_eq!(blocks[0].start, "ᚠᚢ ".len());
}

#[test]
fn test_line_commands_case_insensitive() {
    let text = "@FUTHORC thing\n@Gothic guth\r\n@ogham nope\n";
    let commands = parse_line_commands(text, SCRIPTS);
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].marker, "Futhorc");
    assert_eq!(commands[1].payload, "guth");
    assert_eq!(&text[commands[1].start..commands[1].end], "@Gothic guth");
}

#[test]
fn test_line_command_requires_line_start() {
    assert!(parse_line_commands("see @futhorc thing", SCRIPTS).is_empty());
    assert!(parse_line_commands("@futhorcx thing", SCRIPTS).is_empty());
}

#[test]
fn test_crlf_document_keeps_line_endings() {
    let text = "one\r\n@gothic a\r\ntwo";
    let out = convert_document(text, &default_markers());
    assert_eq!(out.text, "one\r\n𐌰\r\ntwo");
}

#[test]
fn test_find_replacements_reports_inputs() {
    let text = "@latinextended qui 12\n<Medieval>søren</Medieval>";
    let found = find_replacements(text, &default_markers());
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, ReplacementKind::Line);
    assert_eq!(found[0].marker, "LatinExtended");
    assert_eq!(found[0].output, "QVI XII");
    assert_eq!(found[1].kind, ReplacementKind::Block);
    assert_eq!(found[1].output, "ᛋᚯᚱᛂᚿ");
}

#[test]
fn test_document_without_markup_round_trips() {
    let text = "Nothing here <b>bold</b> @ 1066";
    let out = convert_document(text, &default_markers());
    assert!(out.is_empty());
    assert_eq!(out.text, text);
}

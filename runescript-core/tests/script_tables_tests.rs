//! End-to-end transliteration through the embedded script tables

use runescript_core::{transducer, transliterate, ScriptConfig, ScriptId, Transducer};

#[test]
fn test_futhorc_digraphs() {
    assert_eq!(transliterate(ScriptId::Futhorc, "thing"), "ᚦᛁᛝ");
    assert_eq!(transliterate(ScriptId::Futhorc, "þeoden"), "ᚦᛇᛞᛖᚾ");
    assert_eq!(transliterate(ScriptId::Futhorc, "Ælfred"), "ᚫᛚᚠᚱᛖᛞ");
}

#[test]
fn test_futhorc_pass_through() {
    assert_eq!(transliterate(ScriptId::Futhorc, "the king!"), "ᚦᛖ kᛁᛝ!");
}

#[test]
fn test_futhorc_thorn_and_eth_alias_th() {
    let th = transliterate(ScriptId::Futhorc, "th");
    assert_eq!(transliterate(ScriptId::Futhorc, "þ"), th);
    assert_eq!(transliterate(ScriptId::Futhorc, "ð"), th);
    assert_eq!(transliterate(ScriptId::Futhorc, "Þ"), th);
}

#[test]
fn test_elder_futhark() {
    assert_eq!(transliterate(ScriptId::ElderFuthark, "thing"), "ᚦᛁᛜ");
    assert_eq!(transliterate(ScriptId::ElderFuthark, "rune"), "ᚱᚢᚾᛖ");
    // x expands to two runes
    assert_eq!(transliterate(ScriptId::ElderFuthark, "box"), "ᛒᛟᚲᛊ");
    // non-native letters alias onto the nearest rune
    assert_eq!(transliterate(ScriptId::ElderFuthark, "quick"), "ᚲᚢᛁᚲᚲ");
}

#[test]
fn test_younger_futhark_collapse() {
    // No th rune; only ng is a digraph
    assert_eq!(transliterate(ScriptId::YoungerFuthark, "thing"), "ᛏᚼᛁᚴ");
    assert_eq!(transliterate(ScriptId::YoungerFuthark, "odin"), "ᚬᛏᛁᚾ");
    // Several letters share one rune
    assert_eq!(
        transliterate(ScriptId::YoungerFuthark, "d"),
        transliterate(ScriptId::YoungerFuthark, "t")
    );
    assert_eq!(transliterate(ScriptId::YoungerFuthark, "eij"), "ᛁᛁᛁ");
    assert_eq!(transliterate(ScriptId::YoungerFuthark, "uvwy"), "ᚢᚢᚢᚢ");
}

#[test]
fn test_medieval_has_no_digraphs() {
    assert_eq!(transliterate(ScriptId::MedievalRunes, "th"), "ᛐᚼ");
    assert_eq!(transliterate(ScriptId::MedievalRunes, "ng"), "ᚿᚵ");
    // ø survives normalization and has its own rune
    assert_eq!(transliterate(ScriptId::MedievalRunes, "søren"), "ᛋᚯᚱᛂᚿ");
}

#[test]
fn test_gothic() {
    assert_eq!(transliterate(ScriptId::Gothic, "guth"), "𐌲𐌿𐌸");
    assert_eq!(transliterate(ScriptId::Gothic, "thiuda"), "𐌸𐌹𐌿𐌳𐌰");
    assert_eq!(transliterate(ScriptId::Gothic, "hvas"), "𐍈𐌰𐍃");
}

#[test]
fn test_gothic_hwair_alias() {
    assert_eq!(
        transliterate(ScriptId::Gothic, "ƕas"),
        transliterate(ScriptId::Gothic, "hvas")
    );
    assert_eq!(
        transliterate(ScriptId::Gothic, "Ƕas"),
        transliterate(ScriptId::Gothic, "hvas")
    );
}

#[test]
fn test_mixed_case_input_is_lowered() {
    for id in ScriptId::ALL {
        assert_eq!(transliterate(id, "RUNE"), transliterate(id, "rune"));
    }
}

#[test]
fn test_digits_and_punctuation_pass_through() {
    for id in ScriptId::ALL {
        assert_eq!(transliterate(id, "1, 2; 3!"), "1, 2; 3!");
    }
}

#[test]
fn test_empty_and_whitespace() {
    for id in ScriptId::ALL {
        assert_eq!(transliterate(id, ""), "");
        assert_eq!(transliterate(id, " \t\n"), " \t\n");
    }
}

#[test]
fn test_non_latin_unicode_passes_through() {
    for id in ScriptId::ALL {
        assert_eq!(transliterate(id, "日本 ✓"), "日本 ✓");
    }
}

#[test]
fn test_every_plain_letter_of_each_table_converts() {
    for id in ScriptId::ALL {
        let table = transducer(id).table();
        for ch in 'a'..='z' {
            let out = transliterate(id, &ch.to_string());
            match table.get_char(ch) {
                Some(mapped) => assert_eq!(out, mapped, "{id}: {ch}"),
                None => assert_eq!(out, ch.to_string(), "{id}: {ch}"),
            }
        }
    }
}

#[test]
fn test_external_table_swaps_in() {
    let config = ScriptConfig::from_toml_str(
        r#"
[metadata]
code = "mirror"
name = "Mirror"

[mappings]
a = "ɐ"
e = "ǝ"
th = "ɥʇ"
"#,
    )
    .unwrap();
    let t = Transducer::from_config(&config);
    assert_eq!(t.transliterate("the cat"), "ɥʇǝ cɐt");
    assert_eq!(t.marker(), "Mirror");
}

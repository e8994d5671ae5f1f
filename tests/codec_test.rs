//! Integration tests for the Morse codec

use morsetree::domain::{DomainError, MorseCodec, DEFAULT_ALPHABET};
use morsetree::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn codec() -> MorseCodec {
    testing::init_test_setup();
    MorseCodec::with_default_alphabet()
}

// ============================================================
// Concrete scenarios
// ============================================================

#[rstest]
fn given_default_alphabet_when_encoding_sos_then_returns_three_codes(codec: MorseCodec) {
    assert_eq!(codec.encode_line("SOS").unwrap(), "... --- ...");
}

#[rstest]
fn given_default_alphabet_when_decoding_sos_then_returns_text(codec: MorseCodec) {
    assert_eq!(codec.decode_line("... --- ...").unwrap(), "SOS");
}

#[rstest]
fn given_two_words_when_encoding_then_words_separated_by_slash(codec: MorseCodec) {
    assert_eq!(
        codec.encode_line("HELLO WORLD").unwrap(),
        ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
    );
}

#[rstest]
fn given_slash_separated_line_when_decoding_then_words_separated_by_space(codec: MorseCodec) {
    assert_eq!(
        codec
            .decode_line(".... . .-.. .-.. --- / .-- --- .-. .-.. -..")
            .unwrap(),
        "HELLO WORLD"
    );
}

#[rstest]
fn given_zero_when_encoding_and_decoding_then_five_dashes(codec: MorseCodec) {
    assert_eq!(codec.decode_token("-----"), Some('0'));
    assert_eq!(codec.encode_char('0').unwrap().to_string(), "-----");
}

// ============================================================
// Properties
// ============================================================

#[rstest]
fn given_every_default_symbol_when_round_tripping_then_both_directions_agree(codec: MorseCodec) {
    for &(code, symbol) in DEFAULT_ALPHABET {
        assert_eq!(codec.decode_token(code), Some(symbol), "decode {}", code);
        assert_eq!(
            codec.encode_char(symbol).map(|c| c.to_string()).as_deref(),
            Some(code),
            "encode {}",
            symbol
        );
    }
}

#[rstest]
#[case("the quick brown fox", "THE QUICK BROWN FOX")]
#[case("  jumps   over\tthe  lazy dog 42 ", "JUMPS OVER THE LAZY DOG 42")]
#[case("a", "A")]
#[case("   ", "")]
fn given_text_when_round_tripping_then_whitespace_is_normalized(
    codec: MorseCodec,
    #[case] text: &str,
    #[case] expected: &str,
) {
    let line = codec.encode_line(text).unwrap();
    assert_eq!(codec.decode_line(&line).unwrap(), expected);
}

#[rstest]
fn given_empty_or_blank_line_when_decoding_then_returns_empty(codec: MorseCodec) {
    assert_eq!(codec.decode_line("").unwrap(), "");
    assert_eq!(codec.decode_line("   ").unwrap(), "");
}

#[rstest]
fn given_symbol_never_inserted_when_encoding_char_then_returns_none(codec: MorseCodec) {
    assert_eq!(codec.encode_char('?'), None);
    assert_eq!(codec.encode_char('Ä'), None);
}

#[test]
fn given_same_pair_inserted_twice_when_inspecting_then_tree_unchanged() {
    let mut codec = MorseCodec::with_default_alphabet();
    let nodes = codec.tree().node_count();

    codec.insert("..--..", '?').unwrap();
    let nodes_after_first = codec.tree().node_count();
    let entries_after_first = codec.tree().entries();
    codec.insert("..--..", '?').unwrap();

    // "..--" already exists as a waypoint on the way to '2'
    assert_eq!(nodes_after_first, nodes + 2);
    assert_eq!(codec.tree().node_count(), nodes_after_first);
    assert_eq!(codec.tree().entries(), entries_after_first);
}

#[test]
fn given_default_alphabet_loaded_twice_when_inspecting_then_tree_unchanged() {
    let mut codec = MorseCodec::with_default_alphabet();
    let nodes = codec.tree().node_count();
    let entries = codec.tree().entries();

    codec.load_default_alphabet();

    assert_eq!(codec.tree().node_count(), nodes);
    assert_eq!(codec.tree().entries(), entries);
    assert_eq!(codec.tree().symbol_count(), 36);
}

#[test]
fn given_existing_code_when_reinserting_other_symbol_then_only_that_node_changes() {
    let mut codec = MorseCodec::with_default_alphabet();
    codec.insert(".-", '#').unwrap();

    assert_eq!(codec.decode_token(".-"), Some('#'));
    assert_eq!(codec.encode_char('A'), None);
    assert_eq!(codec.decode_token(".-."), Some('R'));
    assert_eq!(codec.decode_token("."), Some('E'));
}

#[test]
fn given_prefix_code_when_inserting_then_both_codes_decode() {
    let mut codec = MorseCodec::new();
    codec.insert("...", 'S').unwrap();
    codec.insert("...-", 'V').unwrap();
    codec.insert("..", 'I').unwrap();

    assert_eq!(codec.decode_line("... ...- ..").unwrap(), "SVI");
}

// ============================================================
// Errors
// ============================================================

#[test]
fn given_invalid_code_when_inserting_then_tree_is_not_modified() {
    let mut codec = MorseCodec::with_default_alphabet();
    let nodes = codec.tree().node_count();

    let err = codec.insert("......_", '!').unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidCodeFormat {
            code: "......_".to_string(),
            found: '_'
        }
    );
    assert_eq!(codec.tree().node_count(), nodes);
}

#[rstest]
fn given_unsupported_character_when_encoding_then_names_it(codec: MorseCodec) {
    let err = codec.encode_line("HI!").unwrap_err();
    assert_eq!(err, DomainError::UnsupportedCharacter('!'));
    assert!(err.to_string().contains('!'));
}

#[rstest]
fn given_foreign_character_when_decoding_then_fails_before_decoding(codec: MorseCodec) {
    assert_eq!(
        codec.decode_line("... _ ..."),
        Err(DomainError::InvalidDecodeInput('_'))
    );
}

#[rstest]
fn given_unknown_token_when_decoding_then_names_token(codec: MorseCodec) {
    let err = codec.decode_line("... ---.-- ...").unwrap_err();
    assert_eq!(err, DomainError::UnknownMorseToken("---.--".to_string()));
}

#[rstest]
fn given_failed_operations_when_encoding_again_then_codec_still_works(codec: MorseCodec) {
    assert!(codec.encode_line("?").is_err());
    assert!(codec.decode_line("x").is_err());
    assert_eq!(codec.encode_line("OK").unwrap(), "--- -.-");
}

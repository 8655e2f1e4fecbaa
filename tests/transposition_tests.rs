use classic_ciphers::errors::CipherError;
use classic_ciphers::{column_transpose, cut_deck, irc};

#[test]
fn column_transpose_reads_columns() {
    assert_eq!(column_transpose::encode("ABCDEFGHI"), "ADGBEHCFI");
}

#[test]
fn column_transpose_pads_to_square() {
    assert_eq!(column_transpose::encode("ABCDE"), "AD BE C  ");
    assert_eq!(column_transpose::encode(""), "");
    assert_eq!(column_transpose::encode("X"), "X");
}

#[test]
fn irc_embeds_rotation_count() {
    assert_eq!(
        irc::encode(3, "If you wish to make an apple pie"),
        "3 ep alp ipIe of wuse ti oanym ahk"
    );
    assert_eq!(irc::encode(1, "abc def"), "1 bfa ecd");
    assert_eq!(irc::encode(2, "hello world"), "2 llowe rldho");
}

#[test]
fn irc_decodes_without_key() {
    assert_eq!(
        irc::decode("3 ep alp ipIe of wuse ti oanym ahk").unwrap(),
        "If you wish to make an apple pie"
    );
    assert_eq!(irc::decode("2 llowe rldho").unwrap(), "hello world");
}

#[test]
fn irc_keeps_repeated_and_leading_spaces() {
    assert_eq!(irc::encode(1, "a  b"), "1 b  a");
    assert_eq!(irc::decode("1 b  a").unwrap(), "a  b");
    let encoded = irc::encode(2, " lead and trail ");
    assert_eq!(irc::decode(&encoded).unwrap(), " lead and trail ");
}

#[test]
fn irc_zero_rotations_is_identity() {
    assert_eq!(irc::encode(0, "plain text"), "0 plain text");
    assert_eq!(irc::decode("0 plain text").unwrap(), "plain text");
}

#[test]
fn irc_decode_rejects_bad_header() {
    assert_eq!(irc::decode("nospace").unwrap_err(), CipherError::MissingRotationToken);
    assert_eq!(
        irc::decode("x abc").unwrap_err(),
        CipherError::InvalidRotationToken("x".into())
    );
    assert_eq!(
        irc::decode("-2 abc").unwrap_err(),
        CipherError::InvalidRotationToken("-2".into())
    );
}

#[test]
fn cut_deck_splits_even_and_odd() {
    assert_eq!(cut_deck::encode("ABCDE"), "ACEBD");
    assert_eq!(cut_deck::encode("ABCDEF"), "ACEBDF");
}

#[test]
fn cut_deck_restores_both_parities() {
    assert_eq!(cut_deck::decode("ACEBD"), "ABCDE");
    assert_eq!(cut_deck::decode("ACEBDF"), "ABCDEF");
    assert_eq!(cut_deck::decode(""), "");
    assert_eq!(cut_deck::decode("Z"), "Z");
}

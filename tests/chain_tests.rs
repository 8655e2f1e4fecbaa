use classic_ciphers::chain::{Chain, CipherStep};
use classic_ciphers::errors::CipherError;

fn invertible_steps() -> Vec<CipherStep> {
    vec![
        CipherStep::Caesar { key: 7 },
        CipherStep::Ragbaby { key: "secret".into() },
        CipherStep::Tongues,
        CipherStep::CutDeck,
        CipherStep::Irc { rotations: 1 },
    ]
}

#[test]
fn chain_round_trips() {
    let chain = Chain::new(invertible_steps()).unwrap();
    let text = "Meet me at the old mill";
    let encoded = chain.encode(text).unwrap();
    assert_ne!(encoded, text);
    assert_eq!(chain.decode(&encoded).unwrap(), text);
}

#[test]
fn chain_applies_steps_in_order() {
    let chain = Chain::new(vec![CipherStep::Caesar { key: 3 }, CipherStep::CutDeck]).unwrap();
    assert_eq!(chain.encode("ABCDE").unwrap(), "DFHEG");
    assert_eq!(chain.decode("DFHEG").unwrap(), "ABCDE");
}

#[test]
fn chain_with_index_difference_round_trips() {
    let chain = Chain::new(vec![CipherStep::IndexDifference, CipherStep::Caesar { key: 11 }]).unwrap();
    let encoded = chain.encode("Business").unwrap();
    assert_eq!(chain.decode(&encoded).unwrap(), "Business");
}

#[test]
fn chain_propagates_input_errors() {
    let chain = Chain::new(vec![CipherStep::Polybius]).unwrap();
    assert_eq!(chain.encode("abc1").unwrap_err(), CipherError::UnexpectedDigit('1'));
}

#[test]
fn chain_polybius_decode_is_lossy_on_j() {
    let chain = Chain::new(vec![CipherStep::Polybius]).unwrap();
    let encoded = chain.encode("jam").unwrap();
    assert_eq!(chain.decode(&encoded).unwrap(), "IAM");
}

#[test]
fn column_transpose_cannot_be_decoded() {
    let chain = Chain::new(vec![CipherStep::CutDeck, CipherStep::ColumnTranspose]).unwrap();
    assert!(!chain.is_invertible());
    assert_eq!(chain.encode("ABCD").unwrap(), "ABCD");
    assert_eq!(
        chain.decode("ABCD").unwrap_err(),
        CipherError::NotInvertible("column_transpose")
    );
}

#[test]
fn rejects_ragbaby_key_without_letters() {
    let err = Chain::new(vec![CipherStep::Ragbaby { key: "123".into() }]).unwrap_err();
    assert_eq!(err, CipherError::EmptyKey);
}

#[test]
fn steps_deserialize_from_json() {
    let json = r#"[
        {"cipher": "caesar", "key": -4},
        {"cipher": "ragbaby", "key": "cipher"},
        {"cipher": "irc", "rotations": 2},
        {"cipher": "index_difference"},
        {"cipher": "column_transpose"}
    ]"#;
    let steps: Vec<CipherStep> = serde_json::from_str(json).unwrap();
    assert_eq!(
        steps,
        vec![
            CipherStep::Caesar { key: -4 },
            CipherStep::Ragbaby { key: "cipher".into() },
            CipherStep::Irc { rotations: 2 },
            CipherStep::IndexDifference,
            CipherStep::ColumnTranspose,
        ]
    );
    assert_eq!(steps[2].name(), "irc");
}

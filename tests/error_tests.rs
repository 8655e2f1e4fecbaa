use classic_ciphers::errors::{AppError, CipherError, DecodeAmbiguityWarning};

#[test]
fn app_error_from_cipher_error() {
    let app: AppError = CipherError::OutsideAlphabet('~').into();
    assert!(matches!(app, AppError::Cipher(CipherError::OutsideAlphabet('~'))));
}

#[test]
fn only_alphabet_violations_are_invalid_input() {
    assert!(CipherError::UnexpectedDigit('7').is_invalid_input());
    assert!(CipherError::OutsideAlphabet('\n').is_invalid_input());
    assert!(!CipherError::MissingRotationToken.is_invalid_input());
    assert!(!CipherError::NotInvertible("column_transpose").is_invalid_input());
}

#[test]
fn messages_name_the_offending_input() {
    assert_eq!(
        CipherError::OutsideAlphabet('~').to_string(),
        "character '~' is not in the region alphabet"
    );
    assert_eq!(
        CipherError::NotInvertible("column_transpose").to_string(),
        "column_transpose has no inverse"
    );
    assert_eq!(
        DecodeAmbiguityWarning.to_string(),
        "'J' may have been overwritten by 'I'"
    );
}

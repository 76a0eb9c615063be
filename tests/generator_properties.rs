use pwd_guard::generator::{AMBIGUOUS, SYMBOLS};
use pwd_guard::{generate, generate_password, GenerateError, GenerationRequest};
use secrecy::ExposeSecret;

#[test]
fn test_generated_length_and_alphabet_for_all_flag_combinations() {
    for include_symbols in [false, true] {
        for exclude_ambiguous in [false, true] {
            for length in [8, 9, 12, 16, 31, 64, 127, 128] {
                let request = GenerationRequest::new(length, include_symbols, exclude_ambiguous);
                let alphabet = request.alphabet().unwrap();
                let pwd = generate(&request).unwrap();
                let pwd = pwd.expose_secret();

                assert_eq!(pwd.chars().count(), length);
                assert!(pwd.chars().all(|c| alphabet.contains(c)), "{:?}", request);
            }
        }
    }
}

#[test]
fn test_ambiguous_characters_never_appear() {
    for _ in 0..500 {
        let pwd = generate_password(64, true, true).unwrap();
        assert!(!pwd.expose_secret().chars().any(|c| AMBIGUOUS.contains(c)));
    }
}

#[test]
fn test_class_coverage_holds_on_every_call() {
    for _ in 0..1000 {
        let pwd = generate_password(8, true, false).unwrap();
        let pwd = pwd.expose_secret();
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        assert!(pwd.chars().any(|c| SYMBOLS.contains(c)));
    }
}

#[test]
fn test_without_symbols_no_symbol_appears() {
    for _ in 0..200 {
        let pwd = generate_password(32, false, false).unwrap();
        assert!(pwd.expose_secret().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_scenario_sixteen_chars_symbols_no_ambiguous() {
    let pwd = generate_password(16, true, true).unwrap();
    let pwd = pwd.expose_secret();

    assert_eq!(pwd.chars().count(), 16);
    assert!(!pwd.chars().any(|c| AMBIGUOUS.contains(c)));
    assert!(pwd.chars().any(|c| SYMBOLS.contains(c)));
}

#[test]
fn test_invalid_length_is_reported() {
    let err = generate_password(7, true, true).unwrap_err();
    assert_eq!(err, GenerateError::InvalidParameter { length: 7 });
    assert!(err.to_string().contains("between 8 and 128"));

    assert!(generate_password(129, false, false).is_err());
}

#[test]
fn test_secret_debug_does_not_leak() {
    let pwd = generate_password(16, true, true).unwrap();
    let debug = format!("{:?}", pwd);
    assert!(!debug.contains(pwd.expose_secret()));
}

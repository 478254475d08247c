use folio::utils::validation::{is_present, is_valid_email};

#[test]
fn test_accepts_basic_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("nome.cognome+sito@azienda.solutions"));
    assert!(is_valid_email("  padded@example.it  "));
}

#[test]
fn test_rejects_malformed_addresses() {
    for email in ["a@b", "a.com", "@b.com", "a@b.c", "", "a b@c.com", "a@b.c0m"] {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}

#[test]
fn test_is_present() {
    assert!(is_present("Manuel"));
    assert!(!is_present(""));
    assert!(!is_present(" \n\t"));
}

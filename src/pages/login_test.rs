use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice ", "pw"),
        Ok(Credentials { username: "alice".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_as_typed() {
    let creds = validate_login_input("alice", " spaced pw ").unwrap();
    assert_eq!(creds.password, " spaced pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Missing username or password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Missing username or password."));
    assert_eq!(validate_login_input("alice", ""), Err("Missing username or password."));
}

use super::*;

#[test]
fn missing_provider_message_names_the_provider() {
    let msg = DarkModeError::MissingProvider.to_string();
    assert!(msg.contains("DarkModeProvider"));
    assert!(msg.contains("use_dark_mode"));
}

#[test]
fn backend_errors_carry_detail() {
    assert_eq!(
        DarkModeError::Storage("quota exceeded".to_owned()).to_string(),
        "storage error: quota exceeded"
    );
    assert_eq!(
        DarkModeError::Document("no head".to_owned()).to_string(),
        "document error: no head"
    );
}

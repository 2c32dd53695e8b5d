use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = PageError::MissingElement(".theme-toggle");
    assert_eq!(err.to_string(), "element not found: .theme-toggle");
}

#[test]
fn malformed_cookie_keeps_json_source() {
    let Err(json_err) = serde_json::from_str::<Vec<String>>("[oops") else {
        panic!("expected a parse error");
    };
    let err = PageError::MalformedCookie(json_err);
    assert!(err.to_string().starts_with("malformed favorites cookie:"));
    assert!(std::error::Error::source(&err).is_some());
}

use crate::HttpStatusCode;

#[test]
fn given_4xx_codes_when_classified_then_client_error_only() {
    for code in [400u16, 401, 404, 422, 499] {
        let status = HttpStatusCode::from(code);
        assert!(status.is_client_error(), "HTTP {code} is a client error");
        assert!(!status.is_server_error(), "HTTP {code} is not a server error");
    }
}

#[test]
fn given_5xx_codes_when_classified_then_server_error_only() {
    for code in [500u16, 502, 503, 599] {
        let status = HttpStatusCode::from(code);
        assert!(status.is_server_error(), "HTTP {code} is a server error");
        assert!(!status.is_client_error(), "HTTP {code} is not a client error");
    }
}

#[test]
fn given_success_codes_when_classified_then_neither_error_class() {
    for code in [200u16, 201, 204, 301] {
        let status = HttpStatusCode::from(code);
        assert!(!status.is_client_error());
        assert!(!status.is_server_error());
    }
}

#[test]
fn given_status_when_displayed_then_shows_raw_number() {
    assert_eq!(format!("{}", HttpStatusCode::from(503)), "503");
}

use super::*;

// =============================================================================
// Wire format — field names must match the backend's camelCase JSON
// =============================================================================

#[test]
fn credentials_serialize_as_backend_body() {
    let creds = Credentials {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let json = serde_json::to_string(&creds).unwrap();
    assert_eq!(json, r#"{"email":"a@b.com","password":"x"}"#);
}

#[test]
fn user_serializes_with_full_name_key() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
    };
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(json, r#"{"id":"u1","email":"a@b.com","fullName":"A B"}"#);
}

#[test]
fn login_response_decodes_backend_body() {
    let body = r#"{
        "accessToken": "T1",
        "refreshToken": "R1",
        "userId": "u1",
        "email": "a@b.com",
        "fullName": "A B",
        "roles": ["admin"],
        "permissions": ["read", "write"]
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.access_token, "T1");
    assert_eq!(resp.refresh_token, "R1");
    assert_eq!(resp.roles, ["admin"]);
    assert_eq!(resp.permissions, ["read", "write"]);
}

#[test]
fn user_authorities_decode_backend_body() {
    let body = r#"{
        "userId": "u1",
        "email": "a@b.com",
        "fullName": "A B",
        "roles": [],
        "permissions": []
    }"#;
    let auth: UserAuthorities = serde_json::from_str(body).unwrap();
    assert_eq!(auth.user_id, "u1");
    assert!(auth.roles.is_empty());
}

// =============================================================================
// Profile assembly
// =============================================================================

#[test]
fn login_response_assembles_user() {
    let resp = LoginResponse {
        access_token: "T1".to_owned(),
        refresh_token: "R1".to_owned(),
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
        roles: vec![],
        permissions: vec![],
    };
    let user = resp.user();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.full_name, "A B");
}

use super::*;

/// Tests that registering returns the user and a session cookie with the expected attributes.
///
/// Expected: 201 with normalized email and an HttpOnly, SameSite=Lax, 7-day cookie
#[tokio::test]
async fn register_sets_session_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": "  Ada@Example.com ",
                "password": "correct horse",
                "firstName": "Ada"
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("zyx_auth_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["firstName"], "Ada");
    assert!(body.get("passwordHash").is_none());
}

/// Tests registering the same email twice.
///
/// Expected: 400 "User already exists"
#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = TestApp::new().await;
    app.sign_up("ada@example.com").await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "ADA@example.com", "password": "another one" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "User already exists");
}

/// Tests registering without a password.
///
/// Expected: 400 with an explanatory message
#[tokio::test]
async fn register_requires_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "ada@example.com" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Email and password are required"
    );
}

/// Tests logging in with the right and the wrong password.
///
/// Expected: 200 with a cookie for the right password, 401 for the wrong one
#[tokio::test]
async fn login_verifies_password() {
    let app = TestApp::new().await;
    app.sign_up("ada@example.com").await;

    let ok = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "correct horse" })),
        )
        .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert!(set_cookie(&ok).starts_with("zyx_auth_token="));

    let wrong = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": "battery staple" })),
        )
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await["message"], "Invalid credentials");
}

/// Tests fetching the current user with and without a session.
///
/// Expected: 200 with profile fields when signed in, 401 otherwise
#[tokio::test]
async fn current_user_requires_session() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("ada@example.com").await;

    let signed_in = app
        .request(Method::GET, "/api/auth/user", Some(&cookie), None)
        .await;
    assert_eq!(signed_in.status(), StatusCode::OK);
    let body = body_json(signed_in).await;
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["profileImageUrl"].is_null());

    let anonymous = app.request(Method::GET, "/api/auth/user", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(anonymous).await["message"], "Unauthorized");
}

/// Tests that a token signed with another key is rejected.
///
/// Expected: 401
#[tokio::test]
async fn rejects_forged_token() {
    let app = TestApp::new().await;
    let forged = TokenService::new(b"some-other-secret-also-32-bytes-long!!")
        .issue(&crate::server::service::auth::token::SessionIdentity {
            user_id: "someone".to_string(),
            email: "someone@example.com".to_string(),
            first_name: None,
            last_name: None,
        })
        .unwrap();

    let response = app
        .request(
            Method::GET,
            "/api/auth/user",
            Some(&format!("zyx_auth_token={}", forged)),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that logout expires the session cookie.
///
/// Expected: 200 with an empty `zyx_auth_token` and `Max-Age=0`
#[tokio::test]
async fn logout_clears_cookie() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("ada@example.com").await;

    let response = app
        .request(Method::POST, "/api/auth/logout", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cleared = set_cookie(&response);
    assert!(cleared.starts_with("zyx_auth_token=;"));
    assert!(cleared.contains("Max-Age=0"));
}

mod common;

use admin_dashboard_api::database::models::Role;
use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn session_routes_reject_missing_credentials() -> Result<()> {
    let app = TestApp::new();

    for (method, uri) in [
        (Method::GET, "/profile"),
        (Method::PUT, "/profile"),
        (Method::GET, "/companies"),
        (Method::POST, "/companies"),
        (Method::GET, "/profiles"),
    ] {
        let body = if method == Method::GET { None } else { Some(json!({})) };
        let (status, body) = app.call(method.clone(), uri, None, body).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
    Ok(())
}

#[tokio::test]
async fn forged_token_is_rejected() -> Result<()> {
    let app = TestApp::new();
    let forged = TestApp::with_config(|c| c.security.jwt_secret = "someone-else".into()).token("u1");

    let (status, _) = app.call(Method::GET, "/profile", Some(&forged), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() -> Result<()> {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/profile")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())?;

    let (status, _) = app.send(request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn session_cookie_authenticates() -> Result<()> {
    let app = TestApp::new();
    app.seed_profile("cookie-user", Role::User).await;

    let request = Request::builder()
        .uri("/profile")
        .header(
            header::COOKIE,
            format!("theme=dark; sb-access-token={}", app.token("cookie-user")),
        )
        .body(Body::empty())?;

    let (status, body) = app.send(request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "cookie-user");
    Ok(())
}

#[tokio::test]
async fn non_admin_roles_are_forbidden_on_admin_routes() -> Result<()> {
    let app = TestApp::new();
    app.seed_profile("plain", Role::User).await;
    let token = app.token("plain");

    let (status, body) = app.call(Method::GET, "/companies", Some(&token), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = app
        .call(Method::POST, "/companies", Some(&token), Some(json!({ "name": "Acme" })))
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.call(Method::GET, "/profiles", Some(&token), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn session_without_profile_is_forbidden_on_admin_routes() -> Result<()> {
    let app = TestApp::new();
    let token = app.token("no-profile-yet");

    let (status, _) = app.call(Method::GET, "/companies", Some(&token), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn audience_is_checked_when_configured() -> Result<()> {
    let app = TestApp::with_config(|c| c.security.jwt_audience = Some("authenticated".into()));
    app.seed_profile("aud-user", Role::User).await;

    let (status, _) = app
        .call(Method::GET, "/profile", Some(&app.token("aud-user")), None)
        .await?;
    assert_eq!(status, StatusCode::OK);

    let no_aud = TestApp::new().token("aud-user");
    let (status, _) = app.call(Method::GET, "/profile", Some(&no_aud), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

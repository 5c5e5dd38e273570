mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};

use common::TestApp;

#[tokio::test]
async fn health_reports_ok_with_reachable_store() -> Result<()> {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Admin Dashboard API");
    assert!(body["endpoints"]["companies"].is_string());
    Ok(())
}

#[tokio::test]
async fn navigation_is_public_and_ordered() -> Result<()> {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/navigation", None, None).await?;
    assert_eq!(status, StatusCode::OK);

    let groups: Vec<&str> = body["navGroups"]
        .as_array()
        .expect("navGroups")
        .iter()
        .filter_map(|g| g["title"].as_str())
        .collect();
    assert_eq!(groups, vec!["General", "Pages", "Other"]);

    let companies = &body["navGroups"][0]["items"][1];
    assert_eq!(companies["title"], "Companies");
    assert_eq!(companies["url"], "/companies");
    assert_eq!(companies["icon"], "Building2");

    let auth_pages = body["navGroups"][1]["items"][0]["items"]
        .as_array()
        .expect("sub-items")
        .len();
    assert_eq!(auth_pages, 5);
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let app = TestApp::new();

    let (status, _) = app.call(Method::GET, "/does-not-exist", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

use super::*;

/// Tests dashboard totals across the caller's servers only.
///
/// Expected: counts cover the caller's two servers and ignore the other account's
#[tokio::test]
async fn stats_cover_owned_servers() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("owner@example.com").await;
    let other = app.sign_up("other@example.com").await;
    app.add_server(&cookie, "100", 10).await;
    app.add_server(&cookie, "101", 5).await;
    app.add_server(&other, "900", 1000).await;

    let response = app
        .request(Method::GET, "/api/dashboard/stats", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalServers"], 2);
    assert_eq!(body["totalMembers"], 15);
    assert_eq!(body["openTickets"], 0);
    assert_eq!(body["modActionsToday"], 0);
}

/// Tests dashboard stats for an account with no servers.
///
/// Expected: all zeros and empty activity lists
#[tokio::test]
async fn empty_account_has_zero_stats() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("owner@example.com").await;

    let stats = body_json(
        app.request(Method::GET, "/api/dashboard/stats", Some(&cookie), None)
            .await,
    )
    .await;
    assert_eq!(stats["totalServers"], 0);
    assert_eq!(stats["totalMembers"], 0);

    let activity = body_json(
        app.request(Method::GET, "/api/dashboard/activity", Some(&cookie), None)
            .await,
    )
    .await;
    assert_eq!(activity["modActions"], json!([]));
    assert_eq!(activity["tickets"], json!([]));
}

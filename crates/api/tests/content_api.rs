//! HTTP-level integration tests for articles, journals, and cards.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, login_token, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn article_crud_round(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/articles",
        &token,
        json!({ "title": "Welcome", "text": "Hello", "hyperlink": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Welcome");
    assert!(created["hyperlink"].is_null());
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/articles/{id}"),
        &token,
        json!({ "title": "Welcome back", "text": null, "hyperlink": "https://example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Welcome back");
    assert!(updated["text"].is_null());

    let list = body_json(get(app.clone(), "/api/articles").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &format!("/api/articles/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Article deleted successfully");
    assert_eq!(json["article"]["id"], id);

    let response = get(app, &format!("/api/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn article_without_title_is_rejected(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    let response = post_json_auth(app, "/api/articles", &token, json!({ "text": "orphan" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Title is required");
}

// ---------------------------------------------------------------------------
// Journals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn journal_requires_month_and_title(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    let response = post_json_auth(app, "/api/journals", &token, json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Month and title are required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn journal_create_update_delete(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/journals",
        &token,
        json!({ "month": "มกราคม", "title": "News" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/journals/{id}"),
        &token,
        json!({ "month": "กุมภาพันธ์", "title": "More news", "text": "body" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["month"], "กุมภาพันธ์");
    assert_eq!(updated["text"], "body");

    let response = delete_auth(app, &format!("/api/journals/{id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["message"], "Journal deleted successfully");
    assert_eq!(json["journal"]["title"], "More news");
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cards_list_newest_first(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    for title in ["one", "two"] {
        let response =
            post_json_auth(app.clone(), "/api/cards", &token, json!({ "title": title })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(app, "/api/cards").await).await;
    let titles: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["two", "one"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_missing_card_returns_404(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let token = login_token(app.clone()).await;

    let response =
        put_json_auth(app.clone(), "/api/cards/999", &token, json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, "/api/cards/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Card with id 999 not found");
}

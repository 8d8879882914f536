use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email, get_random_login};

#[tokio::test]
async fn should_return_200_for_correct_password() {
    let app = TestApp::new().await;
    let login = get_random_login();
    let created = app.create(&login, &get_random_email(), "Abc123!").await;

    let by_login = app
        .post_verify_password(&json!({ "login": login, "password": "Abc123!" }))
        .await;
    let by_id = app
        .post_verify_password(&json!({ "id": created["id"], "password": "Abc123!" }))
        .await;

    assert_eq!(by_login.status().as_u16(), 200);
    assert_eq!(by_id.status().as_u16(), 200);

    let body: Value = by_id.json().await.expect("Failed to parse body");
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn should_return_400_for_wrong_password() {
    let app = TestApp::new().await;
    let login = get_random_login();
    app.create(&login, &get_random_email(), "Abc123!").await;

    let response = app
        .post_verify_password(&json!({ "login": login, "password": "Abc123?" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "credential mismatch");
}

#[tokio::test]
async fn should_return_400_when_password_missing() {
    let app = TestApp::new().await;
    let login = get_random_login();
    app.create(&login, &get_random_email(), "Abc123!").await;

    let response = app.post_verify_password(&json!({ "login": login })).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_404_for_unknown_account() {
    let app = TestApp::new().await;

    let cases = [
        json!({ "login": "nobody", "password": "Abc123!" }),
        json!({ "id": "not-a-uuid", "password": "Abc123!" }),
        json!({ "password": "Abc123!" }),
    ];

    for case in cases {
        let response = app.post_verify_password(&case).await;
        assert_eq!(response.status().as_u16(), 404, "input: {case}");
    }
}

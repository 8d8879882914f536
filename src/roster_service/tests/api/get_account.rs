use serde_json::Value;

use crate::helpers::{TestApp, get_random_email, get_random_login};

#[tokio::test]
async fn should_return_account_by_id_and_by_login() {
    let app = TestApp::new().await;
    let login = get_random_login();
    let email = get_random_email();
    let created = app.create(&login, &email, "Abc123!").await;
    let id = created["id"].as_str().expect("id string").to_string();

    let by_id: Value = app
        .get_account(&[("id", &id)])
        .await
        .json()
        .await
        .expect("Failed to parse body");
    let by_login: Value = app
        .get_account(&[("login", &login)])
        .await
        .json()
        .await
        .expect("Failed to parse body");

    assert_eq!(by_id["account"], created);
    assert_eq!(by_login["account"], created);
    assert!(by_id["account"].get("password").is_none());
    assert!(by_id["account"].get("hashedPassword").is_none());
}

#[tokio::test]
async fn id_takes_precedence_over_login() {
    let app = TestApp::new().await;
    let first = app
        .create(&get_random_login(), &get_random_email(), "Abc123!")
        .await;
    let second_login = get_random_login();
    app.create(&second_login, &get_random_email(), "Abc123!")
        .await;

    let body: Value = app
        .get_account(&[
            ("id", first["id"].as_str().unwrap()),
            ("login", &second_login),
        ])
        .await
        .json()
        .await
        .expect("Failed to parse body");

    assert_eq!(body["account"]["id"], first["id"]);
}

#[tokio::test]
async fn should_return_null_account_when_nothing_matches() {
    let app = TestApp::new().await;

    for query in [
        vec![("login", "nobody")],
        vec![("id", "9b2f6c1e-0000-4000-8000-000000000000")],
        vec![("id", "not-a-uuid")],
        vec![("id", ""), ("login", "")],
        vec![],
    ] {
        let response = app.get_account(&query).await;
        assert_eq!(response.status().as_u16(), 200, "query: {query:?}");

        let body: Value = response.json().await.expect("Failed to parse body");
        assert!(body["account"].is_null(), "query: {query:?}");
    }
}

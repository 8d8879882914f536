use std::time::Duration;

use serde_json::{Value, json};

use crate::helpers::{SlowAccountStore, TestApp, get_random_email, get_random_login};

#[tokio::test]
async fn should_return_201_with_account_projection() {
    let app = TestApp::new().await;
    let login = get_random_login();
    let email = get_random_email();

    let response = app
        .post_account(&json!({
            "login": login,
            "email": email,
            "password": "Abc123!",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.expect("Failed to parse body");
    let account = body["account"].as_object().expect("account object");
    let mut keys: Vec<_> = account.keys().map(String::as_str).collect();
    keys.sort();

    assert_eq!(keys, ["createdAt", "email", "id", "login", "updatedAt"]);
    assert_eq!(account["login"], login.as_str());
    assert_eq!(account["email"], email.as_str());
    assert_eq!(account["createdAt"], account["updatedAt"]);
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let cases = [
        json!({ "login": "_abc", "email": email, "password": "Abc123!" }),
        json!({ "login": "ab cd", "email": email, "password": "Abc123!" }),
        json!({ "login": get_random_login(), "email": "not-an-email", "password": "Abc123!" }),
        json!({ "login": get_random_login(), "email": email, "password": "abc123!" }),
        json!({ "login": get_random_login(), "email": email }),
        json!({ "email": email, "password": "Abc123!" }),
    ];

    for case in cases {
        let response = app.post_account(&case).await;
        assert_eq!(response.status().as_u16(), 400, "input: {case}");

        let body: Value = response.json().await.expect("Failed to parse body");
        assert!(body["error"].is_string(), "input: {case}");
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/accounts", &app.address))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_409_for_duplicate_login() {
    let app = TestApp::new().await;
    let login = get_random_login();

    app.create(&login, &get_random_email(), "Abc123!").await;
    let response = app
        .post_account(&json!({
            "login": login,
            "email": get_random_email(),
            "password": "Abc123!",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);

    let response = app.get_account(&[("login", &login)]).await;
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["account"]["login"], login.as_str());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_same_login_admit_exactly_one() {
    let app = TestApp::new().await;
    let login = get_random_login();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let client = app.http_client.clone();
            let url = format!("{}/accounts", &app.address);
            let body = json!({
                "login": login,
                "email": get_random_email(),
                "password": "Abc123!",
            });
            tokio::spawn(async move {
                client
                    .post(url)
                    .json(&body)
                    .send()
                    .await
                    .expect("Failed to execute request")
                    .status()
                    .as_u16()
            })
        })
        .collect();

    let mut statuses = Vec::with_capacity(handles.len());
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == 201).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == 409).count(), 19);

    let response = app.get_account(&[("login", &login)]).await;
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["account"]["login"], login.as_str());
}

#[tokio::test]
async fn should_return_504_when_deadline_passes() {
    let store = SlowAccountStore::new(Duration::from_millis(500));
    let app = TestApp::with_store(store.clone()).await;

    let response = app
        .post_account_with_timeout(
            &json!({
                "login": get_random_login(),
                "email": get_random_email(),
                "password": "Abc123!",
            }),
            20,
        )
        .await;

    assert_eq!(response.status().as_u16(), 504);
    assert!(store.inner().is_empty().await);
}

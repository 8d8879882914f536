use serde_json::Value;

use crate::helpers::{TestApp, get_random_email, get_random_login};

#[tokio::test]
async fn should_return_every_account_sharing_an_email() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let first = app.create(&get_random_login(), &email, "Abc123!").await;
    let second = app.create(&get_random_login(), &email, "Abc123!").await;

    let response = app.get_accounts_by_email(&email).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse body");
    let accounts = body["accounts"].as_array().expect("accounts array");
    assert_eq!(accounts.len(), 2);
    assert!(accounts.contains(&first));
    assert!(accounts.contains(&second));
}

#[tokio::test]
async fn should_return_empty_list_for_unused_email() {
    let app = TestApp::new().await;

    let response = app.get_accounts_by_email(&get_random_email()).await;
    let body: Value = response.json().await.expect("Failed to parse body");

    assert_eq!(body["accounts"], Value::Array(vec![]));
}

#[tokio::test]
async fn should_return_400_for_malformed_email() {
    let app = TestApp::new().await;

    let response = app.get_accounts_by_email("not-an-email").await;

    assert_eq!(response.status().as_u16(), 400);
}

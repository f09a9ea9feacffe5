/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::*;
use connector::auth::*;
use connector::users::Role;
use connector::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn register_data() -> RegisterData {
    RegisterData {
        email: "student@work21.ru".to_string(),
        password: "secret123".to_string(),
        first_name: "Иван".to_string(),
        last_name: "Петров".to_string(),
        role: SignupRole::Student,
    }
}

#[test]
fn test_register_data_serialization() {
    let json = serde_json::to_value(register_data()).unwrap();

    assert_eq!(json["email"], "student@work21.ru");
    assert_eq!(json["first_name"], "Иван");
    assert_eq!(json["role"], "student");
}

#[test]
fn test_signup_role_parses_case_insensitively() {
    assert_eq!("Customer".parse::<SignupRole>().unwrap(), SignupRole::Customer);
    assert!("admin".parse::<SignupRole>().is_err());
    assert_eq!(Role::from(SignupRole::Student), Role::Student);
}

#[tokio::test]
async fn test_register_returns_created_user() {
    let (server, config) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "student@work21.ru",
            "password": "secret123",
            "first_name": "Иван",
            "last_name": "Петров",
            "role": "student"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(12, "student")))
        .mount(&server)
        .await;

    let user = register(&config, &register_data()).await.unwrap();

    assert_eq!(user.id, 12);
    assert_eq!(user.role, Role::Student);
}

#[tokio::test]
async fn test_register_conflict_surfaces_detail() {
    let (server, config) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Пользователь с таким email уже существует"})),
        )
        .mount(&server)
        .await;

    let err = register(&config, &register_data()).await.unwrap_err();

    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Пользователь с таким email уже существует");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_sends_form_fields() {
    let (server, config) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-value",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let res = login(&config, "student@work21.ru", "p&ss word").await.unwrap();

    assert_eq!(
        res,
        LoginResponse {
            access_token: "jwt-value".to_string(),
            token_type: "bearer".to_string(),
        }
    );

    let request = single_request(&server).await;
    let body = String::from_utf8(request.body.clone()).unwrap();
    assert_eq!(body, "username=student%40work21.ru&password=p%26ss+word");
}

#[tokio::test]
async fn test_login_never_sends_stored_token() {
    let (server, config) = setup(Some(TEST_TOKEN)).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-value",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    login(&config, "student@work21.ru", "secret123").await.unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_failure_uses_login_message() {
    let (server, config) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = login(&config, "student@work21.ru", "wrong").await.unwrap_err();

    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Неверный email или пароль");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_failure_prefers_server_detail() {
    let (server, config) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Аккаунт заблокирован"})),
        )
        .mount(&server)
        .await;

    let err = login(&config, "student@work21.ru", "secret123").await.unwrap_err();

    match err {
        Error::Http { message, .. } => assert_eq!(message, "Аккаунт заблокирован"),
        other => panic!("unexpected error: {:?}", other),
    }
}

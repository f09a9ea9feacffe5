/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use connector::{MemoryStorage, NoStorage, RequestConfig, TokenStorage};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::{MockServer, Request};

pub const TEST_TOKEN: &str = "test-token";

pub async fn setup(token: Option<&str>) -> (MockServer, RequestConfig) {
    let server = MockServer::start().await;
    let storage: Arc<dyn TokenStorage> = match token {
        Some(token) => Arc::new(MemoryStorage::with_token(token)),
        None => Arc::new(NoStorage),
    };

    let config = RequestConfig::new(server.uri(), storage);
    (server, config)
}

pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");

    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn body_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "email": format!("user{}@work21.ru", id),
        "first_name": "Иван",
        "last_name": "Петров",
        "role": role,
        "bio": null,
        "skills": "Rust, React",
        "rating_score": 4.5,
        "completed_projects": 3,
        "is_active": true,
        "is_verified": false,
        "created_at": "2025-01-10T12:00:00"
    })
}

pub fn project_json(id: i64, status: &str, tech_stack: Value) -> Value {
    json!({
        "id": id,
        "title": "Мобильное приложение для доставки",
        "description": "Кроссплатформенное приложение на React Native",
        "requirements": "iOS и Android",
        "budget": 150000.0,
        "deadline": "2025-02-01T00:00:00",
        "tech_stack": tech_stack,
        "status": status,
        "customer_id": 7,
        "generated_spec": null,
        "created_at": "2025-01-10T12:00:00",
        "updated_at": "2025-01-11T08:30:00",
        "tasks": [
            {
                "id": 2,
                "title": "API",
                "description": "Backend endpoints",
                "complexity": 3,
                "estimated_hours": 16,
                "status": "pending",
                "project_id": id,
                "order": 1,
                "created_at": "2025-01-10T12:05:00"
            },
            {
                "id": 1,
                "title": "Design",
                "description": "Screens",
                "complexity": 2,
                "status": "in_progress",
                "project_id": id,
                "assignee_id": 4,
                "order": 0,
                "created_at": "2025-01-10T12:04:00"
            }
        ]
    })
}

pub fn application_json(id: i64, project_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "project_id": project_id,
        "student_id": 4,
        "cover_letter": "Имею опыт работы с React Native",
        "proposed_rate": 140000.0,
        "status": status,
        "created_at": "2025-01-12T09:00:00"
    })
}

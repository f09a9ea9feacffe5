/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::*;
use connector::ratings::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn rating_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "project_id": 3,
        "reviewer_id": 7,
        "reviewee_id": 4,
        "score": 5,
        "comment": "Отличная работа",
        "quality_score": 5,
        "communication_score": 4,
        "deadline_score": null
    })
}

#[tokio::test]
async fn test_create_rating() {
    let (server, config) = setup(Some(TEST_TOKEN)).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/ratings/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(rating_json(1)))
        .mount(&server)
        .await;

    let data = RatingCreate {
        project_id: 3,
        reviewee_id: 4,
        score: 5,
        comment: Some("Отличная работа".to_string()),
        quality_score: None,
        communication_score: None,
        deadline_score: None,
    };

    let rating = create(&config, &data).await.unwrap();
    assert_eq!(rating.score, 5);
    assert_eq!(rating.deadline_score, None);

    let request = single_request(&server).await;
    assert_eq!(
        body_json(&request),
        json!({"project_id": 3, "reviewee_id": 4, "score": 5, "comment": "Отличная работа"})
    );
}

#[tokio::test]
async fn test_rating_for_unfinished_project_fails() {
    let (server, config) = setup(Some(TEST_TOKEN)).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/ratings/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"detail": "Можно оставить отзыв только после завершения проекта"}),
        ))
        .mount(&server)
        .await;

    let data = RatingCreate {
        project_id: 3,
        reviewee_id: 4,
        score: 4,
        comment: None,
        quality_score: None,
        communication_score: None,
        deadline_score: None,
    };

    let err = create(&config, &data).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_get_for_user() {
    let (server, config) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ratings/user/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([rating_json(1), rating_json(2)])))
        .mount(&server)
        .await;

    let ratings = get_for_user(&config, 4, 0, 20).await.unwrap();
    assert_eq!(ratings.len(), 2);
    assert!(ratings.iter().all(|r| r.reviewee_id == 4));

    let request = single_request(&server).await;
    assert_eq!(request.url.query(), Some("skip=0&limit=20"));
}

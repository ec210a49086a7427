use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::registry::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn list(app: &Router) -> Value {
    let (status, json) = send(app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    json
}

async fn post(app: &Router, activity: &str, action: &str, email: &str) -> (StatusCode, Value) {
    let uri = format!(
        "/activities/{}/{action}?email={email}",
        activity.replace(' ', "%20")
    );
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

fn roster(json: &Value, activity: &str) -> Vec<String> {
    json[activity]["participants"]
        .as_array()
        .expect("participants should be a list")
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn repeated_listing_is_stable() {
    let app = router(make_test_state());
    assert_eq!(list(&app).await, list(&app).await);
}

#[tokio::test]
async fn signup_shows_up_in_the_listing_and_touches_nothing_else() {
    let app = router(make_test_state());
    let before = list(&app).await;

    let (status, _) = post(&app, "Chess Club", "signup", "new@x.edu").await;
    assert_eq!(status, StatusCode::OK);

    let after = list(&app).await;
    let chess = roster(&after, "Chess Club");
    assert!(chess.contains(&"new@x.edu".to_string()));
    assert_eq!(chess.len(), roster(&before, "Chess Club").len() + 1);
    for (name, details) in before.as_object().unwrap() {
        if name != "Chess Club" {
            assert_eq!(&after[name], details, "{name} should be untouched");
        }
    }
}

#[tokio::test]
async fn duplicate_signup_leaves_the_roster_unchanged() {
    let app = router(make_test_state());
    let before = list(&app).await;

    let (status, json) = post(&app, "Chess Club", "signup", "michael@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("already signed up")
    );
    assert_eq!(list(&app).await, before);
}

#[tokio::test]
async fn signup_is_rejected_once_the_activity_is_at_capacity() {
    let app = router(make_test_state());

    for i in 0..10 {
        let (status, _) = post(
            &app,
            "Chess Club",
            "signup",
            &format!("student{i}@mergington.edu"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = post(&app, "Chess Club", "signup", "overflow@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().to_lowercase().contains("capacity"));
    assert_eq!(roster(&list(&app).await, "Chess Club").len(), 12);
}

#[tokio::test]
async fn unregister_frees_a_seat_in_a_full_activity() {
    let app = router(make_test_state());

    for i in 0..10 {
        let (status, _) = post(
            &app,
            "Chess Club",
            "signup",
            &format!("student{i}@mergington.edu"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = post(&app, "Chess Club", "signup", "waiting@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "Chess Club", "unregister", "student4@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster(&list(&app).await, "Chess Club").len(), 11);

    let (status, _) = post(&app, "Chess Club", "signup", "waiting@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);

    let chess = roster(&list(&app).await, "Chess Club");
    assert_eq!(chess.len(), 12);
    assert_eq!(chess.last().map(String::as_str), Some("waiting@mergington.edu"));
    assert!(!chess.contains(&"student4@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_and_unregister_round_trip() {
    let app = router(make_test_state());
    let initial = roster(&list(&app).await, "Programming Class").len();

    let (status, _) = post(&app, "Programming Class", "signup", "workflow@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        roster(&list(&app).await, "Programming Class").len(),
        initial + 1
    );

    let (status, _) = post(
        &app,
        "Programming Class",
        "unregister",
        "workflow@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let after = roster(&list(&app).await, "Programming Class");
    assert_eq!(after.len(), initial);
    assert!(!after.contains(&"workflow@mergington.edu".to_string()));
}

#[tokio::test]
async fn multiple_signups_keep_signup_order() {
    let app = router(make_test_state());
    let emails = [
        "student1@mergington.edu",
        "student2@mergington.edu",
        "student3@mergington.edu",
    ];

    for email in emails {
        let (status, _) = post(&app, "Art Club", "signup", email).await;
        assert_eq!(status, StatusCode::OK);
    }

    let participants = roster(&list(&app).await, "Art Club");
    assert_eq!(participants.len(), 2 + emails.len());
    assert_eq!(&participants[2..], &emails);
}

#[tokio::test]
async fn failed_unregisters_do_not_mutate_state() {
    let app = router(make_test_state());
    let before = list(&app).await;

    let (status, json) = post(
        &app,
        "Chess Club",
        "unregister",
        "notregistered@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("not registered")
    );

    let (status, json) = post(
        &app,
        "Nonexistent Activity",
        "unregister",
        "student@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["detail"].as_str().unwrap().to_lowercase().contains("not found"));

    assert_eq!(list(&app).await, before);
}

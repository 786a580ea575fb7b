// End to end tests over the fully wired router: bundled corpus, bundled
// lexicon, in memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;

use dnasb::shared::infrastructure::config::Config;
use dnasb::shell::bootstrap::build_state;
use dnasb::shell::http::router;

#[fixture]
fn app() -> Router {
    router(build_state(&Config::default()).expect("bundled resources should load"))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, location, serde_json::from_slice(&bytes).unwrap())
}

fn post_form(content: &str) -> Request<Body> {
    Request::post("/spam")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("content={}", content.replace(' ', "+"))))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_convert_spam_to_ham(app: Router) {
    let (status, location, json) = send(&app, post_form("This is not a spam message")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/spam/1"));
    assert_eq!(json["id"], "1");

    let (status, _, json) = send(&app, get("/ham/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["content"], "This is not a spam message");
}

#[rstest]
#[tokio::test]
async fn it_should_rewrite_shouting_spam(app: Router) {
    send(&app, post_form("FREE AVOCADOS")).await;

    let (status, _, json) = send(&app, get("/spam/1/ham")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_ne!(json["content"], "");
    assert_ne!(json["content"], "FREE AVOCADOS");
}

#[rstest]
#[tokio::test]
async fn it_should_hand_out_sequential_ids(app: Router) {
    for expected in ["1", "2", "3"] {
        let (_, location, json) = send(&app, post_form("win cash")).await;
        assert_eq!(json["id"], expected);
        assert_eq!(location, Some(format!("/spam/{expected}")));
    }
}

#[rstest]
#[tokio::test]
async fn it_should_report_ham_not_found(app: Router) {
    let (status, _, json) = send(&app, get("/ham/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Ham 4 doesn't exist");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_spam_without_content(app: Router) {
    let request = Request::post("/spam")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, location, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(location, None);
    assert_eq!(json["message"], "Content field is not specified");
}

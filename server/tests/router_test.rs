//! Router tests driven through `tower::ServiceExt::oneshot`.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use common::fixture;
use feedback_server::router;
use tower::ServiceExt;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn json_post(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/submissions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_index_serves_form() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<form method=\"post\" action=\"/submit\">"));
    assert!(html.contains("name=\"course_name\""));
    assert!(html.contains("How satisfied are you with the course selection process?"));
}

#[tokio::test]
async fn test_form_post_without_course_name_rerenders_with_error() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(form_post(
            "course_name=&course_selection_feedback=Neutral&other_comments=Hi",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Please fill in all required fields, including course name."));
    assert!(html.contains("<option value=\"Neutral\" selected>Neutral</option>"));
    assert_eq!(fx.ids.calls(), 0);
    assert!(fx.transport.delivered().is_empty());
}

#[tokio::test]
async fn test_form_post_sends_feedback() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(form_post(
            "course_name=Data+101&course_selection_feedback=Satisfied&course_info_clarity=Yes",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("data-code=\"FEEDBACK_SENT\""));
    assert!(html.contains("Feedback form submitted and sent to feedback@example.edu."));
    assert!(html.contains("value=\"Data 101\""));
    assert_eq!(fx.transport.delivered().len(), 1);
}

#[tokio::test]
async fn test_json_submission_report() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(json_post(serde_json::json!({
            "course_name": "Data 101",
            "course_selection_feedback": "Satisfied",
            "course_info_clarity": "Yes",
        })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let report: serde_json::Value =
        serde_json::from_str(&body_text(response).await).expect("json report");
    assert_eq!(report["sent"], true);
    assert_eq!(report["submission_id"], "sub-1");
    assert_eq!(report["notices"][0]["code"], "FEEDBACK_SENT");
    assert_eq!(report["notices"][0]["level"], "success");
}

#[tokio::test]
async fn test_json_validation_error_is_422() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(json_post(serde_json::json!({ "course_name": "" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: serde_json::Value =
        serde_json::from_str(&body_text(response).await).expect("json error");
    assert_eq!(error["code"], "REQUIRED_FIELD_MISSING");
    assert_eq!(error["details"]["field"], "course_name");
    assert_eq!(fx.ids.calls(), 0);
}

#[tokio::test]
async fn test_unknown_option_label_is_rejected() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(json_post(serde_json::json!({
            "course_name": "Data 101",
            "course_info_clarity": "Maybe",
        })))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
    assert_eq!(fx.ids.calls(), 0);
}

#[tokio::test]
async fn test_form_post_escapes_submitted_text() {
    let fx = fixture();
    let response = router(fx.state.clone())
        .oneshot(form_post(
            "course_name=%3Cscript%3Ealert(1)%3C%2Fscript%3E&other_comments=%3C%2Ftextarea%3E",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("value=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
    assert!(html.contains("&lt;/textarea&gt;</textarea>"));
}

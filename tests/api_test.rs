//! REST API tests
//!
//! Drive the full filter tree with `warp::test` against the in-memory store
//! and the mock AI provider.

mod helpers;

use chrono::Utc;
use helpers::*;
use serde_json::{json, Value};
use uuid::Uuid;
use warp::http::StatusCode;
use EduCenter::models::{Course, GroupWithRelations, User, UserWithRelations};

async fn get(ctx: &TestContext, path: &str) -> (StatusCode, Value) {
    let response = warp::test::request().method("GET").path(path).reply(&ctx.routes()).await;
    let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (response.status(), body)
}

async fn post<T: serde::Serialize>(ctx: &TestContext, path: &str, body: &T) -> (StatusCode, Value) {
    let response = warp::test::request()
        .method("POST")
        .path(path)
        .json(body)
        .reply(&ctx.routes())
        .await;
    let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (response.status(), body)
}

#[tokio::test]
async fn test_created_course_is_listed() {
    let ctx = TestContext::new().await;

    let (status, created) = post(&ctx, "/api/courses", &python_course()).await;
    assert_eq!(status, StatusCode::OK);
    let created: Course = serde_json::from_value(created).unwrap();

    let (status, listed) = get(&ctx, "/api/courses").await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Course> = serde_json::from_value(listed).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Python asoslari");
    assert_eq!(listed[0].duration, "3 oy");
    assert_eq!(listed[0].category, "IT");
    assert_eq!(listed[0].id, created.id);
}

#[tokio::test]
async fn test_create_user_assigns_id_and_join_time() {
    let ctx = TestContext::new().await;
    let before = Utc::now();

    let (status, first) = post(&ctx, "/api/users", &create_test_student("Aziza")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = post(&ctx, "/api/users", &create_test_student("Aziza")).await;

    let first: User = serde_json::from_value(first).unwrap();
    let second: User = serde_json::from_value(second).unwrap();

    assert!(first.joined_at >= before);
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Aziza");
}

#[tokio::test]
async fn test_users_are_filtered_by_role() {
    let ctx = TestContext::new().await;
    post(&ctx, "/api/users", &create_test_student("Aziza")).await;
    post(&ctx, "/api/users", &create_test_teacher("Dilnoza", "Matematika")).await;

    let (_, all) = get(&ctx, "/api/users").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, teachers) = get(&ctx, "/api/users?role=TEACHER").await;
    assert_eq!(status, StatusCode::OK);
    let teachers: Vec<UserWithRelations> = serde_json::from_value(teachers).unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].user.specialty.as_deref(), Some("Matematika"));

    let (_, unfiltered) = get(&ctx, "/api/users?role=").await;
    assert_eq!(unfiltered.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_role_filter_fails_with_label() {
    let ctx = TestContext::new().await;

    let (status, body) = get(&ctx, "/api/users?role=ADMIN").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch users" }));
}

#[tokio::test]
async fn test_group_student_ids_round_trip() {
    let ctx = TestContext::new().await;

    let (_, course) = post(&ctx, "/api/courses", &python_course()).await;
    let (_, teacher) = post(&ctx, "/api/users", &create_test_teacher("Dilnoza", "Python")).await;
    let (_, a) = post(&ctx, "/api/users", &create_test_student("Aziza")).await;
    let (_, b) = post(&ctx, "/api/users", &create_test_student("Bobur")).await;

    let course: Course = serde_json::from_value(course).unwrap();
    let teacher: User = serde_json::from_value(teacher).unwrap();
    let a: User = serde_json::from_value(a).unwrap();
    let b: User = serde_json::from_value(b).unwrap();

    let (status, created) = post(&ctx, "/api/groups", &create_test_group(course.id, teacher.id, vec![a.id, b.id])).await;
    assert_eq!(status, StatusCode::OK);
    let created: GroupWithRelations = serde_json::from_value(created).unwrap();

    let (_, listed) = get(&ctx, "/api/groups").await;
    let listed: Vec<GroupWithRelations> = serde_json::from_value(listed).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    let mut ids = listed[0].group.student_ids.clone();
    ids.sort();
    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(ids, expected);

    assert_eq!(listed[0].teacher.as_ref().map(|t| t.id), Some(teacher.id));
    assert_eq!(listed[0].course.as_ref().map(|c| c.title.as_str()), Some("Python asoslari"));
    assert_eq!(listed[0].students.len(), 2);
}

#[tokio::test]
async fn test_users_list_expands_groups() {
    let ctx = TestContext::new().await;

    let (_, course) = post(&ctx, "/api/courses", &python_course()).await;
    let (_, teacher) = post(&ctx, "/api/users", &create_test_teacher("Dilnoza", "Python")).await;
    let (_, student) = post(&ctx, "/api/users", &create_test_student("Aziza")).await;
    let course: Course = serde_json::from_value(course).unwrap();
    let teacher: User = serde_json::from_value(teacher).unwrap();
    let student: User = serde_json::from_value(student).unwrap();

    post(&ctx, "/api/groups", &create_test_group(course.id, teacher.id, vec![student.id])).await;

    let (_, users) = get(&ctx, "/api/users").await;
    let users: Vec<UserWithRelations> = serde_json::from_value(users).unwrap();

    let listed_teacher = users.iter().find(|u| u.user.id == teacher.id).unwrap();
    assert_eq!(listed_teacher.teaching_groups.len(), 1);
    assert!(listed_teacher.groups.is_empty());

    let listed_student = users.iter().find(|u| u.user.id == student.id).unwrap();
    assert_eq!(listed_student.groups.len(), 1);
    assert_eq!(listed_student.groups[0].name, "N1");
}

#[tokio::test]
async fn test_group_without_students() {
    let ctx = TestContext::new().await;
    let (_, course) = post(&ctx, "/api/courses", &python_course()).await;
    let (_, teacher) = post(&ctx, "/api/users", &create_test_teacher("Dilnoza", "Python")).await;

    let body = json!({
        "name": "N2",
        "courseId": course["id"],
        "teacherId": teacher["id"],
        "schedule": "Sesh-Pay 14:00"
    });
    let (status, created) = post(&ctx, "/api/groups", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["studentIds"], json!([]));
    assert_eq!(created["students"], json!([]));
}

#[tokio::test]
async fn test_group_with_unknown_course_fails() {
    let ctx = TestContext::new().await;
    let (_, teacher) = post(&ctx, "/api/users", &create_test_teacher("Dilnoza", "Python")).await;
    let teacher: User = serde_json::from_value(teacher).unwrap();

    let (status, body) = post(&ctx, "/api/groups", &create_test_group(Uuid::new_v4(), teacher.id, vec![])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create group" }));

    let (_, groups) = get(&ctx, "/api/groups").await;
    assert_eq!(groups, json!([]));
}

#[tokio::test]
async fn test_user_with_unknown_course_fails() {
    let ctx = TestContext::new().await;
    let mut student = create_test_student("Aziza");
    student.course_id = Some(Uuid::new_v4());

    let (status, body) = post(&ctx, "/api/users", &student).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create user" }));
}

#[tokio::test]
async fn test_generate_description() {
    let ctx = TestContext::new().await;
    ctx.ai_mock.mock_text("Python asoslari kursi dasturlashni noldan o'rgatadi. Amaliy loyihalar bilan.").await;

    let (status, body) = post(&ctx, "/api/ai/generate-description", &json!({ "courseTitle": "Python asoslari" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Python asoslari kursi dasturlashni noldan o'rgatadi. Amaliy loyihalar bilan.");

    let prompts = ctx.ai_mock.received_prompts().await;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"Python asoslari\""));
}

#[tokio::test]
async fn test_generate_prompt_embeds_requirements() {
    let ctx = TestContext::new().await;
    ctx.ai_mock.mock_text("Build a Telegram bot...").await;

    let (status, body) = post(&ctx, "/api/ai/generate-prompt", &json!({ "requirements": "Bot ism so'rasin" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Build a Telegram bot...");
    assert!(ctx.ai_mock.received_prompts().await[0].contains("Bot ism so'rasin"));
}

#[tokio::test]
async fn test_ai_provider_failures_share_one_label() {
    let ctx = TestContext::new().await;
    ctx.ai_mock.mock_error(429).await;

    let (status, body) = post(&ctx, "/api/ai/generate-prompt", &json!({ "requirements": "x" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "AI generation failed" }));
}

#[tokio::test]
async fn test_ai_empty_candidates_fail() {
    let ctx = TestContext::new().await;
    ctx.ai_mock.mock_body(json!({ "candidates": [] })).await;

    let (status, body) = post(&ctx, "/api/ai/generate-description", &json!({ "courseTitle": "IELTS" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI generation failed");
}

#[tokio::test]
async fn test_malformed_body_is_generic_error() {
    let ctx = TestContext::new().await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/users")
        .header("content-type", "application/json")
        .body(r#"{"name":"Aziza"}"#)
        .reply(&ctx.routes())
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_api_routes_are_not_found_except_get() {
    let ctx = TestContext::new().await;

    let (status, body) = post(&ctx, "/api/unknown", &json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));

    let response = warp::test::request().method("DELETE").path("/api/users").reply(&ctx.routes()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = warp::test::request().method("PUT").path("/api/nothing-here").reply(&ctx.routes()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let page = warp::test::request().method("GET").path("/api/nothing-here").reply(&ctx.routes()).await;
    assert_eq!(page.status(), StatusCode::OK);
    assert_eq!(page.body().as_ref(), INDEX_HTML.as_bytes());

    let page = warp::test::request()
        .method("GET")
        .path("/api/ai/generate-description")
        .reply(&ctx.routes())
        .await;
    assert_eq!(page.status(), StatusCode::OK);
    assert_eq!(page.body().as_ref(), INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let (status, body) = get(&ctx, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_static_assets_and_spa_fallback() {
    let ctx = TestContext::new().await;

    let asset = warp::test::request().path("/assets/app.js").reply(&ctx.routes()).await;
    assert_eq!(asset.status(), StatusCode::OK);
    assert_eq!(asset.body().as_ref(), b"console.log('app');");

    let page = warp::test::request().path("/groups/some-client-route").reply(&ctx.routes()).await;
    assert_eq!(page.status(), StatusCode::OK);
    assert_eq!(page.body().as_ref(), INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let ctx = TestContext::new().await;

    let response = warp::test::request()
        .method("GET")
        .path("/api/courses")
        .header("origin", "https://admin.example.uz")
        .reply(&ctx.routes())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

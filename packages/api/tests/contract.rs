//! Contract tests against an in-process mock of the Yummly backend.
//!
//! The mock keeps the server-side rules the client relies on: one admin per
//! group, the admin is always a moderator, and only the author, a moderator or
//! the admin may delete a message.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiError, GroupService, AuthService, ACTING_USER_HEADER};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Clone)]
struct GroupRecord {
    name: String,
    admin_id: i64,
    members: BTreeSet<i64>,
    moderators: BTreeSet<i64>,
}

#[derive(Clone)]
struct MessageRecord {
    id: i64,
    user_id: i64,
    content: String,
    created_at: String,
}

#[derive(Default)]
struct Backend {
    groups: HashMap<i64, GroupRecord>,
    messages: HashMap<i64, Vec<MessageRecord>>,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<Backend>>;

fn acting_user(headers: &HeaderMap) -> Option<i64> {
    headers
        .get(ACTING_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn user_json(id: i64) -> Value {
    json!({ "id": id, "name": format!("user{id}"), "email": format!("user{id}@example.com") })
}

fn group_json(id: i64, g: &GroupRecord) -> Value {
    json!({
        "id": id,
        "name": g.name,
        "description": "A group for testing",
        "cuisineType": "Italian",
        "imageUrl": null,
        "adminId": g.admin_id,
        "memberCount": g.members.len(),
    })
}

async fn get_group(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut db = db.lock().unwrap();
    db.requests.push(format!("GET /api/groups/{id}"));
    match db.groups.get(&id) {
        Some(g) => Json(group_json(id, g)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_groups(State(db): State<Shared>) -> Json<Value> {
    let mut db = db.lock().unwrap();
    db.requests.push("GET /api/groups".into());
    let groups: Vec<Value> = db.groups.iter().map(|(id, g)| group_json(*id, g)).collect();
    Json(Value::Array(groups))
}

async fn members(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    match db.groups.get(&id) {
        Some(g) => Json(g.members.iter().map(|u| user_json(*u)).collect::<Vec<_>>()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn moderators(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    match db.groups.get(&id) {
        Some(g) => {
            Json(g.moderators.iter().map(|u| user_json(*u)).collect::<Vec<_>>()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn role_check(
    State(db): State<Shared>,
    Path((id, check)): Path<(i64, String)>,
    headers: HeaderMap,
) -> Response {
    let db = db.lock().unwrap();
    let (Some(g), Some(user)) = (db.groups.get(&id), acting_user(&headers)) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let answer = match check.as_str() {
        "is-member" => g.members.contains(&user),
        "is-moderator" => g.moderators.contains(&user),
        "is-admin" => g.admin_id == user,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    Json(answer).into_response()
}

async fn transfer_ownership(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(new_admin) = body.get("newAdminId").and_then(Value::as_i64) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let Some(g) = db.groups.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if acting_user(&headers) != Some(g.admin_id) {
        return StatusCode::FORBIDDEN.into_response();
    }
    if !g.members.contains(&new_admin) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "New admin must be a member" })),
        )
            .into_response();
    }
    g.admin_id = new_admin;
    g.moderators.insert(new_admin);
    StatusCode::OK.into_response()
}

async fn remove_moderator(
    State(db): State<Shared>,
    Path((id, user)): Path<(i64, i64)>,
    headers: HeaderMap,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(g) = db.groups.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if acting_user(&headers) != Some(g.admin_id) {
        return StatusCode::FORBIDDEN.into_response();
    }
    if user == g.admin_id {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "The admin is always a moderator" })),
        )
            .into_response();
    }
    g.moderators.remove(&user);
    StatusCode::OK.into_response()
}

async fn list_messages(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let db = db.lock().unwrap();
    let Some(g) = db.groups.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if !acting_user(&headers).is_some_and(|u| g.members.contains(&u)) {
        return StatusCode::FORBIDDEN.into_response();
    }
    let messages: Vec<Value> = db
        .messages
        .get(&id)
        .into_iter()
        .flatten()
        .map(|m| message_json(id, m))
        .collect();
    Json(Value::Array(messages)).into_response()
}

fn message_json(group: i64, m: &MessageRecord) -> Value {
    json!({
        "id": m.id,
        "groupId": group,
        "userId": m.user_id,
        "userName": format!("user{}", m.user_id),
        "content": m.content,
        "createdAt": m.created_at,
    })
}

async fn post_message(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(g) = db.groups.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(user) = acting_user(&headers).filter(|u| g.members.contains(u)) else {
        return StatusCode::FORBIDDEN.into_response();
    };
    let Some(content) = body["content"].as_str().filter(|c| !c.trim().is_empty()) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let next_id = db.messages.values().flatten().map(|m| m.id).max().unwrap_or(0) + 1;
    let record = MessageRecord {
        id: next_id,
        user_id: user,
        content: content.to_string(),
        created_at: format!("2024-03-01T11:{:02}:00", next_id % 60),
    };
    let json = message_json(id, &record);
    db.messages.entry(id).or_default().push(record);
    (StatusCode::CREATED, Json(json)).into_response()
}

async fn delete_message(
    State(db): State<Shared>,
    Path((id, message_id)): Path<(i64, i64)>,
    headers: HeaderMap,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(user) = acting_user(&headers) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let Some(g) = db.groups.get(&id).cloned() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(messages) = db.messages.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(pos) = messages.iter().position(|m| m.id == message_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let allowed = messages[pos].user_id == user || g.moderators.contains(&user) || g.admin_id == user;
    if !allowed {
        return StatusCode::FORBIDDEN.into_response();
    }
    messages.remove(pos);
    StatusCode::NO_CONTENT.into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "ada@example.com" && body["password"] == "secret" {
        Json(json!({ "id": 2, "name": "Ada", "email": "ada@example.com", "password": "secret" }))
            .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
    }
}

fn seeded() -> Backend {
    let mut backend = Backend::default();
    backend.groups.insert(
        5,
        GroupRecord {
            name: "Pasta Lovers".into(),
            admin_id: 2,
            members: [2, 3, 9].into_iter().collect(),
            moderators: [2, 3].into_iter().collect(),
        },
    );
    backend.messages.insert(
        5,
        vec![
            MessageRecord { id: 1, user_id: 9, content: "later".into(), created_at: "2024-03-01T10:05:00".into() },
            MessageRecord { id: 2, user_id: 9, content: "earlier".into(), created_at: "2024-03-01T10:00:00".into() },
        ],
    );
    backend
}

async fn spawn_backend() -> (ApiClient, Shared) {
    let db: Shared = Arc::new(Mutex::new(seeded()));
    let app = Router::new()
        .route("/api/groups", get(list_groups))
        .route("/api/groups/{id}", get(get_group))
        .route("/api/groups/{id}/members", get(members))
        .route("/api/groups/{id}/moderators", get(moderators))
        .route("/api/groups/{id}/moderators/{user}", delete(remove_moderator))
        .route("/api/groups/{id}/transfer-ownership", post(transfer_ownership))
        .route(
            "/api/groups/{id}/messages",
            get(list_messages).post(post_message),
        )
        .route("/api/groups/{id}/messages/{message}", delete(delete_message))
        .route("/api/groups/{id}/{check}", get(role_check))
        .route("/api/v1/login", post(login))
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ApiClient::with_base_url(&format!("http://{addr}")), db)
}

#[tokio::test]
async fn test_transfer_ownership_moves_admin_and_keeps_old_admin_member() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    groups.transfer_ownership(5, 9, 2).await.unwrap();

    let group = groups.get(5).await.unwrap();
    assert_eq!(group.admin_id, 9);

    let members = groups.members(5).await.unwrap();
    assert!(members.iter().any(|u| u.id == 2));

    let flags = groups.role_flags(5, 9).await.unwrap();
    assert!(flags.is_admin && flags.is_member);
    let old = groups.role_flags(5, 2).await.unwrap();
    assert!(!old.is_admin && old.is_member);
}

#[tokio::test]
async fn test_transfer_by_non_admin_is_forbidden() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let err = groups.transfer_ownership(5, 9, 3).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(groups.get(5).await.unwrap().admin_id, 2);
}

#[tokio::test]
async fn test_removing_admin_from_moderators_is_rejected() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let err = groups.remove_moderator(5, 2, 2).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("fallback"), "The admin is always a moderator");

    let moderators = groups.moderators(5).await.unwrap();
    assert!(moderators.iter().any(|u| u.id == 2));

    groups.remove_moderator(5, 3, 2).await.unwrap();
    let moderators = groups.moderators(5).await.unwrap();
    assert!(!moderators.iter().any(|u| u.id == 3));
}

#[tokio::test]
async fn test_message_delete_rights() {
    let (client, db) = spawn_backend().await;
    let groups = GroupService::new(client);

    // A plain member cannot delete someone else's message.
    db.lock().unwrap().messages.get_mut(&5).unwrap().push(MessageRecord {
        id: 3,
        user_id: 2,
        content: "admin note".into(),
        created_at: "2024-03-01T10:10:00".into(),
    });
    let err = groups.delete_message(5, 3, 9).await.unwrap_err();
    assert_eq!(err.status(), Some(403));

    // Author.
    groups.delete_message(5, 1, 9).await.unwrap();
    // Moderator.
    groups.delete_message(5, 2, 3).await.unwrap();
    // Admin.
    groups.delete_message(5, 3, 2).await.unwrap();

    assert!(groups.messages(5, 2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_polled_messages_display_oldest_first() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let polled = groups.messages(5, 9).await.unwrap();
    assert_eq!(polled.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);

    let shown = api::in_display_order(polled);
    assert_eq!(shown.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[tokio::test]
async fn test_non_member_cannot_read_messages() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let err = groups.messages(5, 42).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
}

#[tokio::test]
async fn test_posted_message_shows_last_after_refetch() {
    let (client, _db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let sent = groups.post_message(5, "who brings the parmesan?", 3).await.unwrap();
    assert_eq!(sent.user_id, 3);
    assert_eq!(sent.content, "who brings the parmesan?");

    let shown = api::in_display_order(groups.messages(5, 9).await.unwrap());
    assert_eq!(shown.len(), 3);
    let last = shown.last().unwrap();
    assert_eq!(last.id, sent.id);
    assert_eq!(last.content, "who brings the parmesan?");
}

#[tokio::test]
async fn test_non_member_cannot_post_message() {
    let (client, db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let err = groups.post_message(5, "let me in", 42).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
    assert_eq!(db.lock().unwrap().messages[&5].len(), 2);
}

#[tokio::test]
async fn test_login_surfaces_plain_text_reason() {
    let (client, _db) = spawn_backend().await;
    let auth = AuthService::new(client);

    let user = auth.login("ada@example.com", "secret").await.unwrap();
    assert_eq!(user.id, 2);

    let err = auth.login("ada@example.com", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn test_list_groups_fetches_once() {
    let (client, db) = spawn_backend().await;
    let groups = GroupService::new(client);

    let all = groups.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].member_count, Some(3));
    assert_eq!(db.lock().unwrap().requests, vec!["GET /api/groups".to_string()]);
}

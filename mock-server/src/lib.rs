//! In-memory stand-in for the JSONPlaceholder REST API.
//!
//! Serves `users`, `posts`, `comments` and `todos` from a fixed seed. Writes
//! behave like the public service: they answer as if they succeeded but the
//! dataset never changes.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::{debug, info};

pub mod seed;

/// Seeded collections keyed by route name.
#[derive(Debug, Clone)]
pub struct Dataset {
    collections: HashMap<&'static str, Vec<Value>>,
}

impl Dataset {
    pub fn seeded() -> Self {
        let collections = HashMap::from([
            ("users", seed::users()),
            ("posts", seed::posts()),
            ("comments", seed::comments()),
            ("todos", seed::todos()),
        ]);
        Self { collections }
    }

    pub fn collection(&self, name: &str) -> Option<&[Value]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    pub fn find(&self, name: &str, id: &str) -> Option<&Value> {
        let id: i64 = id.parse().ok()?;
        self.collection(name)?.iter().find(|record| record["id"] == id)
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    let db: Db = Arc::new(Dataset::seeded());
    Router::new()
        .route("/{collection}", get(list_records).post(create_record))
        .route(
            "/{collection}/{id}",
            get(get_record)
                .put(replace_record)
                .patch(update_record)
                .delete(delete_record),
        )
        .route("/{collection}/{id}/{child}", get(list_children))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

/// 404 with the `{}` body the public service sends.
fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
}

/// Compare a record field with a query value the way a query string does:
/// as text.
fn field_matches(record: &Value, key: &str, expected: &str) -> bool {
    match record.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

async fn list_records(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Query(filters): Query<Vec<(String, String)>>,
) -> Response {
    let Some(records) = db.collection(&collection) else {
        return not_found();
    };
    let matched: Vec<Value> = records
        .iter()
        .filter(|record| filters.iter().all(|(k, v)| field_matches(record, k, v)))
        .cloned()
        .collect();
    debug!(collection = %collection, filters = filters.len(), matched = matched.len(), "list");
    Json(matched).into_response()
}

async fn get_record(State(db): State<Db>, Path((collection, id)): Path<(String, String)>) -> Response {
    match db.find(&collection, &id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_record(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Json(mut payload): Json<Map<String, Value>>,
) -> Response {
    let Some(records) = db.collection(&collection) else {
        return not_found();
    };
    payload.insert("id".to_string(), json!(records.len() + 1));
    (StatusCode::CREATED, Json(Value::Object(payload))).into_response()
}

async fn replace_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    Json(mut payload): Json<Map<String, Value>>,
) -> Response {
    let Some(existing) = db.find(&collection, &id) else {
        return not_found();
    };
    payload.insert("id".to_string(), existing["id"].clone());
    Json(Value::Object(payload)).into_response()
}

async fn update_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    Json(payload): Json<Map<String, Value>>,
) -> Response {
    let Some(existing) = db.find(&collection, &id) else {
        return not_found();
    };
    let mut merged = existing.clone();
    if let Value::Object(fields) = &mut merged {
        for (key, value) in payload {
            if key != "id" {
                fields.insert(key, value);
            }
        }
    }
    Json(merged).into_response()
}

async fn delete_record(State(db): State<Db>, Path((collection, id)): Path<(String, String)>) -> Response {
    match db.find(&collection, &id) {
        Some(_) => Json(json!({})).into_response(),
        None => not_found(),
    }
}

/// `/{collection}/{id}/{child}` lists children whose `<parent>Id` equals `id`,
/// e.g. `/users/1/posts` lists posts with `userId == 1`.
async fn list_children(
    State(db): State<Db>,
    Path((parent, id, child)): Path<(String, String, String)>,
) -> Response {
    if db.collection(&parent).is_none() {
        return not_found();
    }
    let Some(children) = db.collection(&child) else {
        return not_found();
    };
    let key = format!("{}Id", parent.strip_suffix('s').unwrap_or(&parent));
    let matched: Vec<Value> = children
        .iter()
        .filter(|record| field_matches(record, &key, &id))
        .cloned()
        .collect();
    Json(matched).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_finds_records_by_numeric_id() {
        let db = Dataset::seeded();
        assert_eq!(db.find("users", "1").unwrap()["name"], "Leanne Graham");
        assert!(db.find("users", "99999").is_none());
        assert!(db.find("users", "abc").is_none());
        assert!(db.find("albums", "1").is_none());
    }

    #[test]
    fn field_matches_compares_as_text() {
        let record = json!({"userId": 3, "email": "a@b.c", "completed": true});
        assert!(field_matches(&record, "userId", "3"));
        assert!(!field_matches(&record, "userId", "03"));
        assert!(field_matches(&record, "email", "a@b.c"));
        assert!(field_matches(&record, "completed", "true"));
        assert!(!field_matches(&record, "missing", "x"));
    }
}

//! In-process fake of the employee service shared by the integration suites.
#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use employee_desk::api::ApiClient;
use employee_desk::models::EmployeeRecord;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeService {
    pub records: Mutex<Vec<EmployeeRecord>>,
    /// Every request that reached the fake.
    pub requests: AtomicUsize,
    /// `GET /employees` requests only.
    pub list_calls: AtomicUsize,
}

impl FakeService {
    pub fn records(&self) -> Vec<EmployeeRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

pub type Shared = Arc<FakeService>;

pub fn record(id: &str, name: &str) -> EmployeeRecord {
    EmployeeRecord {
        name: name.into(),
        employee_id: id.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "9988776655".into(),
        department: "Marketing".into(),
        date_of_joining: "2021-11-08".into(),
        role: "Strategist".into(),
    }
}

async fn list(State(fake): State<Shared>) -> Json<Vec<EmployeeRecord>> {
    fake.hit();
    fake.list_calls.fetch_add(1, Ordering::SeqCst);
    Json(fake.records())
}

async fn add(State(fake): State<Shared>, Json(new): Json<EmployeeRecord>) -> (StatusCode, String) {
    fake.hit();
    let mut records = fake.records.lock().unwrap();
    if records.iter().any(|r| r.employee_id == new.employee_id) {
        return (StatusCode::CONFLICT, "Employee ID already exists".into());
    }
    records.push(new);
    (StatusCode::CREATED, "Employee added successfully!".into())
}

async fn update(
    State(fake): State<Shared>,
    Path(id): Path<String>,
    Json(updated): Json<EmployeeRecord>,
) -> (StatusCode, Json<serde_json::Value>) {
    fake.hit();
    let mut records = fake.records.lock().unwrap();
    match records.iter_mut().find(|r| r.employee_id == id) {
        Some(slot) => {
            *slot = updated.clone();
            (StatusCode::OK, Json(serde_json::to_value(updated).unwrap()))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "Employee not found" })),
        ),
    }
}

async fn remove(State(fake): State<Shared>, Path(id): Path<String>) -> StatusCode {
    fake.hit();
    let mut records = fake.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r.employee_id != id);
    if records.len() == before {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

pub async fn spawn_fake(seed: Vec<EmployeeRecord>) -> (ApiClient, Shared) {
    let fake: Shared = Arc::new(FakeService {
        records: Mutex::new(seed),
        ..Default::default()
    });
    let app = Router::new()
        .route("/employees", get(list))
        .route("/add-employee", post(add))
        .route("/employees/{id}", put(update).delete(remove))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    (client, fake)
}

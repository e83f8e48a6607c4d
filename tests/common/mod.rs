#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::process::{Command, Output};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use parking_lot::Mutex;
use tempfile::TempDir;

use coverdesk::{
    Amount, Claim, Collection, CoverdeskError, Customer, EntityKind, FormBuffer, InsuranceApi,
    Payment, PaymentMethod, Policy, PolicyType, Result,
};

// ============================================================================
// Binary runner
// ============================================================================

/// Runs the coverdesk binary with its config directory in a temp dir
pub struct CoverdeskTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl CoverdeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        CoverdeskTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_coverdesk").to_string(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("COVERDESK_CONFIG_DIR", self.temp_dir.path())
            .env_remove("COVERDESK_API_BASE")
            .env_remove("COVERDESK_LOG")
            .output()
            .expect("Failed to execute coverdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn config_file(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }
}

// ============================================================================
// Sample records
// ============================================================================

pub fn amount(value: i64) -> Amount {
    Amount::Number(serde_json::Number::from(value))
}

pub fn customer(id: i64, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        dob: "1990-01-01".to_string(),
    }
}

pub fn policy(id: i64, customer_id: i64, policy_type: PolicyType) -> Policy {
    Policy {
        id,
        customer_id,
        policy_type,
        premium: amount(500),
        policy_limit: Some(amount(50000)),
    }
}

pub fn claim(id: i64, policy_id: i64, status: &str) -> Claim {
    Claim {
        id,
        policy_id,
        claim_amount: amount(1200),
        incident_date: "2024-03-01".to_string(),
        status: Some(status.to_string()),
    }
}

pub fn payment(id: i64, customer_id: i64, method: PaymentMethod) -> Payment {
    Payment {
        id,
        customer_id,
        amount: amount(250),
        payment_method: method,
        transaction_id: Some(format!("TXN-{}", id)),
        status: Some("SUCCESS".to_string()),
    }
}

// ============================================================================
// Scripted in-process backend
// ============================================================================

/// A request the fake backend received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(EntityKind),
    Create(EntityKind, serde_json::Value),
    Delete(EntityKind, i64),
}

/// One scripted list response. `None` fails with a 500.
struct ListReply {
    delay: Duration,
    collection: Option<Collection>,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    stored: HashMap<EntityKind, Collection>,
    scripted: HashMap<EntityKind, VecDeque<ListReply>>,
    create_reply: Option<std::result::Result<String, u16>>,
    delete_reply: Option<std::result::Result<String, u16>>,
}

/// In-memory [`InsuranceApi`] with scripted replies and a call log.
///
/// List calls pop a scripted reply when one is queued for the kind, and
/// otherwise return the stored collection (empty by default).
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(self, collection: Collection) -> Self {
        self.state
            .lock()
            .stored
            .insert(collection.kind(), collection);
        self
    }

    /// Queue the reply for the next list call of `collection`'s kind
    pub fn script_list(&self, delay: Duration, collection: Collection) {
        let kind = collection.kind();
        self.state
            .lock()
            .scripted
            .entry(kind)
            .or_default()
            .push_back(ListReply {
                delay,
                collection: Some(collection),
            });
    }

    /// Queue a failing reply for the next list call of `kind`
    pub fn script_list_failure(&self, kind: EntityKind, delay: Duration) {
        self.state
            .lock()
            .scripted
            .entry(kind)
            .or_default()
            .push_back(ListReply {
                delay,
                collection: None,
            });
    }

    pub fn set_create_reply(&self, reply: std::result::Result<&str, u16>) {
        self.state.lock().create_reply = Some(reply.map(str::to_string));
    }

    pub fn set_delete_reply(&self, reply: std::result::Result<&str, u16>) {
        self.state.lock().delete_reply = Some(reply.map(str::to_string));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn list_calls(&self, kind: EntityKind) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| **c == Call::List(kind))
            .count()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| !matches!(c, Call::List(_)))
            .cloned()
            .collect()
    }
}

fn reply(result: Option<std::result::Result<String, u16>>) -> Result<String> {
    match result {
        Some(Ok(text)) => Ok(text),
        Some(Err(status)) => Err(CoverdeskError::Status(status)),
        None => Ok("OK".to_string()),
    }
}

impl InsuranceApi for FakeApi {
    async fn list(&self, kind: EntityKind) -> Result<Collection> {
        let (delay, collection) = {
            let mut state = self.state.lock();
            state.calls.push(Call::List(kind));
            match state.scripted.get_mut(&kind).and_then(VecDeque::pop_front) {
                Some(reply) => (reply.delay, reply.collection),
                None => (
                    Duration::ZERO,
                    Some(
                        state
                            .stored
                            .get(&kind)
                            .cloned()
                            .unwrap_or_else(|| Collection::empty(kind)),
                    ),
                ),
            }
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        collection.ok_or(CoverdeskError::Status(500))
    }

    async fn create(&self, form: &FormBuffer) -> Result<String> {
        let mut state = self.state.lock();
        let body = serde_json::to_value(form)?;
        state.calls.push(Call::Create(form.kind(), body));
        reply(state.create_reply.clone())
    }

    async fn delete(&self, kind: EntityKind, id: i64) -> Result<String> {
        let mut state = self.state.lock();
        state.calls.push(Call::Delete(kind, id));
        reply(state.delete_reply.clone())
    }
}

// ============================================================================
// HTTP backend
// ============================================================================

/// A request the HTTP backend received: method, path, and JSON body if any
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Shared state of the test server
#[derive(Clone, Default)]
pub struct Backend {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
    /// Raw JSON bodies served for `GET /api/{kind}`
    pub collections: Arc<Mutex<HashMap<String, String>>>,
    /// Kinds whose every request answers with a 500
    pub failing: Arc<Mutex<Vec<String>>>,
    /// Kinds whose `GET` answers with a 500 while mutations succeed
    pub failing_lists: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    pub fn serve_json(&self, kind: &str, body: &str) {
        self.collections
            .lock()
            .insert(kind.to_string(), body.to_string());
    }

    pub fn fail(&self, kind: &str) {
        self.failing.lock().push(kind.to_string());
    }

    pub fn fail_lists(&self, kind: &str) {
        self.failing_lists.lock().push(kind.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    fn is_failing(&self, kind: &str) -> bool {
        self.failing.lock().iter().any(|k| k == kind)
    }
}

async fn get_collection(
    State(backend): State<Backend>,
    Path(kind): Path<String>,
) -> (StatusCode, String) {
    backend.requests.lock().push(Recorded {
        method: "GET",
        path: format!("/api/{}", kind),
        body: None,
    });
    if backend.is_failing(&kind) || backend.failing_lists.lock().iter().any(|k| *k == kind) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    let body = backend
        .collections
        .lock()
        .get(&kind)
        .cloned()
        .unwrap_or_else(|| "[]".to_string());
    (StatusCode::OK, body)
}

async fn post_record(
    State(backend): State<Backend>,
    Path(kind): Path<String>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> (StatusCode, String) {
    backend.requests.lock().push(Recorded {
        method: "POST",
        path: format!("/api/{}", kind),
        body: Some(body),
    });
    if backend.is_failing(&kind) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    let text = match kind.as_str() {
        "payment" => "Payment processed successfully".to_string(),
        other => format!("{} created successfully", capitalize(other)),
    };
    (StatusCode::CREATED, text)
}

async fn delete_record(
    State(backend): State<Backend>,
    Path((kind, id)): Path<(String, i64)>,
) -> (StatusCode, String) {
    backend.requests.lock().push(Recorded {
        method: "DELETE",
        path: format!("/api/{}/{}", kind, id),
        body: None,
    });
    if backend.is_failing(&kind) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
    }
    (
        StatusCode::OK,
        format!("{} deleted successfully", capitalize(&kind)),
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Start the backend on an ephemeral port. Returns the API base URL.
pub async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/api/{kind}", get(get_collection).post(post_record))
        .route("/api/{kind}/{id}", delete(delete_record))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    format!("http://{}/api", addr)
}

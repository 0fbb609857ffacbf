use actix_web::dev::ServerHandle;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::remote::remote_config::DEFAULT_API_PREFIX;
use crate::modules::content::adapter::outgoing::remote::RemoteApiConfig;
use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::entities::ContentSnapshot;

pub const FAKE_API_KEY: &str = "test-anon-key";

/// In-process stand-in for the hosted content API, listening on an
/// ephemeral port. Starts with the default content.
pub struct FakeRemote {
    base_url: String,
    state: web::Data<FakeState>,
    _handle: ServerHandle,
}

struct FakeState {
    doc: Mutex<Value>,
    requests: Mutex<Vec<String>>,
    failing: AtomicBool,
}

fn demo_document() -> Value {
    serde_json::to_value(ContentSnapshot::demo()).expect("demo snapshot serializes")
}

impl FakeRemote {
    pub async fn start() -> Self {
        let state = web::Data::new(FakeState {
            doc: Mutex::new(demo_document()),
            requests: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake remote");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            state,
            _handle: handle,
        }
    }

    pub fn config(&self) -> RemoteApiConfig {
        RemoteApiConfig::new(&self.base_url, FAKE_API_KEY)
    }

    /// `"METHOD /resource[/id]"` for every request received, in order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// While failing, every request is answered with a 500.
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    pub fn document(&self) -> Value {
        self.state.doc.lock().unwrap().clone()
    }
}

fn collection_key(resource: &str) -> Option<&'static str> {
    match resource {
        "experience" => Some("experience"),
        "skills" => Some("skills"),
        "education" => Some("education"),
        "blog" | "blog-posts" => Some("blogPosts"),
        "projects" | "portfolio-items" => Some("portfolioItems"),
        _ => None,
    }
}

fn ok(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": data }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(DEFAULT_API_PREFIX)
        .unwrap_or(req.path())
        .trim_start_matches('/')
        .to_string();
    let method = req.method().as_str().to_string();

    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{method} /{path}"));

    if state.failing.load(Ordering::SeqCst) {
        return HttpResponse::InternalServerError().json(json!({ "error": "Internal error" }));
    }

    let expected = format!("Bearer {FAKE_API_KEY}");
    let authorized = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);
    if !authorized {
        return HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized" }));
    }

    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut segments = path.splitn(2, '/');
    let resource = segments.next().unwrap_or_default();
    let id = segments.next();

    let mut doc = state.doc.lock().unwrap();

    match (method.as_str(), resource, id) {
        ("GET", "profile", None) => ok(doc["profile"].clone()),
        ("PUT", "profile", None) => {
            doc["profile"] = payload.clone();
            ok(payload)
        }
        ("GET", "analytics", None) => {
            let snapshot: ContentSnapshot =
                serde_json::from_value(doc.clone()).expect("fake document is valid");
            ok(serde_json::to_value(AnalyticsSummary::from_snapshot(&snapshot)).unwrap())
        }
        ("POST", "seed", None) => {
            *doc = demo_document();
            ok(json!({ "seeded": true }))
        }
        (method, resource, id) => {
            let Some(key) = collection_key(resource) else {
                return not_found();
            };
            let Some(records) = doc[key].as_array_mut() else {
                return not_found();
            };

            match (method, id) {
                ("GET", None) => ok(Value::Array(records.clone())),
                ("POST", None) => {
                    let mut record = payload;
                    record["id"] = json!(Uuid::new_v4().to_string());
                    records.push(record.clone());
                    ok(record)
                }
                ("PUT", Some(id)) => {
                    let Some(existing) = records.iter_mut().find(|r| r["id"] == id) else {
                        return not_found();
                    };
                    if let (Some(target), Some(fields)) =
                        (existing.as_object_mut(), payload.as_object())
                    {
                        for (k, v) in fields {
                            target.insert(k.clone(), v.clone());
                        }
                    }
                    ok(existing.clone())
                }
                ("DELETE", Some(id)) => {
                    let before = records.len();
                    records.retain(|r| r["id"] != id);
                    if records.len() == before {
                        return not_found();
                    }
                    ok(json!({ "id": id }))
                }
                _ => not_found(),
            }
        }
    }
}

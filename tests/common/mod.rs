#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

pub const API_PREFIX: &str = "/api/v2";

/// Canned answer for one request path.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Raw(&'static str),
    Slow(Duration, Value),
}

#[derive(Clone)]
struct FixtureState {
    routes: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Local stand-in for PokeAPI, listening on an ephemeral port.
pub struct FixtureServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Path of `resource` under the API root, e.g. `path("type/fire")`.
pub fn path(resource: &str) -> String {
    format!("{API_PREFIX}/{resource}")
}

async fn reply(State(state): State<FixtureState>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    match state.routes.get(&path) {
        Some(Reply::Json(value)) => Json(value.clone()).into_response(),
        Some(Reply::Status(code)) => StatusCode::from_u16(*code).unwrap().into_response(),
        Some(Reply::Raw(body)) => {
            ([(header::CONTENT_TYPE, "application/json")], *body).into_response()
        }
        Some(Reply::Slow(delay, value)) => {
            tokio::time::sleep(*delay).await;
            Json(value.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts a fixture server. `routes` receives the API base URL so bodies can
/// link to other fixture resources; later entries replace earlier ones.
pub async fn serve<F>(routes: F) -> FixtureServer
where
    F: FnOnce(&str) -> Vec<(String, Reply)>,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}{API_PREFIX}");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FixtureState {
        routes: Arc::new(routes(&base_url).into_iter().collect()),
        requests: requests.clone(),
    };

    let app = Router::new().fallback(reply).with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FixtureServer { base_url, requests }
}

pub fn pichu_record(base: &str) -> Value {
    json!({
        "id": 172,
        "name": "pichu",
        "base_experience": 41,
        "sprites": {
            "front_default": "https://img.example/172.png",
            "front_shiny": "https://img.example/shiny/172.png",
            "front_female": null
        },
        "types": [ { "slot": 1, "type": { "name": "electric", "url": format!("{base}/type/13/") } } ],
        "stats": [
            { "base_stat": 20, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 40, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 15, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 60, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": format!("{base}/ability/9/") }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": format!("{base}/ability/31/") }, "is_hidden": true, "slot": 3 }
        ],
        "species": { "name": "pichu", "url": format!("{base}/pokemon-species/172/") }
    })
}

pub fn linear_chain(names: &[&str]) -> Value {
    let mut node = json!({ "species": { "name": names[names.len() - 1], "url": "" }, "evolves_to": [] });
    for name in names[..names.len() - 1].iter().rev() {
        node = json!({ "species": { "name": name, "url": "" }, "evolves_to": [node] });
    }
    json!({ "id": 10, "chain": node })
}

/// Full set of resources behind the Pichu page.
pub fn pichu_routes(base: &str) -> Vec<(String, Reply)> {
    vec![
        (path("pokemon/pichu"), Reply::Json(pichu_record(base))),
        (
            path("ability/9/"),
            Reply::Json(json!({
                "name": "static",
                "effect_entries": [
                    { "effect": "Berührung kann paralysieren.", "short_effect": "", "language": { "name": "de", "url": "" } },
                    { "effect": "Contact may paralyze the attacker.", "short_effect": "", "language": { "name": "en", "url": "" } }
                ]
            })),
        ),
        (
            path("ability/31/"),
            Reply::Json(json!({
                "name": "lightning-rod",
                "effect_entries": [
                    { "effect": "Draws in all Electric-type moves.", "short_effect": "", "language": { "name": "en", "url": "" } }
                ]
            })),
        ),
        (
            path("pokemon-species/172/"),
            Reply::Json(json!({
                "id": 172,
                "name": "pichu",
                "evolution_chain": { "url": format!("{base}/evolution-chain/10/") }
            })),
        ),
        (
            path("evolution-chain/10/"),
            Reply::Json(linear_chain(&["pichu", "pikachu", "raichu"])),
        ),
        (
            path("type/electric"),
            Reply::Json(json!({
                "id": 13,
                "name": "electric",
                "damage_relations": {
                    "double_damage_to": [ { "name": "water", "url": "" }, { "name": "flying", "url": "" } ],
                    "double_damage_from": [ { "name": "ground", "url": "" } ],
                    "half_damage_to": [ { "name": "grass", "url": "" } ],
                    "half_damage_from": [],
                    "no_damage_to": [ { "name": "ground", "url": "" } ],
                    "no_damage_from": []
                }
            })),
        ),
    ]
}

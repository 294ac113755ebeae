#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};

use ai_stats::types::health::HealthResponse;
use ai_stats::types::models::{ListModelsParams, ModelListResponse};
use ai_stats::{Client, Configuration, Error, ModelsApi, Result};

pub fn build_client(base_url: &str) -> Client {
    Client::with_base_path("test-key", format!("{base_url}/v1")).unwrap()
}

pub fn models_body() -> Value {
    json!({
        "ok": true,
        "limit": 50,
        "offset": 0,
        "total": 2,
        "models": [
            {
                "model_id": "openai/gpt-4o",
                "name": "GPT-4o",
                "release_date": "2024-05-13",
                "organisation_id": "openai",
                "endpoints": ["chat.completions", "responses"],
                "input_types": ["text", "image"],
                "output_types": ["text"],
                "providers": [{"api_provider_id": "openai", "params": ["temperature"]}]
            },
            {
                "model_id": "anthropic/claude-3-5-sonnet",
                "name": "Claude 3.5 Sonnet",
                "organisation_id": "anthropic"
            }
        ]
    })
}

pub fn health_body() -> Value {
    json!({
        "ok": true,
        "ewma_time_constants_ms": {"t10s": 10000, "t60s": 60000, "t300s": 300000},
        "scope": {"provider": null, "model": null, "endpoint": null},
        "overall": {
            "status": "up",
            "providers_up": 2,
            "providers_total": 2,
            "p50_ms": 310.0,
            "p95_ms": 720.0,
            "success_rate": 0.99
        },
        "providers": [
            {"provider": "openai", "status": "up", "breaker": "closed", "success_rate": 1.0},
            {"provider": "anthropic", "status": "up", "breaker": "half_open", "load": 3}
        ],
        "generated_at": 1717000000123u64
    })
}

/// Stand-in transport that records its configuration and call count.
///
/// A base path ending in `/fail` makes every call return an API error.
pub struct RecordingApi {
    pub base_path: String,
    pub authorization: String,
    calls: AtomicUsize,
}

impl RecordingApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModelsApi for RecordingApi {
    fn from_configuration(config: &Configuration) -> Result<Self> {
        Ok(Self {
            base_path: config.base_path.clone(),
            authorization: config.bearer_token(),
            calls: AtomicUsize::new(0),
        })
    }

    async fn list_models(&self, _params: ListModelsParams) -> Result<ModelListResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.base_path.ends_with("/fail") {
            return Err(Error::ApiError {
                status: 503,
                message: "synthetic outage".into(),
            });
        }
        Ok(ModelListResponse {
            ok: Some(true),
            total: Some(0),
            ..Default::default()
        })
    }

    async fn health(&self) -> Result<HealthResponse> {
        Ok(HealthResponse {
            ok: Some(true),
            ..Default::default()
        })
    }
}

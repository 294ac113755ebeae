use crate::client::Configuration;
use crate::error::Result;
use crate::models::ModelsApi;
use ai_stats_types::health::HealthResponse;
use ai_stats_types::models::{ListModelsParams, ModelListResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap();
    let backup: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
    f();
    for (key, value) in backup {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Counts calls and remembers what it was configured with.
pub struct CountingApi {
    pub base_path: String,
    pub authorization: String,
    calls: AtomicUsize,
    health_calls: AtomicUsize,
    last_params: Mutex<Option<ListModelsParams>>,
}

impl CountingApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Option<ListModelsParams> {
        self.last_params.lock().unwrap().clone()
    }
}

impl ModelsApi for CountingApi {
    fn from_configuration(config: &Configuration) -> Result<Self> {
        Ok(Self {
            base_path: config.base_path.clone(),
            authorization: config.bearer_token(),
            calls: AtomicUsize::new(0),
            health_calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
        })
    }

    async fn list_models(&self, params: ListModelsParams) -> Result<ModelListResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = Some(params);
        Ok(ModelListResponse::default())
    }

    async fn health(&self) -> Result<HealthResponse> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        Ok(HealthResponse {
            ok: Some(true),
            ..Default::default()
        })
    }
}

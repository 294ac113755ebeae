use serde::{Deserialize, Serialize};

/// 健康检查的作用范围（未指定的维度为 `None`）。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HealthScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// 汇总状态。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OverallHealth {
    /// `up` / `degraded` / `down`。
    pub status: String,
    #[serde(default)]
    pub providers_up: u32,
    #[serde(default)]
    pub providers_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p50_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
}

/// 单个提供商的健康指标。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProviderHealth {
    pub provider: String,
    /// `up` / `degraded` / `down` / `probing`。
    pub status: String,
    /// 熔断器状态：`closed` / `open` / `half_open`。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p50_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_rps_10s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_rps_60s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_per_sec_60s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaker_until_ms: Option<u64>,
}

/// `GET /health` 响应体。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HealthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<HealthScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallHealth>,
    #[serde(default)]
    pub providers: Vec<ProviderHealth>,
    /// 生成时间（Unix 毫秒）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<u64>,
}

use ai_stats_types::error::ApiErrorBody;
use ai_stats_types::models::ListModelsParams;

use crate::error::{Error, Result};

pub(super) fn build_models_list_url(base_path: &str, params: &ListModelsParams) -> Result<String> {
    let url = format!("{}/models", base_path.trim_end_matches('/'));
    add_list_query_params(&url, params)
}

pub(super) fn build_health_url(base_path: &str) -> Result<String> {
    let url = format!("{}/health", base_path.trim_end_matches('/'));
    let url = reqwest::Url::parse(&url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    Ok(url.to_string())
}

pub(super) fn add_list_query_params(url: &str, params: &ListModelsParams) -> Result<String> {
    let mut url = reqwest::Url::parse(url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    if !params.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &params.query_pairs() {
            query.append_pair(key, value);
        }
    }
    Ok(url.to_string())
}

/// 将非 2xx 响应转换为 `Error::ApiError`。
pub(super) async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::parse(&text).map_or(text, |body| body.describe());
    Error::ApiError { status, message }
}

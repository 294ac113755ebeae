//! Models API surface.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client as HttpClient, Proxy};
use serde::de::DeserializeOwned;

use crate::client::Configuration;
use crate::error::{Error, Result};
use ai_stats_types::health::HealthResponse;
use ai_stats_types::models::{ListModelsParams, ModelListResponse};

mod http;

use self::http::{api_error, build_health_url, build_models_list_url};

/// 网关读取能力：任何能按配置构建、并发起 `GET /models` 与 `GET /health` 的传输层。
///
/// [`Client`](crate::Client) 只依赖这个 trait；生产环境使用 [`HttpModelsApi`]，
/// 测试可以替换成自己的实现。
pub trait ModelsApi: Send + Sync + Sized + 'static {
    /// 根据配置构建传输层，不得发起网络请求。
    ///
    /// # Errors
    /// 当配置无法映射到传输层时返回错误。
    fn from_configuration(config: &Configuration) -> Result<Self>;

    /// 每次调用恰好发起一次请求，结果只解析一次。
    fn list_models(
        &self,
        params: ListModelsParams,
    ) -> impl Future<Output = Result<ModelListResponse>> + Send;

    /// 查询网关健康状态（`GET /health`），同样每次调用一次请求。
    fn health(&self) -> impl Future<Output = Result<HealthResponse>> + Send;
}

/// 基于 reqwest 的 Models API 传输层。
#[derive(Debug, Clone)]
pub struct HttpModelsApi {
    http: HttpClient,
    base_path: String,
}

impl HttpModelsApi {
    fn build_http_client(config: &Configuration) -> Result<HttpClient> {
        let options = &config.http_options;
        let mut http_builder = HttpClient::builder().default_headers(config.default_headers()?);
        if let Some(timeout) = options.timeout {
            http_builder = http_builder.timeout(Duration::from_secs(timeout));
        }

        if let Some(proxy_url) = &options.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| Error::InvalidConfig {
                message: format!("Invalid proxy: {e}"),
            })?;
            http_builder = http_builder.proxy(proxy);
        }

        Ok(http_builder.build()?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(method = "GET", %url, "ai-stats request");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), "ai-stats response");
        if !status.is_success() {
            return Err(api_error(response).await);
        }
        let body = response.text().await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }
}

impl ModelsApi for HttpModelsApi {
    fn from_configuration(config: &Configuration) -> Result<Self> {
        Ok(Self {
            http: Self::build_http_client(config)?,
            base_path: config.base_path.clone(),
        })
    }

    async fn list_models(&self, params: ListModelsParams) -> Result<ModelListResponse> {
        let url = build_models_list_url(&self.base_path, &params)?;
        self.get_json(url).await
    }

    async fn health(&self) -> Result<HealthResponse> {
        let url = build_health_url(&self.base_path)?;
        self.get_json(url).await
    }
}

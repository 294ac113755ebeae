//! Client configuration and facade.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::error::{Error, Result};
use crate::models::{HttpModelsApi, ModelsApi};
use ai_stats_types::health::HealthResponse;
use ai_stats_types::models::{ListModelsParams, ModelListResponse};

/// 生产环境 API 根地址。
pub const DEFAULT_BASE_PATH: &str = "https://api.ai-stats.phaseo.app/v1";

/// 保存 API 密钥的环境变量。
pub const API_KEY_ENV: &str = "AI_STATS_API_KEY";

/// 覆盖基础 URL 的环境变量（可选）。
pub const BASE_URL_ENV: &str = "AI_STATS_BASE_URL";

/// AI Stats 客户端。
///
/// 构建时只组装配置与传输层，不发起任何网络请求。
pub struct Client<A = HttpModelsApi> {
    inner: Arc<ClientInner<A>>,
}

impl<A> Clone for Client<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct ClientInner<A> {
    config: Configuration,
    models_api: A,
}

/// 客户端配置，构建后不可变。
#[derive(Clone)]
pub struct Configuration {
    /// API 根地址（已去掉末尾 `/`）。
    pub base_path: String,
    /// Bearer 凭据。
    pub api_key: String,
    /// HTTP 配置。
    pub http_options: HttpOptions,
}

/// HTTP 配置。
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// 请求超时（秒）；默认不设超时。
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub headers: HashMap<String, String>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("api_key", &"<redacted>")
            .field("http_options", &self.http_options)
            .finish()
    }
}

impl Configuration {
    /// `Authorization` 头的值。
    #[must_use]
    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// 组装默认请求头：自定义头优先，缺省时补上 Bearer 凭据。
    ///
    /// # Errors
    /// 当头名称或值非法时返回错误。
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &self.http_options.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::InvalidConfig {
                    message: format!("Invalid header name: {key}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidConfig {
                message: format!("Invalid header value for {key}"),
            })?;
            headers.insert(name, value);
        }

        if !headers.contains_key(AUTHORIZATION) {
            let mut value =
                HeaderValue::from_str(&self.bearer_token()).map_err(|_| Error::InvalidConfig {
                    message: "Invalid API key value".into(),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else if let Some(value) = headers.get_mut(AUTHORIZATION) {
            value.set_sensitive(true);
        }

        Ok(headers)
    }

    fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_path).map_err(|err| Error::InvalidConfig {
            message: format!("Invalid base path {:?}: {err}", self.base_path),
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidConfig {
                message: format!("Invalid base path {:?}", self.base_path),
            });
        }
        self.default_headers()?;
        Ok(())
    }
}

impl Client {
    /// 使用默认生产地址创建客户端。
    ///
    /// # Errors
    /// 当 API 密钥包含非法字符或构建 HTTP 客户端失败时返回错误。
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// 使用自定义基础地址创建客户端。
    ///
    /// # Errors
    /// 当基础地址无效或构建 HTTP 客户端失败时返回错误。
    pub fn with_base_path(
        api_key: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .api_key(api_key)
            .base_path(base_path)
            .build()
    }

    /// 从环境变量创建客户端。
    ///
    /// # Errors
    /// 当 `AI_STATS_API_KEY` 缺失或构建客户端失败时返回错误。
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_lookup(|key| std::env::var(key).ok())
            .ok_or_else(|| Error::InvalidConfig {
                message: format!("{API_KEY_ENV} not found"),
            })?
            .build()
    }

    /// 创建 Builder。
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<A: ModelsApi> Client<A> {
    /// 用已校验的配置构建传输层与客户端。
    ///
    /// # Errors
    /// 当配置无效或传输层构建失败时返回错误。
    pub fn from_configuration(config: Configuration) -> Result<Self> {
        config.validate()?;
        let models_api = A::from_configuration(&config)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(base_path = %config.base_path, "ai-stats client configured");
        Ok(Self {
            inner: Arc::new(ClientInner { config, models_api }),
        })
    }

    /// 列出模型。
    ///
    /// 直接返回传输层的 future：不重试、不缓存、不检查结果。
    pub fn get_models(&self) -> impl Future<Output = Result<ModelListResponse>> + Send + '_ {
        self.inner.models_api.list_models(ListModelsParams::default())
    }

    /// 列出模型（带过滤参数）。
    pub fn get_models_with_params(
        &self,
        params: ListModelsParams,
    ) -> impl Future<Output = Result<ModelListResponse>> + Send + '_ {
        self.inner.models_api.list_models(params)
    }

    /// 查询网关健康状态，同样原样返回传输层的 future。
    pub fn get_health(&self) -> impl Future<Output = Result<HealthResponse>> + Send + '_ {
        self.inner.models_api.health()
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.inner.config
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.inner.config.base_path
    }

    /// 访问底层传输层。
    #[must_use]
    pub fn models_api(&self) -> &A {
        &self.inner.models_api
    }
}

/// 客户端 Builder。
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_path: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// 设置 API 密钥。
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// 设置自定义基础地址。
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// 设置请求超时（秒）。
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.http_options.timeout = Some(secs);
        self
    }

    /// 设置代理。
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.http_options.proxy = Some(url.into());
        self
    }

    /// 增加默认 HTTP 头。
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_options.headers.insert(key.into(), value.into());
        self
    }

    /// 构建使用 reqwest 传输层的客户端。
    ///
    /// # Errors
    /// 当 API 密钥缺失、参数无效或构建 HTTP 客户端失败时返回错误。
    pub fn build(self) -> Result<Client> {
        self.build_with::<HttpModelsApi>()
    }

    /// 构建使用指定传输层的客户端。
    ///
    /// # Errors
    /// 当 API 密钥缺失、参数无效或传输层构建失败时返回错误。
    pub fn build_with<A: ModelsApi>(self) -> Result<Client<A>> {
        let Self {
            api_key,
            base_path,
            http_options,
        } = self;

        let api_key = api_key.ok_or_else(|| Error::InvalidConfig {
            message: "API key required".into(),
        })?;
        let base_path = base_path
            .as_deref()
            .map_or_else(|| DEFAULT_BASE_PATH.to_string(), normalize_base_path);

        Client::<A>::from_configuration(Configuration {
            base_path,
            api_key,
            http_options,
        })
    }

    /// 通过变量查找函数读取凭据与基础地址；凭据缺失或为空白时返回 `None`。
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty())?;
        let mut builder = Self::default().api_key(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                builder = builder.base_path(base_url);
            }
        }
        Some(builder)
    }
}

fn normalize_base_path(base_path: &str) -> String {
    base_path.trim().trim_end_matches('/').to_string()
}

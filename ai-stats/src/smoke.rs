//! Smoke check used by the `list_models` demo.
//!
//! Reads the credential from the environment, lists models once and reports
//! the outcome. Transport failures are returned as-is.

use std::io::Write;
use std::process::ExitCode;

use crate::client::ClientBuilder;
use crate::error::Result;
use crate::models::{HttpModelsApi, ModelsApi};

pub use crate::client::{API_KEY_ENV, BASE_URL_ENV};

/// 成功时输出的固定信息。
pub const SUCCESS_MESSAGE: &str = "ai-stats smoke ok";

/// 冒烟检查结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// 凭据缺失或为空，未发起任何请求。
    MissingCredential,
}

impl Outcome {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::MissingCredential => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}

/// 使用真实环境变量、stdout 与 stderr 运行冒烟检查。
///
/// # Errors
/// 请求失败或输出写入失败时返回错误。
pub async fn run() -> Result<Outcome> {
    run_with::<HttpModelsApi, _>(
        |key| std::env::var(key).ok(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}

/// 使用指定的变量查找函数与传输层运行冒烟检查。
///
/// # Errors
/// 构建客户端失败、请求失败或输出写入失败时返回错误。
pub async fn run_with<A, E>(
    env: E,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome>
where
    A: ModelsApi,
    E: Fn(&str) -> Option<String>,
{
    let Some(builder) = ClientBuilder::from_lookup(env) else {
        writeln!(err, "Set {API_KEY_ENV}")?;
        return Ok(Outcome::MissingCredential);
    };

    let client = builder.build_with::<A>()?;
    client.get_models().await?;
    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(Outcome::Success)
}

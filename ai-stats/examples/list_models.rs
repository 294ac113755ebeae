use std::process::ExitCode;

#[tokio::main]
async fn main() -> ai_stats::Result<ExitCode> {
    let outcome = ai_stats::smoke::run().await?;
    Ok(outcome.into())
}

use ai_stats::types::models::ListModelsParams;
use ai_stats::Client;

#[tokio::main]
async fn main() -> ai_stats::Result<()> {
    let client = Client::from_env()?;
    let params = ListModelsParams {
        endpoints: vec!["chat.completions".into()],
        limit: Some(10),
        ..Default::default()
    };

    match client.get_models_with_params(params).await {
        Ok(response) => {
            for model in &response.models {
                println!("{} ({})", model.model_id, model.name.as_deref().unwrap_or("-"));
            }
            println!("total: {:?}", response.total);
        }
        Err(err) => eprintln!("request failed: {err}"),
    }

    Ok(())
}

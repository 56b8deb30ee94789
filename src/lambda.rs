use dice_roller::utils::{logger, validation::Validate};
use dice_roller::{SlackConfig, SlackReply, SlashCommandHandler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;

/// API Gateway mapping template output: `{ "body": $input.json("$") }`.
#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub body: String,
}

async fn function_handler(
    handler: &SlashCommandHandler<SlackConfig>,
    event: LambdaEvent<Request>,
) -> Result<SlackReply, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling slash command event");

    let reply = handler
        .handle(&event.payload.body)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(reply)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = SlackConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let handler = SlashCommandHandler::new(config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(handler, event).await
    }))
    .await
}

use contact_mailer::adapters::lambda::handle_request;
use contact_mailer::utils::{logger, validation::Validate};
use contact_mailer::{ContactHandler, LambdaConfig, ResendClient};
use lambda_http::{run, service_fn, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 創建Lambda配置
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let handler = ContactHandler::new(ResendClient::from_config(&config), config);
    let handler = &handler;

    tracing::info!("Contact Lambda function ready");
    run(service_fn(move |event: Request| handle_request(handler, event))).await
}

use std::io;

use gatewire::{Dispatch, GateWireClient, MessageText, RawPhoneNumber, TemplateKey};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("GATEWIRE_API_KEY")?;
    let phone = RawPhoneNumber::new(required_env("GATEWIRE_PHONE")?)?;

    let mut builder = GateWireClient::builder().api_key(api_key);
    if let Ok(base_url) = std::env::var("GATEWIRE_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let mut request = Dispatch::new(phone);
    match std::env::var("GATEWIRE_TEMPLATE") {
        Ok(template) => request = request.template(TemplateKey::new(template)?),
        Err(_) => {
            let message = std::env::var("GATEWIRE_MESSAGE")
                .unwrap_or_else(|_| "Hello from the gatewire demo.".to_owned());
            request = request.message(MessageText::new(message)?);
        }
    }
    if std::env::var("GATEWIRE_PRIORITY").is_ok_and(|value| value == "high") {
        request = request.priority(true);
    }

    let response = client.dispatch(request).await?;
    println!("{response}");

    Ok(())
}

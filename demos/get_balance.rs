use std::io;

use gatewire::GateWireClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("GATEWIRE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GATEWIRE_API_KEY environment variable is required",
        )
    })?;

    let mut builder = GateWireClient::builder().api_key(api_key);
    if let Ok(base_url) = std::env::var("GATEWIRE_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let response = client.get_balance().await?;
    match (&response.balance, &response.currency) {
        (Some(amount), Some(currency)) => println!("balance: {amount} {currency}"),
        _ => println!("balance: {}", response.raw),
    }

    Ok(())
}

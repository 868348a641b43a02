//! Fetch and print the menu from a running backend
//!
//! Usage: cargo run --example fetch_menu -- http://localhost:8080

use tiffin_client::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tiffin_client=debug".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = ClientConfig::new(base_url).build_http_client();
    let menu = client.fetch_menu().await?;

    for item in &menu {
        match &item.pricing {
            shared::models::Pricing::Single { price: Some(price) } => {
                println!("{} [{}] {}", item.name, item.category, price);
            }
            shared::models::Pricing::Single { price: None } => {
                println!("{} [{}] (no price)", item.name, item.category);
            }
            shared::models::Pricing::Variant { rates } => {
                let portions: Vec<String> = rates
                    .iter()
                    .map(|(key, price)| format!("{key}: {price}"))
                    .collect();
                println!("{} [{}] ({})", item.name, item.category, portions.join(", "));
            }
        }
    }

    Ok(())
}

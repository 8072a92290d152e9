//! Walk through the password reset flow against a running reset service.
//!
//! ```text
//! cargo run -p reset-client --example reset_flow -- player@example.com [code]
//! ```

use anyhow::{Context, Result};
use reset_client::ResetClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reset_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let email = args.next().context("usage: reset_flow <email> [code]")?;
    let code = args.next();

    let client = ResetClient::from_env().context("Failed to load reset client configuration")?;
    tracing::info!(base_url = client.base_url(), "Using reset service");

    let health = client.check_health().await;
    if !health.success {
        tracing::error!(message = %health.message, "Reset service is not healthy");
        return Ok(());
    }
    tracing::info!(message = %health.message, "Reset service is healthy");

    let sent = client.send_verification_code(&email).await;
    if sent.success {
        tracing::info!(message = %sent.message, "Verification email sent successfully");
    } else {
        tracing::error!(message = %sent.message, "Failed to send email");
        return Ok(());
    }

    if let Some(code) = code {
        let verified = client.verify_reset_code(&email, &code).await;
        if verified.success {
            tracing::info!(message = %verified.message, "Code verified successfully");
        } else {
            tracing::error!(message = %verified.message, "Code verification failed");
        }
    }

    Ok(())
}

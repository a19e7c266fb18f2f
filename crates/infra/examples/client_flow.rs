//! Example: authorize an application and list the account's contacts
//!
//! Reads `CTCT_*` settings from the environment (a `.env` file is honoured),
//! prints the owner-facing authorization URL, then asks for the access token
//! delivered to the redirect URI.
//!
//! ```bash
//! CTCT_API_KEY=... CTCT_CLIENT_ID=... CTCT_CLIENT_SECRET=... \
//!   CTCT_REDIRECT_URI=https://example.com/cb \
//!   cargo run -p ctct-infra --example client_flow
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use ctct_core::CompletionExt;
use ctct_domain::QueryParams;
use ctct_infra::{build_client, build_oauth, config};
use tracing_subscriber::EnvFilter;

fn ask(question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::load().context("loading CTCT_* configuration")?;
    let oauth = build_oauth(&config)?;

    let access_token = ask(&format!("Visit {} and enter token: ", oauth.authorization_url(false, None)))?;
    let cc = build_client(&config)?;

    let contacts = cc
        .get_contacts(&access_token, &QueryParams::new().limit(50))
        .with_callback(|result| {
            if let Err(e) = result {
                tracing::warn!(error = %e, kind = e.label(), "contact listing failed");
            }
        })
        .await?;

    println!("Results ({} contacts, more: {})", contacts.len(), contacts.has_next());
    for contact in &contacts {
        println!("  {contact}");
    }

    Ok(())
}

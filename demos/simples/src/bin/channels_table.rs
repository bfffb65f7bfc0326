use mattermost_client::prelude::*;
use prettytable::{Table, row};
use tracing::info;

/// Logs in with the `MATTERMOST_*` environment variables, prints every
/// channel as a table and makes sure the first one has an incoming webhook.
///
/// Run with: cargo run --bin channels_table
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Creating client and authenticating...");
    let client = Client::new(Config::new()).await?;
    info!("✓ Logged in as {}", client.login_user_name());

    let channels = client.get_channels(true).await?;

    let mut table = Table::new();
    table.add_row(row!["ID", "TYPE", "NAME", "DISPLAY NAME"]);
    for channel in &channels {
        table.add_row(row![
            channel.id,
            channel.channel_type,
            channel.name,
            channel.display_name
        ]);
    }
    table.printstd();

    if let Some(first) = channels.iter().find(|c| !c.is_direct()) {
        let hook = client
            .channel_bind_webhook(&first.id, &first.display_name)
            .await?;
        info!("Channel {} posts through webhook {}", first.display_name, hook);
    }

    match client.get_a_webhook().await? {
        Some(id) => info!("Any live webhook: {}", id),
        None => info!("No live webhook on the first page"),
    }

    Ok(())
}

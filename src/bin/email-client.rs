use email_manager::client::view::TITLE;
use email_manager::client::{EmailManager, HttpEmailApi, SubmitOutcome};
use email_manager::config::ClientConfig;
use email_manager::logging::init_tracing;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

fn prompt() -> std::io::Result<()> {
    print!("Enter email... ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(api = %config.api_base_url, "starting client");

    let mut manager = EmailManager::new(Box::new(HttpEmailApi::new(&config.api_base_url)));

    println!("{}\n", TITLE);
    manager.start_loading();
    print!("{}", manager.view());
    manager.load().await;
    print!("{}", manager.view());
    prompt()?;

    // each line is one form submission
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        manager.set_input(line);
        if manager.submit().await != SubmitOutcome::Skipped {
            print!("{}", manager.view());
        }
        prompt()?;
    }

    println!();
    Ok(())
}

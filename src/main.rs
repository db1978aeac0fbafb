use azal_reviews::{info_time, process::run, Result};
use chrono::Local;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    run().await?;
    info_time!(start_time, "Full scrape time:");

    Ok(())
}

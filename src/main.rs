use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    racedeck::cli::run().await
}

use anyhow::Result;
use clap::Parser;
use msu::{Args, SelectionPolicy};

#[tokio::main]
async fn main() -> Result<()> {
    msu::init_logging();
    let args = Args::parse();
    msu::run(&args, SelectionPolicy::Latest).await
}

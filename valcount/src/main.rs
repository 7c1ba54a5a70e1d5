use anyhow::Result;
use clap::Parser;
use valcount::run::{run, Opts};

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();
    run(&opts).await
}

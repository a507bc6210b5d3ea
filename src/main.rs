// Entry point: render the portfolio page and write it to disk.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod projects;
mod render;

use std::path::PathBuf;

use app::App;
use error::Result;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("index.html"));

    let mut app = App::new(config::Profile::default());
    let html = app.build_page().await;
    std::fs::write(&output, html)?;
    log::info!("wrote {}", output.display());

    Ok(())
}

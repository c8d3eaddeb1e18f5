use clap::Parser;
use std::path::PathBuf;

use super::{build_page, load_config};
use crate::render::document;

#[derive(Parser)]
pub struct PageArgs {
    /// Submit this text before rendering; without it the page is rendered fresh
    pub text: Option<String>,
    #[arg(short, long)]
    pub endpoint: Option<String>,
    /// Write the page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn handle_page(args: PageArgs) -> anyhow::Result<()> {
    let config = load_config(args.endpoint.as_deref())?;
    let page = build_page(&config)?;

    if let Some(text) = args.text {
        page.set_input(text);
        page.submit().await;
    }

    let html = document(&page.snapshot())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            log::info!("Wrote page to {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

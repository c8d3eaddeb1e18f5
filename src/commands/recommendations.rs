//! `moodsync recommend`: one request, results printed to stdout.

use clap::{Parser, ValueEnum};

use super::{build_page, load_config, read_input};
use crate::errors::AppError;
use crate::render::{HtmlRenderer, ResultsRenderer, ResultsView, TextRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser)]
pub struct RecommendArgs {
    /// Mood or situation to recommend for; read from stdin when omitted
    pub text: Option<String>,
    #[arg(short, long)]
    pub endpoint: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn format_results(view: &ResultsView, format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => TextRenderer.render(view)?,
        OutputFormat::Html => HtmlRenderer.render(view)?,
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
    })
}

pub async fn handle_recommend(args: RecommendArgs) -> anyhow::Result<()> {
    let config = load_config(args.endpoint.as_deref())?;
    let page = build_page(&config)?;
    page.set_input(read_input(args.text)?);

    page.submit().await;

    let view = page.results();
    println!("{}", format_results(&view, args.format)?);

    if view.is_error() {
        anyhow::bail!("Recommendation failed");
    }
    if view == ResultsView::Prompt {
        return Err(AppError::Input("no mood or situation given".into()).into());
    }
    Ok(())
}

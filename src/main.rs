use clap::{Parser, Subcommand};

use moodsync_lib::commands;

#[derive(Parser)]
#[command(version, name = "MoodSync", bin_name = "moodsync")]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Recommend songs for a mood or situation")]
    Recommend(commands::RecommendArgs),
    #[command(about = "Render the recommendation page as HTML")]
    Page(commands::PageArgs),
    #[command(about = "Print out the config")]
    Config(commands::ConfigArgs),
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = match args.cmd {
        Commands::Recommend(args) => commands::handle_recommend(args).await,
        Commands::Page(args) => commands::handle_page(args).await,
        Commands::Config(args) => commands::handle_config(args).await,
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

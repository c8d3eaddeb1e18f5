use clap::Parser;

use crate::config::{get_config_file_path, AppConfig};

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the default config file if there is none yet
    #[arg(long)]
    pub init: bool,
}

pub async fn handle_config(args: ConfigArgs) -> anyhow::Result<()> {
    let path = get_config_file_path();

    if args.init {
        if path.exists() {
            log::warn!("Config file already exists at {}", path.display());
        } else {
            AppConfig::default().save_to(&path)?;
            log::info!("Created config file at {}", path.display());
        }
    } else if !path.exists() {
        log::warn!(
            "Config file does not exist. Run `moodsync config --init` to create {}",
            path.display()
        );
    }

    let config = AppConfig::load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

//! Print the number of images in each top-level folder of the asset root
use std::process::ExitCode;

use kart_randomizer::assets::counter::count_images;
use kart_randomizer::config::Config;
use kart_randomizer::logging;

fn main() -> ExitCode {
    logging::init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match count_images(&config.asset_root) {
        Ok(counts) => {
            println!("{}", counts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Cannot count images: {}", e);
            ExitCode::FAILURE
        }
    }
}

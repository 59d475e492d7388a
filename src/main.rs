//! Image Button demo
//!
//! Usage:
//!   image-button                         # HelloWorld1.jpg from the working directory
//!   image-button --image photo.png       # another image
//!   image-button --print-config          # dump the effective config and exit

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use image_button::config::AppConfig;

#[derive(Parser)]
#[command(name = "image-button")]
#[command(about = "Window with an image-backed button and a hover tooltip")]
struct Cli {
    /// Image shown on the button
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Button image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Button image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the file config.
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(image) = self.image {
            config.image_path = image;
        }
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(height) = self.height {
            config.image_height = height;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load(),
    };
    let print_config = cli.print_config;
    let config = cli.apply(base);

    if print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    image_button::run_iced_ui(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file_config() -> AppConfig {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "image_path": "from-file.jpg", "image_width": 300, "image_height": 200, "window_title": "From file" }"#,
        )
        .unwrap();
        AppConfig::from_file(&path).unwrap()
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let cli = Cli::try_parse_from(["image-button", "--image", "x.png", "--width", "64"]).unwrap();
        let config = cli.apply(file_config());

        assert_eq!(config.image_path, PathBuf::from("x.png"));
        assert_eq!(config.image_width, 64);
        // Not given on the command line: file values survive.
        assert_eq!(config.image_height, 200);
        assert_eq!(config.window_title, "From file");
    }

    #[test]
    fn test_no_flags_keeps_file_config() {
        let cli = Cli::try_parse_from(["image-button"]).unwrap();
        assert!(!cli.print_config);
        assert!(cli.config.is_none());
        assert_eq!(cli.apply(file_config()), file_config());
    }

    #[test]
    fn test_config_and_print_flags_parse() {
        let cli = Cli::try_parse_from([
            "image-button",
            "--config",
            "/tmp/custom.json",
            "--print-config",
            "--height",
            "80",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/custom.json")));
        assert!(cli.print_config);
        assert_eq!(cli.apply(AppConfig::default()).image_height, 80);
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        assert!(Cli::try_parse_from(["image-button", "--width", "wide"]).is_err());
    }
}

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use casino_lobby::{LauncherBuilder, MAX_FPS, MIN_FPS};

#[derive(Parser)]
#[command(name = "casino-lobby")]
#[command(about = "Casino mini-game launcher", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing the lobby images
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Target frames per second (1 to 1000)
    #[arg(long, default_value = "60")]
    fps: f64,

    /// Loading overlay duration between screens, in milliseconds
    #[arg(long, default_value = "850")]
    loading_ms: u64,

    /// Suppress log output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Rejects settings the launcher builder would panic on.
    fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("viewport must be non-empty, got {}x{}", self.width, self.height));
        }
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(format!("fps must be within {}..={}, got {}", MIN_FPS, MAX_FPS, self.fps));
        }
        Ok(())
    }
}

/// `--quiet` keeps errors visible.
fn default_log_filter(quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        "info"
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG overrides the level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_log_filter(cli.quiet)))
        .init();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    let result = LauncherBuilder::new()
        .with_viewport(cli.width, cli.height)
        .with_fps(cli.fps)
        .with_loading_duration(Duration::from_millis(cli.loading_ms))
        .with_asset_root(cli.assets)
        .build()
        .run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

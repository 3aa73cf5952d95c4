// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "office-walkthrough")]
#[command(about = "Explorable office room with orbit and WASD navigation", long_about = None)]
pub struct Cli {
    /// JSON layout file overriding room, camera and tuning defaults
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Run without a window, ticking a fixed number of frames
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Keys held for the whole headless run, e.g. "w,d,space"
    #[arg(long, default_value = "")]
    pub hold: String,

    /// Suppress periodic camera logging
    #[arg(long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_a_window() {
        let cli = Cli::parse_from(["office-walkthrough"]);
        assert!(!cli.headless);
        assert_eq!(cli.frames, 120);
        assert!(cli.layout.is_none());
        assert!(cli.hold.is_empty());
    }

    #[test]
    fn headless_options() {
        let cli = Cli::parse_from([
            "office-walkthrough",
            "--headless",
            "--frames",
            "30",
            "--hold",
            "w,space",
            "--layout",
            "room.json",
        ]);
        assert!(cli.headless);
        assert_eq!(cli.frames, 30);
        assert_eq!(cli.hold, "w,space");
        assert_eq!(cli.layout.as_deref(), Some(std::path::Path::new("room.json")));
    }
}

use clap::Parser;
use devradar::application::dto::OutputFormat;
use devradar::config::RadarSettings;
use devradar::radar::policies::StalePolicy;
use std::path::PathBuf;

/// Find developers near you by technology, with live updates
#[derive(Parser, Debug)]
#[command(name = "devradar")]
#[command(version)]
#[command(
    about = "Find developers near you by technology, with live updates",
    long_about = "Shows developers registered near a position on a text map.\n\n\
                  Interactive commands (one per line on stdin):\n  \
                  techs <text>                 set the comma-separated technology filter\n  \
                  pan <lat> <lon> [dlat dlon]  move the map\n  \
                  search                       search around the map center\n  \
                  open <n>                     open the profile of pin n\n  \
                  show                         redraw the map\n  \
                  quit                         leave"
)]
pub struct Args {
    /// Radar server base URL [default: http://localhost:3333]
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Device latitude; without a position the location permission is denied
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Device longitude
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Comma-separated technologies to search for, e.g. "ReactJS, Node.js"
    #[arg(short, long, value_name = "TEXT")]
    pub techs: Option<String>,

    /// Do not open a live-update channel after searches
    #[arg(long)]
    pub no_follow: bool,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Late search responses: discard (keep latest request) or apply (last arrival wins)
    #[arg(long, value_name = "POLICY")]
    pub stale: Option<StalePolicy>,

    /// Map width in characters
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Map height in characters
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write each redraw to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to devradar.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search once, print the map and exit
    #[arg(long)]
    pub once: bool,
}

impl Args {
    /// Overlays flags given on the command line; they win over the config file
    pub fn apply_to(&self, settings: &mut RadarSettings) {
        if let Some(server) = &self.server {
            settings.server = server.clone();
        }
        if self.lat.is_some() || self.lon.is_some() {
            settings.latitude = self.lat;
            settings.longitude = self.lon;
        }
        if let Some(techs) = &self.techs {
            settings.techs = techs.clone();
        }
        if self.no_follow {
            settings.follow = false;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(stale) = self.stale {
            settings.stale = stale;
        }
        if let Some(width) = self.width {
            settings.map_width = width;
        }
        if let Some(height) = self.height {
            settings.map_height = height;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
    }
}

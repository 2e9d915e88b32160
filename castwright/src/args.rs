use std::path::PathBuf;

use clap::Parser;

/// Config file read when `--config` is not given; it may be absent
pub const DEFAULT_CONFIG_PATH: &str = "castwright.toml";

/// Castwright podcast drafting server
#[derive(Debug, Parser)]
#[command(name = "castwright", about = "Podcast drafting API: outlines, scripts, research, and voice")]
pub struct Args {
    /// Path to configuration file (must exist when given)
    #[arg(short, long, env = "CASTWRIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "CASTWRIGHT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from(["castwright", "--config", "prod.toml", "--listen", "127.0.0.1:8080"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("prod.toml")));
        assert_eq!(args.listen.map(|addr| addr.port()), Some(8080));
    }

    #[test]
    fn rejects_bad_listen_address() {
        assert!(Args::try_parse_from(["castwright", "--listen", "localhost"]).is_err());
    }
}

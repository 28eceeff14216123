use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "totp-enroll")]
#[command(about = "Enroll an authenticator app (TOTP) with your identity provider")]
pub struct Cli {
    /// Configuration file (defaults to the platform config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Identity provider base URL, overrides the config file
    #[arg(long, env = "TOTP_ENROLL_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token for the identity provider, overrides the config file
    #[arg(long, env = "TOTP_ENROLL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Do not open the wizard on start; wait for the `open` command
    #[arg(long)]
    pub no_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "totp-enroll",
            "--config",
            "/tmp/enroll.toml",
            "--base-url",
            "https://idp.example.com",
            "--no-open",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/enroll.toml")));
        assert_eq!(cli.base_url.as_deref(), Some("https://idp.example.com"));
        assert!(cli.no_open);
    }
}

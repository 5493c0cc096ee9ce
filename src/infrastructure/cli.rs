use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 16.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Location to open at startup, e.g. /reader/1",
        default_value = "/"
    )]
    pub path: String,

    #[arg(long, help = "Forget that onboarding was completed")]
    pub reset_onboarding: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["eduletter"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 16.0);
        assert_eq!(cli.path, "/");
        assert!(!cli.reset_onboarding);
        Ok(())
    }

    #[test]
    fn test_deep_link_and_reset() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["eduletter", "--path", "/audio/2", "--reset-onboarding"])?;
        assert_eq!(cli.path, "/audio/2");
        assert!(cli.reset_onboarding);
        Ok(())
    }
}

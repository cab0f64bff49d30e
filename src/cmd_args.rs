use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the post store location from. Default is 'default'.
    /// A missing profile falls back to the local development store.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Base URL override
    /// Optional. Takes precedence over the profile's base_url.
    #[clap(short = 'u', long, help = "post store base URL")]
    base_url: Option<String>,

    /// Verbose mode
    /// Optional. Log at debug level.
    #[clap(
        short = 'v',
        long,
        help = "Write debug-level log entries",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test"]);
        assert_eq!(args.profile(), "test");
        assert!(args.base_url().is_none());
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_base_url() {
        let args = CommandLineArgs::parse_from(["program", "--base-url", "http://blog:3000"]);
        assert_eq!(args.base_url(), Some("http://blog:3000"));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-u", "http://x", "-v"]);
        assert_eq!(args.profile(), "dev");
        assert_eq!(args.base_url(), Some("http://x"));
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert!(args.base_url().is_none());
        assert!(!args.verbose());
    }
}

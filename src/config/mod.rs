use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fuel-di")]
#[command(about = "Constructor injection demo: two cars, two fuel providers")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,

    /// Anything else on the command line; the demo runs regardless.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

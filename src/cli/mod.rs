use clap::Parser;

/// Usage line printed when no services are given
pub const USAGE: &str = "Usage: update <service1> <service2> ...";

#[derive(Parser)]
#[command(name = "update")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Services to build and push, each under services/<NAME>
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,

    /// Container engine binary (e.g., docker, podman)
    #[arg(long, env = "UPDATE_ENGINE")]
    pub engine: Option<String>,

    /// Skip pushing images to the registry after building
    #[arg(long)]
    pub no_push: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;
use update::{
    cli::{Cli, USAGE},
    config::Config,
    engine::ContainerCli,
    error::UpdateError,
    service::UpdateService,
};

fn main() -> Result<()> {
    // Every failure exits with status 1, argument errors included
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.services.is_empty() {
        println!("{}", USAGE);
        std::process::exit(1);
    }

    let config = Config::load()?.with_engine_override(cli.engine);
    let engine = ContainerCli::new(config.engine).with_build_args(config.build.args);

    let result = match UpdateService::new(engine)
        .with_no_push(cli.no_push)
        .run(&cli.services)
    {
        Ok(result) => result,
        Err(err) => match err.downcast_ref::<UpdateError>() {
            Some(missing) => {
                println!("error: {}", missing);
                std::process::exit(1);
            }
            None => return Err(err),
        },
    };

    if cli.no_push {
        info!("Successfully built {} image(s)", result.built.len());
    } else {
        info!("Successfully built and pushed {} image(s)", result.pushed.len());
    }

    Ok(())
}

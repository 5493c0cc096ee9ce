use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use eduletter::{
    infrastructure::{
        cli::Cli,
        config::Config,
        storage::{reset_onboarding, FileVisitStore},
        tui::{event_source::EventSource, real::RealTui, TuiLike},
    },
    integration::app_runner::{AppRunner, RunnerOptions},
    utils::{initialize_logging, initialize_panic_handler, paths::get_state_file},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let visit_store = Arc::new(FileVisitStore::new(get_state_file()));
    if args.reset_onboarding {
        reset_onboarding(visit_store.as_ref());
    }

    let mut runner = {
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        let options = RunnerOptions::new(visit_store).initial_path(args.path);
        AppRunner::new_with_config(config, options, Arc::clone(&tui), EventSource::real(tui))?
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}

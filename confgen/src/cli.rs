use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use eyre::Result;

use crate::{
    logging::setup_logging,
    ops::{self, GenerateOptions},
};

const LONG_ABOUT: &str = "\
Reads CONFIG and regenerates TARGET in place:

  // config vars          above a `var ( ... )` group rewrites it to one
                          variable per config key
  // <name> config func   above a function rewrites its body to load the
                          config with viper and assign every variable

Everything else in TARGET is left untouched. No backup is made.";

#[derive(Parser)]
#[command(name = "confgen")]
#[command(version)]
#[command(about = "Generate Go config variables and loader functions from a config file")]
#[command(long_about = LONG_ABOUT)]
#[command(override_usage = "confgen [OPTIONS] <CONFIG> <TARGET>")]
pub(crate) struct Cli {
    /// Config file to read, followed by the Go file to regenerate
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Config path the generated function loads at runtime (defaults to CONFIG)
    #[arg(short = 't', long, value_name = "PATH")]
    target_config: Option<PathBuf>,

    /// Print the regenerated source instead of overwriting TARGET
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let [config, target] = self.paths.as_slice() else {
            Self::print_usage();
            return Ok(());
        };

        let report = ops::generate(GenerateOptions {
            config,
            target,
            target_config: self.target_config.as_deref(),
            dry_run: self.dry_run,
        })?;

        if self.dry_run {
            print!("{}", report.output);
        }
        report.log();

        Ok(())
    }

    fn print_usage() {
        eprintln!("{}", Self::command().render_long_help());
    }
}

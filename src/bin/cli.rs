use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use profile_server::{
    cli::profile::{show_profile, validate_profile_file},
    repository::profile::FileProfileStorage,
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stored profile related command
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommands,
}

#[derive(Debug, Subcommand)]
enum ProfileCommands {
    /// Print the stored profile
    Show,
    /// Check a json file against the profile schema
    Validate { file: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Profile(profile_args) => match &profile_args.command {
            ProfileCommands::Show => {
                let config = get_config()?;
                let storage = FileProfileStorage::new(&config.profile_path);
                match show_profile(&storage)? {
                    Some(profile) => println!("{profile}"),
                    None => println!("no profile saved in {}", config.profile_path),
                }
                Ok(ExitCode::SUCCESS)
            }
            ProfileCommands::Validate { file } => {
                println!("validate profile: {file:?}");
                let violations = validate_profile_file(file)?;
                if violations.is_empty() {
                    println!("ok");
                    return Ok(ExitCode::SUCCESS);
                }
                for violation in violations {
                    println!("{}: {}", violation.kind, violation.message);
                }
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

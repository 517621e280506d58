//! Command-line interface implementation for scaffolder.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Command-line arguments structure for scaffolder.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "scaffolder: generate project skeletons from declarative descriptions",
    long_about = None
)]
pub struct Args {
    /// Configuration document, or a directory of documents (*.toml, *.json, *.yaml, *.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

//! Command-line argument parsing for the `desk` binary.

use std::path::PathBuf;

/// Usage text printed for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: desk [--config PATH] <command> [options]

Commands:
  topics    [--brand N]                          List support-center topics
  articles  [--topic N] [--brand N] [--pages N]  List articles, following pages
  search    <text> [--topic N] [--brand N] [--pages N]
                                                 Search articles
  contact   --email E --feedback F [--subject S] [--name N] [--brand N]
                                                 Open a support case

Options:
  --config PATH   Properties file (default: $DESK_CONFIG or the user config dir)
  -V, --version   Print version
  -h, --help      Print this help

Logging goes to stderr; set RUST_LOG (default: desk_sdk=info).";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    Topics {
        brand_id: u64,
    },
    Articles {
        topic_id: u64,
        brand_id: u64,
        pages: u32,
    },
    Search {
        query: String,
        topic_id: u64,
        brand_id: u64,
        pages: u32,
    },
    Contact {
        email: String,
        feedback: String,
        subject: Option<String>,
        name: Option<String>,
        brand_id: u64,
    },
}

/// Command plus global options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("option '{flag}' expects a number, got '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("'{command}' requires {what}")]
    Required {
        command: &'static str,
        what: &'static str,
    },
}

/// Options collected before the command is assembled.
#[derive(Default)]
struct Options {
    topic_id: u64,
    brand_id: u64,
    pages: u32,
    email: Option<String>,
    feedback: Option<String>,
    subject: Option<String>,
    name: Option<String>,
    positional: Vec<String>,
}

/// Parse command-line arguments (including the program name).
///
/// ```
/// use desk_sdk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["desk".to_string(), "topics".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Topics { brand_id: 0 });
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    let mut config_path = None;
    let mut command_name: Option<String> = None;
    let mut opts = Options {
        pages: 1,
        ..Default::default()
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    config_path,
                    command: CliCommand::Version,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    config_path,
                    command: CliCommand::Help,
                })
            }
            "--config" => config_path = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--brand" => opts.brand_id = number(&mut args, &arg)?,
            "--topic" => opts.topic_id = number(&mut args, &arg)?,
            "--pages" => opts.pages = number(&mut args, &arg)?,
            "--email" => opts.email = Some(value(&mut args, &arg)?),
            "--feedback" => opts.feedback = Some(value(&mut args, &arg)?),
            "--subject" => opts.subject = Some(value(&mut args, &arg)?),
            "--name" => opts.name = Some(value(&mut args, &arg)?),
            flag if flag.starts_with('-') => return Err(ArgsError::UnexpectedArgument(arg)),
            _ if command_name.is_none() => command_name = Some(arg),
            _ => opts.positional.push(arg),
        }
    }

    let command = match command_name.as_deref() {
        None => return Err(ArgsError::MissingCommand),
        Some("topics") => {
            no_positionals(&opts)?;
            CliCommand::Topics {
                brand_id: opts.brand_id,
            }
        }
        Some("articles") => {
            no_positionals(&opts)?;
            CliCommand::Articles {
                topic_id: opts.topic_id,
                brand_id: opts.brand_id,
                pages: opts.pages.max(1),
            }
        }
        Some("search") => {
            let query = opts.positional.join(" ");
            if query.trim().is_empty() {
                return Err(ArgsError::Required {
                    command: "search",
                    what: "search text",
                });
            }
            CliCommand::Search {
                query,
                topic_id: opts.topic_id,
                brand_id: opts.brand_id,
                pages: opts.pages.max(1),
            }
        }
        Some("contact") => {
            no_positionals(&opts)?;
            let (Some(email), Some(feedback)) = (opts.email, opts.feedback) else {
                return Err(ArgsError::Required {
                    command: "contact",
                    what: "--email and --feedback",
                });
            };
            CliCommand::Contact {
                email,
                feedback,
                subject: opts.subject,
                name: opts.name,
                brand_id: opts.brand_id,
            }
        }
        Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
    };

    Ok(CliArgs {
        config_path,
        command,
    })
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn number<I, N>(args: &mut I, flag: &str) -> Result<N, ArgsError>
where
    I: Iterator<Item = String>,
    N: std::str::FromStr,
{
    let raw = value(args, flag)?;
    raw.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value: raw,
    })
}

fn no_positionals(opts: &Options) -> Result<(), ArgsError> {
    match opts.positional.first() {
        Some(extra) => Err(ArgsError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}

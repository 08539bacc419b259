//! Command-line interface module

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing::warn;

use crate::conversion::config::parse_size;
use crate::conversion::{ConversionConfig, ConversionMetadata, Direction, Operation};
use crate::converters::{HashAlgorithm, TextCase};
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "tcv")]
#[command(about = "Convert JSON, YAML, Base64, Hex, and more")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Pass input through without trimming surrounding whitespace
    #[arg(long, global = true)]
    pub raw: bool,

    /// Maximum input size (e.g., 10MB, default: 100MB)
    #[arg(long, global = true)]
    pub max_input_size: Option<String>,

    /// Output conversion statistics on stderr
    #[arg(long, global = true)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Input and output shared by every subcommand
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// Input text or file path (default: standard input)
    pub input: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert JSON to YAML
    #[command(name = "json2yaml")]
    JsonToYaml {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Convert YAML to JSON
    #[command(name = "yaml2json")]
    YamlToJson {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Base64 encode/decode
    Base64 {
        /// encode or decode (anything other than "encode" decodes)
        operation: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Generate hash (md5, sha1, sha256, sha512)
    Hash {
        /// Digest algorithm
        algorithm: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Convert Hex to Binary
    #[command(name = "hex2bin")]
    HexToBinary {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Convert Binary to Hex
    #[command(name = "bin2hex")]
    BinaryToHex {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Convert Hex to C-Array
    #[command(name = "hex2c")]
    HexToCArray {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Decode cron expression to human readable
    Cron {
        #[command(flatten)]
        io: IoArgs,
    },
    /// JWT decode/encode (encode output is unsigned)
    Jwt {
        /// decode or encode (anything other than "decode" encodes)
        operation: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// URL encode/decode
    Url {
        /// encode or decode (anything other than "encode" decodes)
        operation: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Text transformations (upper, lower, camel, snake, kebab, pascal)
    Text {
        /// Case transformation to apply
        operation: String,
        #[command(flatten)]
        io: IoArgs,
    },
}

impl Commands {
    /// Map the subcommand and its selector to a single operation
    pub fn operation(&self) -> ConversionResult<Operation> {
        let operation = match self {
            Commands::JsonToYaml { .. } => Operation::JsonToYaml,
            Commands::YamlToJson { .. } => Operation::YamlToJson,
            Commands::Base64 { operation, .. } => {
                Operation::Base64(direction(operation, Direction::Decode))
            }
            Commands::Hash { algorithm, .. } => {
                Operation::Hash(algorithm.parse::<HashAlgorithm>()?)
            }
            Commands::HexToBinary { .. } => Operation::HexToBinary,
            Commands::BinaryToHex { .. } => Operation::BinaryToHex,
            Commands::HexToCArray { .. } => Operation::HexToCArray,
            Commands::Cron { .. } => Operation::Cron,
            Commands::Jwt { operation, .. } => Operation::Jwt(direction(operation, Direction::Encode)),
            Commands::Url { operation, .. } => Operation::Url(direction(operation, Direction::Decode)),
            Commands::Text { operation, .. } => Operation::Text(operation.parse::<TextCase>()?),
        };
        Ok(operation)
    }

    pub fn io(&self) -> &IoArgs {
        match self {
            Commands::JsonToYaml { io }
            | Commands::YamlToJson { io }
            | Commands::Base64 { io, .. }
            | Commands::Hash { io, .. }
            | Commands::HexToBinary { io }
            | Commands::BinaryToHex { io }
            | Commands::HexToCArray { io }
            | Commands::Cron { io }
            | Commands::Jwt { io, .. }
            | Commands::Url { io, .. }
            | Commands::Text { io, .. } => io,
        }
    }
}

fn direction(selector: &str, fallback: Direction) -> Direction {
    let (direction, fell_back) = Direction::parse_or(selector, fallback);
    if fell_back {
        warn!(selector, "unrecognized operation, using {}", direction);
    }
    direction
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::new().with_trim_input(!args.raw);
        if let Some(limit) = &args.max_input_size {
            config = config.with_max_input_size(
                parse_size(limit).map_err(ConversionError::invalid_argument)?,
            );
        }

        config
            .validate()
            .map_err(ConversionError::invalid_argument)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        match &self.args.command.io().output {
            Some(output) => format!("'{}'", output.display()),
            None => "standard output".to_string(),
        }
    }
}

/// Print `content` to stdout, or write it to `path` and confirm.
pub fn write_output(content: &str, path: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            CliUtils::show_success(&format!("Output written to {}", path.display()), quiet);
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("Error:").for_stderr().red().bold(), message);
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply the color decision to console's stdout and stderr styling
    pub fn configure_colors() {
        let enabled = Self::should_use_color();
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled && atty::is(atty::Stream::Stderr));
    }

    /// Print conversion statistics to stderr
    pub fn show_statistics(metadata: &ConversionMetadata, quiet: bool) {
        if quiet {
            return;
        }

        eprintln!("\nConversion Statistics:");
        eprintln!("Operation: {}", metadata.operation);
        eprintln!("Input size: {} bytes", metadata.input_size);
        eprintln!("Output size: {} bytes", metadata.output_size);
        eprintln!("Processing time: {}µs", metadata.processing_time_us);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    match error.downcast_ref::<ConversionError>() {
        Some(conversion_error) => {
            CliUtils::show_error(&conversion_error.user_message());
            if let Some(tip) = tip_for(conversion_error) {
                eprintln!("\nTip: {}", tip);
            }
        }
        None => CliUtils::show_error(&format!("{:#}", error)),
    }
}

fn tip_for(error: &ConversionError) -> Option<&'static str> {
    match error.kind() {
        ConversionErrorKind::InputTooLarge => Some("Use --max-input-size to raise the limit"),
        ConversionErrorKind::InvalidArgument if error.to_string().starts_with("Unknown operation") => {
            Some("Valid operations: upper, lower, camel, snake, kebab, pascal")
        }
        _ => None,
    }
}

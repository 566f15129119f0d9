use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use version_recommend::config::Config;
use version_recommend::report::{self, PackageInput};
use version_recommend::version::filter::TagFilter;
use version_recommend::version::recommend::VersionRecommender;

#[derive(Parser)]
#[command(name = "version-recommend")]
#[command(
    version,
    about = "Recommend latest and maintenance upgrades from upstream version tags"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to config file (default: $XDG_CONFIG_HOME/version-recommend/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the versioning scheme of a version string
    Classify {
        /// Version string to classify
        version: String,
    },

    /// Recommend upgrades for one package
    Recommend {
        /// Version currently packaged
        #[arg(short, long)]
        current: String,

        /// Upstream tags (read from --tags-file or stdin when omitted)
        tags: Vec<String>,

        /// File with one upstream tag per line
        #[arg(long, value_name = "FILE", conflicts_with = "tags")]
        tags_file: Option<PathBuf>,

        /// Keep pre-release and vendor tags
        #[arg(long)]
        keep_prereleases: bool,
    },

    /// Recommend upgrades for every package in a JSON batch file
    Batch {
        /// Batch file mapping package name to currentVersion and tags
        file: PathBuf,

        /// Keep pre-release and vendor tags
        #[arg(long)]
        keep_prereleases: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };
    let _guard = version_recommend::logging::init(
        level,
        cli.log_file.as_deref(),
        cli.format == Format::Json,
    )
    .context("Failed to initialize logging")?;
    debug!("Loaded config: {:?}", config);

    let recommender = VersionRecommender::new();

    match cli.command {
        Command::Classify { version } => match recommender.classify(&version) {
            Ok(scheme) => {
                match cli.format {
                    Format::Text => println!("{}", scheme),
                    Format::Json => println!(
                        "{}",
                        serde_json::json!({ "version": version, "scheme": scheme })
                    ),
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Recommend {
            current,
            tags,
            tags_file,
            keep_prereleases,
        } => {
            let tags = if !tags.is_empty() {
                tags
            } else if let Some(path) = tags_file {
                read_tags_file(&path)?
            } else {
                read_tags(io::stdin().lock()).context("Failed to read tags from stdin")?
            };
            info!("Recommending for '{}' against {} tags", current, tags.len());

            let filter = tag_filter(&config, keep_prereleases);
            let package_report = report::recommend_package(
                &recommender,
                filter.as_ref(),
                "package",
                PackageInput {
                    current_version: current,
                    tags,
                },
            );

            match cli.format {
                Format::Text => println!("{}", package_report),
                Format::Json => println!("{}", serde_json::to_string_pretty(&package_report)?),
            }

            Ok(match package_report.outcome {
                report::Outcome::Recommended { .. } => ExitCode::SUCCESS,
                report::Outcome::Unclassifiable { .. } => ExitCode::FAILURE,
            })
        }
        Command::Batch {
            file,
            keep_prereleases,
        } => {
            let batch = report::load_batch(&file)?;
            let filter = tag_filter(&config, keep_prereleases);
            let reports = report::run_batch(&recommender, filter.as_ref(), batch);

            match cli.format {
                Format::Text => {
                    for package_report in &reports {
                        println!("{}", package_report);
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn tag_filter(config: &Config, keep_prereleases: bool) -> Option<TagFilter> {
    if keep_prereleases {
        None
    } else {
        config.filter.build()
    }
}

fn read_tags_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open tags file {}", path.display()))?;
    read_tags(io::BufReader::new(file))
        .with_context(|| format!("Failed to read tags file {}", path.display()))
}

/// Read one tag per line, skipping blank lines and `#` comments
fn read_tags<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tags = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let tag = line.trim();
        if tag.is_empty() || tag.starts_with('#') {
            continue;
        }
        tags.push(tag.to_string());
    }
    Ok(tags)
}

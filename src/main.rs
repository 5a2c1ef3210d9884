use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use course_progress::{Config, CourseOutline, CourseSnapshot, ScopeId, SectionOutline, ui};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "course-progress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress across a whole course
    Overview {
        #[command(flatten)]
        input: SnapshotArgs,
    },
    /// Show progress within one section
    Section {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Section to show: a module id, or "root"
        #[arg(short, long)]
        section: ScopeId,
    },
    /// Print the config file location and active settings
    Config,
}

#[derive(Args)]
struct SnapshotArgs {
    /// Lessons payload (JSON array or paginated envelope)
    lessons: PathBuf,
    /// Modules payload; scopes are synthesized from lessons when omitted
    #[arg(short, long)]
    modules: Option<PathBuf>,
    /// Course id used in routes
    #[arg(short, long)]
    course: i64,
    /// Print the outline as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl SnapshotArgs {
    fn load(&self) -> Result<CourseSnapshot> {
        CourseSnapshot::load(self.course, &self.lessons, self.modules.as_deref())
            .with_context(|| format!("Failed to load course {}", self.course))
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_progress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let theme = config.active_theme();

    match cli.command {
        Commands::Overview { input } => {
            let outline = CourseOutline::build(&input.load()?);
            if input.json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                println!("{}", ui::to_plain_text(&ui::overview_lines(&outline, &config, &theme)));
            }
        }
        Commands::Section { input, section } => {
            let outline = SectionOutline::build(&input.load()?, section);
            if input.json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                println!("{}", ui::to_plain_text(&ui::section_lines(&outline, &config, &theme)));
            }
        }
        Commands::Config => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use moodplan_core::{Activity, ActivityManager, EffortLevel, MoodType};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod quote;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "moodplan",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MOODPLAN_BUILD_SHA"), ")"),
    about = "Mood-aware activity planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an activity (School when --course is given, Personal otherwise)
    Add {
        title: String,

        /// LOW, MEDIUM or HIGH
        #[arg(long)]
        effort: EffortLevel,

        #[arg(long, default_value = "")]
        description: String,

        /// Due date, YYYY-MM-DD (default: today)
        #[arg(long)]
        due: Option<NaiveDate>,

        #[arg(long)]
        course: Option<String>,
    },

    /// List all activities in insertion order
    List,

    /// Show activities whose effort fits a mood
    Suggest {
        /// TIRED, NEUTRAL or ENERGETIC
        #[arg(long)]
        mood: MoodType,

        /// Skip the motivational quote
        #[arg(long)]
        no_quote: bool,
    },

    /// Write activity_<id>.ics for one activity
    Export { id: u32 },

    /// Mood timeline commands
    Mood {
        #[command(subcommand)]
        command: MoodCommand,
    },

    /// Print a motivational quote
    Quote {
        #[arg(long)]
        mood: Option<MoodType>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MoodCommand {
    /// Record the current mood
    Log { mood: MoodType },

    /// Show every recorded mood, oldest first
    History,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config.toml if none exists
    Init,

    /// Print the effective configuration
    Show,
}

struct Session {
    cfg: Config,
    home: PathBuf,
    today: NaiveDate,
}

impl Session {
    fn open() -> Result<Self> {
        let cfg = config::load_config()?;
        let home = state::ensure_moodplan_home()?;
        let today = cfg.today()?;
        Ok(Self { cfg, home, today })
    }

    fn activities_path(&self) -> PathBuf {
        self.cfg.activities_path(&self.home)
    }

    fn load_activities(&self) -> Result<ActivityManager> {
        state::load_activities(&self.activities_path(), self.today, &self.cfg.storage.export_dir)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            title,
            effort,
            description,
            due,
            course,
        } => {
            let s = Session::open()?;
            let mut activity = Activity::new(&title, effort)?
                .with_description(description)
                .with_due_date(due.unwrap_or(s.today));
            if let Some(course) = course {
                activity = activity.school(course);
            }

            let mut manager = s.load_activities()?;
            let id = manager.add_activity(activity)?;
            state::save_activities(&manager, &s.activities_path())?;
            println!("Added activity {id}");
        }

        Command::List => {
            let s = Session::open()?;
            let manager = s.load_activities()?;
            let all = manager.all_activities();
            if all.is_empty() {
                println!("No activities yet. Add one: moodplan add <title> --effort LOW");
            }
            for a in &all {
                println!("{:>3}  {}", a.id(), a);
            }
        }

        Command::Suggest { mood, no_quote } => {
            let s = Session::open()?;
            let manager = s.load_activities()?;
            let picks = manager.suggest_by_mood(mood);

            println!(
                "Mood {} -> effort {} ({} match{})\n",
                mood,
                mood.recommended_effort(),
                picks.len(),
                if picks.len() == 1 { "" } else { "es" }
            );
            for a in &picks {
                println!("- [{}] {}", a.id(), a.title());
            }

            if !no_quote {
                println!("\n{}", quote::quote_for_mood(&s.cfg.quotes, Some(mood)).await);
            }
        }

        Command::Export { id } => {
            let s = Session::open()?;
            let manager = s.load_activities()?;
            let path = manager
                .export_to_calendar_file(id)
                .with_context(|| format!("export activity {id}"))?;
            println!("Wrote {}", path.display());
        }

        Command::Mood { command } => {
            let s = Session::open()?;
            let path = s.cfg.mood_log_path(&s.home);
            let mut moods = state::load_moods(&path)?;

            match command {
                MoodCommand::Log { mood } => {
                    let entry = moods.log_mood(mood)?;
                    state::save_moods(&moods, &path)?;
                    println!("{entry}");
                    println!("Recommended effort: {}", mood.recommended_effort());
                }
                MoodCommand::History => {
                    if moods.is_empty() {
                        println!("No moods logged yet.");
                    }
                    for e in moods.all_mood_logs() {
                        println!("{e}");
                    }
                }
            }
        }

        Command::Quote { mood } => {
            let cfg = config::load_config()?;
            println!("{}", quote::quote_for_mood(&cfg.quotes, mood).await);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                println!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

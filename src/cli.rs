use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "ojrec", version, about = "Problem status annotation and weak-field recommendation")]
pub struct Cli {
    /// JSON array of user profiles (overrides `data.profiles_path`)
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Directory of problem JSON files (overrides `data.problems_dir`)
    #[arg(long, global = true)]
    pub problems: Option<PathBuf>,

    /// Act as this user; anonymous when omitted
    #[arg(long, global = true)]
    pub user: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend unsolved problems from the weakest field
    Recommend,
    /// List public problems with the user's status
    List {
        #[arg(long)]
        field: Option<String>,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show one public problem by display id
    Problem { id: String },
    /// List a contest's problems with the user's contest status
    Contest { contest_id: u64 },
    /// Print the display id of a random public problem
    PickOne,
    /// List bonus problems
    Bonus,
}

impl Cli {
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(ref path) = self.profiles {
            settings.data.profiles_path = path.clone();
        }
        if let Some(ref dir) = self.problems {
            settings.data.problems_dir = dir.clone();
        }
    }
}

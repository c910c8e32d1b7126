use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::labeling::{self, Outcome};
use crate::output::{render_to_string, write_labeled_tree, OUTPUT_FILE};
use crate::parser::read_records_from_path;

/// Graceful Tree - odd-graceful labeling of trees
#[derive(Parser, Debug)]
#[command(name = "graceful-tree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tree description: one line per node, the node followed by its children
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Stop searching after this many steps (overrides graceful.toml)
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Configuration file (default: graceful.toml in this or a parent directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::discover(&env::current_dir()?)?,
        };
        if self.max_steps.is_some() {
            config.search.max_steps = self.max_steps;
        }

        label_tree(&self.input, Path::new(OUTPUT_FILE), &config)
    }
}

fn label_tree(
    input: &Path,
    output_path: &Path,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_records_from_path(input)?;
    debug!(input = %input.display(), records = records.len(), "read tree records");

    match labeling::solve(&records, &config.search) {
        Outcome::Labeled(tree) => {
            write_labeled_tree(&tree, output_path)?;
            info!(output = %output_path.display(), "wrote labeled tree");
            println!("Graceful tree has been written to {}", output_path.display());
            Ok(())
        }
        outcome @ Outcome::Unsatisfiable => {
            print!("{}", render_to_string(&outcome));
            Ok(())
        }
        outcome @ (Outcome::BudgetExhausted { .. } | Outcome::InvalidStructure(_)) => {
            Err(render_to_string(&outcome).trim_end().into())
        }
    }
}

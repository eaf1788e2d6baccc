//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about = "Calcfolio - run any calculator from the terminal")]
pub struct Cli {
    /// Site configuration (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List calculators
    List {
        /// Only this category (math, finance, health, gaming, science)
        #[arg(long)]
        category: Option<String>,
        /// Filter by title, slug or keyword
        #[arg(long)]
        search: Option<String>,
    },
    /// List categories
    Categories,
    /// Resolve a URL path to a page and its metadata
    Route {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Show a calculator's form fields
    Fields {
        /// Calculator slug or path
        slug: String,
    },
    /// Run a calculator
    Run {
        /// Calculator slug or path
        slug: String,
        /// Field value, repeatable
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
        /// Print the typed result as JSON
        #[arg(long)]
        json: bool,
        /// Never prompt for missing fields
        #[arg(long)]
        no_prompt: bool,
    },
    /// Show a calculator's educational notes
    Learn {
        /// Calculator slug or path
        slug: String,
    },
    /// Print every canonical URL
    Sitemap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_arguments() {
        let cli = Cli::parse_from(["calc_cli", "-v", "run", "bmi", "-f", "weight_kg=70", "--field", "height_cm=175", "--json"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Run {
                slug,
                fields,
                json,
                no_prompt,
            } => {
                assert_eq!(slug, "bmi");
                assert_eq!(fields, vec!["weight_kg=70", "height_cm=175"]);
                assert!(json);
                assert!(!no_prompt);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["calc_cli", "list", "--category", "math", "--config", "site.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Command::List { category: Some(ref c), .. } if c == "math"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

//! # Calcfolio CLI
//!
//! Terminal front end for the calculator directory: browse the catalog,
//! resolve site paths, and run any calculator from `key=value` arguments
//! or interactive prompts.
//!
//! ```text
//! calc_cli list --category health
//! calc_cli route /math/riemann-sum
//! calc_cli run bmi -f weight_kg=70 -f height_cm=175
//! calc_cli run cartesian-to-polar -f x=3 -f y=4 --json
//! ```

mod cli;
mod commands;
mod logger;
mod prompt;

use std::io::{self, Write};

use anyhow::Result;
use calc_core::config::SiteConfig;
use calc_core::routing::Router;
use clap::Parser;

use cli::{Cli, Command};
use commands::RunOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let config = SiteConfig::load_or_default(cli.config.as_deref());
    let router = Router::new(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::List { category, search } => commands::list(&mut out, category.as_deref(), search.as_deref())?,
        Command::Categories => commands::categories(&mut out)?,
        Command::Route { path, json } => commands::route(&mut out, &router, path, *json)?,
        Command::Fields { slug } => commands::fields(&mut out, commands::find_calculator(&router, slug)?)?,
        Command::Learn { slug } => commands::learn(&mut out, commands::find_calculator(&router, slug)?)?,
        Command::Sitemap => commands::sitemap(&mut out, &router)?,
        Command::Run {
            slug,
            fields,
            json,
            no_prompt,
        } => {
            let calculator = commands::find_calculator(&router, slug)?;
            let stdin = io::stdin();
            commands::run(
                &mut out,
                &mut stdin.lock(),
                calculator,
                RunOptions {
                    fields,
                    json: *json,
                    prompt: commands::should_prompt(*no_prompt),
                },
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

//! Subcommand implementations. Each writes to the given output so the
//! commands can be exercised without a terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use calc_core::catalog::{self, CalculatorDescriptor, CategorySlug, CATEGORIES};
use calc_core::content;
use calc_core::form::FormValues;
use calc_core::routing::{Route, Router};
use calc_core::CalcError;

use crate::prompt;

/// Look up a calculator by slug, short link or full path
pub fn find_calculator(router: &Router, slug_or_path: &str) -> Result<&'static CalculatorDescriptor> {
    match router.resolve(slug_or_path).route {
        Route::Calculator(calculator) => Ok(calculator),
        _ => Err(CalcError::calculator_not_found(slug_or_path))
            .context("run `calc_cli list` to see every calculator"),
    }
}

pub fn list(out: &mut impl Write, category: Option<&str>, search: Option<&str>) -> Result<()> {
    let filter = match category {
        Some(slug) => match catalog::find_category(&slug.to_lowercase()) {
            Some(c) => Some(c.category),
            None => bail!("unknown category '{}'", slug),
        },
        None => None,
    };
    let matches = catalog::search(search.unwrap_or_default());
    for category in CategorySlug::ALL.into_iter().filter(|c| filter.map_or(true, |f| f == *c)) {
        let in_category: Vec<_> = matches.iter().filter(|c| c.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        writeln!(out, "{}", category.descriptor().name)?;
        for calculator in in_category {
            writeln!(out, "  {:>3}  {:<28} {}", calculator.id, calculator.slug, calculator.title)?;
        }
    }
    Ok(())
}

pub fn categories(out: &mut impl Write) -> Result<()> {
    for category in &CATEGORIES {
        let count = catalog::in_category(category.category).count();
        writeln!(out, "{:<8} {:>2} calculators  {}", category.slug, count, category.description)?;
    }
    Ok(())
}

pub fn route(out: &mut impl Write, router: &Router, path: &str, json: bool) -> Result<()> {
    let page = router.resolve(path);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
        return Ok(());
    }
    let target = match &page.route {
        Route::Home => "home".to_string(),
        Route::Category(category) => format!("category {}", category.as_str()),
        Route::Calculator(calculator) => format!("calculator {} ({:?})", calculator.slug, calculator.kind),
        Route::NotFound(_) => "not found".to_string(),
    };
    writeln!(out, "Route:       {}", target)?;
    writeln!(out, "Title:       {}", page.metadata.title)?;
    writeln!(out, "Description: {}", page.metadata.description)?;
    writeln!(out, "Canonical:   {}", page.metadata.canonical)?;
    writeln!(out, "Keywords:    {}", page.metadata.keywords_joined())?;
    Ok(())
}

pub fn fields(out: &mut impl Write, calculator: &CalculatorDescriptor) -> Result<()> {
    writeln!(out, "{} ({})", calculator.title, calculator.path())?;
    for field in calculator.kind.fields() {
        let mut line = format!("  {:<24} {}", field.key, field.display_label());
        if !field.required {
            line.push_str(" [optional]");
        }
        let choices: Vec<&str> = field.choices().iter().map(|c| c.value).collect();
        if !choices.is_empty() {
            line.push_str(&format!(" one of: {}", choices.join(", ")));
        }
        if !field.placeholder.is_empty() {
            line.push_str(&format!(" e.g. {}", field.placeholder));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn learn(out: &mut impl Write, calculator: &CalculatorDescriptor) -> Result<()> {
    let doc = content::for_calculator(calculator);
    writeln!(out, "{}\n", calculator.title)?;
    writeln!(out, "{}", doc.intro)?;
    for section in &doc.sections {
        writeln!(out, "\n{}\n{}\n{}", section.heading, "-".repeat(section.heading.chars().count()), section.body)?;
    }
    Ok(())
}

pub fn sitemap(out: &mut impl Write, router: &Router) -> Result<()> {
    for url in router.sitemap() {
        writeln!(out, "{}", url)?;
    }
    Ok(())
}

pub struct RunOptions<'a> {
    pub fields: &'a [String],
    pub json: bool,
    pub prompt: bool,
}

pub fn run(
    out: &mut impl Write,
    input: &mut impl BufRead,
    calculator: &CalculatorDescriptor,
    options: RunOptions<'_>,
) -> Result<()> {
    let mut form = FormValues::from_pairs(options.fields.iter().map(String::as_str))?;
    if options.prompt {
        prompt::fill_missing(calculator.kind.fields(), &mut form, input, out)?;
    }
    tracing::debug!(calculator = calculator.slug, "running");

    let evaluation = match calculator.kind.evaluate(&form) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            if options.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&e)?)?;
            }
            return Err(e).with_context(|| format!("{} could not be calculated", calculator.title));
        }
    };

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&evaluation.data)?)?;
    } else {
        writeln!(out, "{}", calculator.title)?;
        writeln!(out, "{}", "=".repeat(calculator.title.chars().count()))?;
        write!(out, "{}", evaluation.report.to_text())?;
    }
    Ok(())
}

/// Prompt only when asked to and a person is at the keyboard
pub fn should_prompt(no_prompt: bool) -> bool {
    !no_prompt && io::stdin().is_terminal()
}

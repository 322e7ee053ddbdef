use crate::infra::{reload_from, CliContext};
use clap::Args;
use consultant_directory::directory::{
    DirectoryEntry, ExplainedEntry, FilterStateController, InvalidRangeError, SearchOutcome,
};
use consultant_directory::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Match name, title, description or location (case-insensitive)
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Expertise area to filter on; repeat to match any of several
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,
    /// Only list consultants available remotely
    #[arg(long)]
    pub(crate) remote_only: bool,
    /// Lower bound of the rate range (defaults to the configured minimum)
    #[arg(long)]
    pub(crate) min_rate: Option<f64>,
    /// Upper bound of the rate range (defaults to the configured maximum)
    #[arg(long)]
    pub(crate) max_rate: Option<f64>,
    /// CSV or JSON export to search instead of the configured directory
    #[arg(long)]
    pub(crate) entries: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Show which filters every consultant passed or failed
    #[arg(long)]
    pub(crate) explain: bool,
}

/// Replays the arguments as filter-control changes, the way a user would set them.
pub(crate) fn apply_filters(
    controller: &mut FilterStateController,
    args: &SearchArgs,
) -> Result<(), InvalidRangeError> {
    if let Some(text) = &args.text {
        controller.set_text(text.as_str());
    }
    for tag in &args.tags {
        if !controller.state().selected_tags.contains(tag) {
            controller.toggle_tag(tag);
        }
    }
    controller.set_remote_only(args.remote_only);

    if args.min_rate.is_some() || args.max_rate.is_some() {
        let current = controller.state().rate_range;
        controller.set_rate_range(
            args.min_rate.unwrap_or(current.min()),
            args.max_rate.unwrap_or(current.max()),
        )?;
    }
    Ok(())
}

pub(crate) fn run_search(context: &CliContext, args: SearchArgs) -> Result<(), AppError> {
    if let Some(path) = &args.entries {
        reload_from(context, path)?;
    }

    let mut controller = FilterStateController::new(context.config.rate_bounds);
    apply_filters(&mut controller, &args).map_err(|err| AppError::Directory(err.into()))?;
    let spec = controller.current_query_spec();

    if args.explain {
        let explained = context.service.explain(&spec)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&explained)?);
        } else {
            render_explanations(&explained);
        }
        return Ok(());
    }

    let outcome = context.service.search(&spec)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }
    Ok(())
}

const EMPTY_HINT: &str =
    "No consultants found matching your criteria. Clear the filters to list everyone.";

fn listing_header(count: usize) -> String {
    let noun = if count == 1 { "Consultant" } else { "Consultants" };
    format!("{count} {noun} Found")
}

pub(crate) fn render_outcome(outcome: &SearchOutcome) {
    println!("{}", listing_header(outcome.count));
    if outcome.entries.is_empty() {
        println!("\n{EMPTY_HINT}");
        return;
    }
    for entry in &outcome.entries {
        render_entry(entry);
    }
}

fn render_entry(entry: &DirectoryEntry) {
    let remote = if entry.remote { " | Remote available" } else { "" };
    println!("\n{} - {}", entry.name, entry.title);
    println!("  {}{}", entry.location, remote);
    println!(
        "  ${} {} | {}",
        entry.rate,
        entry.rate_type.label(),
        entry.availability
    );
    if !entry.expertise_tags.is_empty() {
        let tags: Vec<&str> = entry.expertise_tags.iter().map(String::as_str).collect();
        println!("  Expertise: {}", tags.join(", "));
    }
}

fn render_explanations(explained: &[ExplainedEntry]) {
    for item in explained {
        let verdict = if item.trace.matched { "match" } else { "skip" };
        let failed: Vec<&str> = item.trace.failed().map(|kind| kind.label()).collect();
        if failed.is_empty() {
            println!("[{verdict}] {}", item.entry.name);
        } else {
            println!(
                "[{verdict}] {} (failed: {})",
                item.entry.name,
                failed.join(", ")
            );
        }
    }
}

#[derive(Debug, Serialize)]
struct FilterOptions<'a> {
    rate_min: f64,
    rate_max: f64,
    rate_step: f64,
    expertise_areas: &'a [String],
}

fn filter_options(context: &CliContext) -> FilterOptions<'_> {
    FilterOptions {
        rate_min: context.config.rate_bounds.min(),
        rate_max: context.config.rate_bounds.max(),
        rate_step: context.config.rate_step,
        expertise_areas: context.service.vocabulary().labels(),
    }
}

pub(crate) fn run_options(context: &CliContext) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&filter_options(context))?);
    Ok(())
}

use crate::infra::CliContext;
use crate::search::render_outcome;
use clap::Args;
use consultant_directory::directory::{DirectoryService, FilterStateController, SearchOutcome};
use consultant_directory::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Expertise area the demo filters on
    #[arg(long, default_value = "Workforce Development")]
    pub(crate) tag: String,
    /// Search term the demo types after the tag filter
    #[arg(long, default_value = "toronto")]
    pub(crate) text: String,
    /// Print only result summaries, not consultant details
    #[arg(long)]
    pub(crate) summaries_only: bool,
}

pub(crate) fn run_demo(context: &CliContext, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        tag,
        text,
        summaries_only,
    } = args;
    let service = &context.service;
    let mut controller = FilterStateController::new(context.config.rate_bounds);

    println!("Consultant directory demo");
    step(
        "Initial listing",
        pull(service, &controller)?,
        summaries_only,
    );

    controller.toggle_tag(&tag);
    controller.set_remote_only(true);
    step(
        &format!("Apply filters: '{tag}' + remote only"),
        pull(service, &controller)?,
        summaries_only,
    );

    controller.toggle_tag(&tag);
    controller.set_text(text.as_str());
    step(
        &format!("Search '{text}' (remote only)"),
        pull(service, &controller)?,
        summaries_only,
    );

    if let Err(err) = controller.set_rate_range(160.0, 130.0) {
        println!("\nRate slider rejected: {err}");
    }
    controller
        .set_rate_range(130.0, 160.0)
        .map_err(|err| AppError::Directory(err.into()))?;
    step(
        "Narrow rate to $130-$160",
        pull(service, &controller)?,
        summaries_only,
    );

    controller.reset();
    step("Clear filters", pull(service, &controller)?, summaries_only);

    Ok(())
}

fn pull(
    service: &DirectoryService,
    controller: &FilterStateController,
) -> Result<SearchOutcome, AppError> {
    Ok(service.search(&controller.current_query_spec())?)
}

fn step(label: &str, outcome: SearchOutcome, summaries_only: bool) {
    println!("\n== {label}");
    if summaries_only {
        println!("{} ({})", outcome.summary, outcome.names().join(", "));
    } else {
        render_outcome(&outcome);
    }
}

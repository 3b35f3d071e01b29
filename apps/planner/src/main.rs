use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_models::CareerRoadmap;
use career_planner::cli::Cli;
use career_planner::client::HttpPlanClient;
use career_planner::config::Config;
use career_planner::controller::PlanRequestController;
use career_planner::form::FormError;
use career_planner::state::PlanState;
use career_planner::terminal::{confirm, prompt_profile};
use career_planner::view::{form_message, render_roadmap, submit_label, RESET_PROMPT};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.api_base_url.clone())?;

    // Logs go to stderr; stdout carries only the roadmap.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "career_planner={0},career_plan={0}",
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!("Starting career planner v{}", env!("CARGO_PKG_VERSION"));

    let client = HttpPlanClient::new(&config.api_base_url);
    info!("Using roadmap API at {}", client.endpoint());
    let controller = PlanRequestController::new(Arc::new(client));

    // Loading indicator, driven by state transitions.
    let mut rx = controller.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if rx.borrow_and_update().is_loading() {
                eprintln!("{}", submit_label(true));
            }
        }
    });

    if cli.is_one_shot() {
        run_once(&cli, &controller).await
    } else {
        run_interactive(&cli, &controller).await
    }
}

async fn run_once(cli: &Cli, controller: &PlanRequestController) -> Result<()> {
    let profile = cli.profile_input().submit()?;
    controller.submit(&profile).await;

    match controller.state() {
        PlanState::Success(roadmap) => print_roadmap(&roadmap, cli.json),
        PlanState::Failed(message) => Err(anyhow!(message)),
        other => Err(anyhow!("plan request did not settle: {other:?}")),
    }
}

async fn run_interactive(cli: &Cli, controller: &PlanRequestController) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut form = cli.profile_input();
    let mut form_error: Option<FormError> = None;

    loop {
        let state = controller.state();

        if !state.shows_form() {
            if let Some(roadmap) = state.roadmap() {
                print_roadmap(roadmap, cli.json)?;
            }
            if !confirm(&mut input, &mut output, RESET_PROMPT)? {
                return Ok(());
            }
            controller.reset();
            // A fresh form, like after a page-level reset.
            form = cli.profile_input();
            continue;
        }

        if let Some(message) = form_message(&state, form_error.as_ref()) {
            eprintln!("{message}");
        }

        form = prompt_profile(&mut input, &mut output, &form)?;
        let profile = match form.submit() {
            Ok(profile) => profile,
            Err(e) => {
                form_error = Some(e);
                continue;
            }
        };
        form_error = None;

        controller.submit(&profile).await;
    }
}

fn print_roadmap(roadmap: &CareerRoadmap, json: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(roadmap)?)?;
    } else {
        writeln!(stdout, "\n{}", render_roadmap(roadmap))?;
    }
    Ok(())
}

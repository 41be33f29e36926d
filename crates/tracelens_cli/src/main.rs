//! Terminal front-end for one-shot investigations.
//!
//! # Responsibility
//! - Parse query arguments and drive one investigation to completion.
//! - Render the list, graph legend and sidebar as text or a JSON report.

mod render;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracelens_core::{
    classify_query, default_log_level, init_logging, now_epoch_ms, render_guidelines,
    source_catalog, DashboardConfig, InvestigationController, QueryKind, SubmitOutcome,
    TraceReport,
};

#[derive(Debug, Parser)]
#[command(name = "tracelens", version, about = "Simulated OSINT investigation dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one investigation and print the results.
    Investigate(InvestigateArgs),
    /// Print the ethical-use guidelines.
    Guidelines,
    /// List the simulated sources.
    Sources,
    /// Print core linkage probe and version.
    Version,
}

#[derive(Debug, Args)]
struct InvestigateArgs {
    /// Email or phone number; its kind is detected automatically.
    query: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    /// Simulated lookup delay in milliseconds.
    #[arg(long, env = "TRACELENS_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Emit the `{nodes, links, metadata}` report as JSON.
    #[arg(long)]
    json: bool,

    /// Show details of one finding instead of the summary.
    #[arg(long, value_name = "ID")]
    select: Option<u32>,

    /// Confirms the ethical-use guidelines were read.
    #[arg(long, env = "TRACELENS_ACCEPT_GUIDELINES")]
    accept_guidelines: bool,

    /// Absolute directory for rolling log files.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("tracelens error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Investigate(args) => investigate(args),
        Command::Guidelines => {
            println!("{}", render_guidelines());
            Ok(())
        }
        Command::Sources => {
            for entry in source_catalog() {
                println!("{:<24} {:?}", entry.name, entry.input);
            }
            Ok(())
        }
        Command::Version => {
            println!("tracelens_core ping={}", tracelens_core::ping());
            println!("tracelens_core version={}", tracelens_core::core_version());
            Ok(())
        }
    }
}

fn investigate(args: InvestigateArgs) -> anyhow::Result<()> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    if !args.accept_guidelines {
        eprintln!("{}", render_guidelines());
        bail!("rerun with --accept-guidelines after reading the guidelines above");
    }

    let (email, phone) = resolve_fields(&args)?;
    let config = match args.delay_ms {
        Some(delay_ms) => DashboardConfig::with_delay_ms(delay_ms)?,
        None => DashboardConfig::default(),
    };

    let mut controller = InvestigationController::new(config);
    controller.acknowledge_guidelines();
    controller.set_email(email);
    controller.set_phone(phone);

    if !controller.can_submit() {
        bail!("enter an email address or phone number");
    }
    if !args.json {
        eprintln!("{}", render::render_loading(&controller.form().normalized()));
    }
    if controller.run_to_completion(now_epoch_ms)? == SubmitOutcome::Ignored {
        bail!("enter an email address or phone number");
    }

    if let Some(id) = args.select {
        controller.select(id)?;
    }

    let (Some(discovery), Some(summary)) = (controller.discovery(), controller.summary()) else {
        bail!("investigation finished without results");
    };

    if args.json {
        let report = TraceReport::from_results(discovery, summary);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            render::render_results(&controller.cards(), &controller.graph(), &controller.sidebar())
        );
    }
    Ok(())
}

/// Merges the positional query with explicit `--email` / `--phone` flags.
fn resolve_fields(args: &InvestigateArgs) -> anyhow::Result<(String, String)> {
    let mut email = args.email.clone().unwrap_or_default();
    let mut phone = args.phone.clone().unwrap_or_default();

    if let Some(raw) = args.query.as_deref() {
        match classify_query(raw) {
            QueryKind::Email if email.is_empty() => email = raw.to_string(),
            QueryKind::Phone if phone.is_empty() => phone = raw.to_string(),
            QueryKind::Email | QueryKind::Phone => {
                bail!("`{raw}` conflicts with an explicit --email/--phone value")
            }
            QueryKind::Unknown => {
                bail!("`{raw}` is neither an email address nor a phone number")
            }
        }
    }
    Ok((email, phone))
}

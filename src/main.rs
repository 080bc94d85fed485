use anyhow::{bail, Context, Result};
use std::process::ExitCode;
use tracing::{error, info, warn};

use batteryiq::cli::{parse_args, print_help, Args};
use batteryiq::config::{Config, OutputFormat};
use batteryiq::plan::Plan;
use batteryiq::report::{
    exit_status, format_minutes, lookup_status, render_json, render_lookup, render_text,
    EXIT_LOAD_FAILED,
};
use batteryiq::tariff::{rates_at, slot_entries, ClockTime, DayCode};

fn init_logging() -> Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("batteryiq=info".parse()?),
        )
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let args = parse_args();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    info!("BatteryIQ coverage checker v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_LOAD_FAILED)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    // Command line takes precedence over the environment
    let mut config = Config::from_env()?;
    config.apply_args(&args);

    config.validate()?;
    let Some(plan_path) = config.plan_path.as_deref() else {
        bail!("No plan file configured");
    };

    let plan = Plan::from_path(plan_path)?;
    info!(
        "Loaded plan '{}' ({} tariff periods)",
        plan.display_name(),
        plan.periods.len()
    );

    if let Some((day, time)) = &args.at {
        return lookup(&plan, day, time);
    }

    let result = plan.validate_coverage();

    match config.output_format {
        OutputFormat::Text => print!("{}", render_text(plan.display_name(), &result)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&result).context("Failed to serialize coverage report")?
        ),
    }

    if !result.fully_covered {
        warn!(
            "Plan has {} gaps ({} uncovered)",
            result.gaps.len(),
            format_minutes(result.uncovered_minutes())
        );
    } else if result.has_overlaps() {
        warn!("Plan has {} overlapping ranges", result.overlaps.len());
    } else {
        info!("Plan covers every minute of the week");
    }

    Ok(ExitCode::from(exit_status(&result, config.strict)))
}

/// Handle --at: print the rates applying at one point of the week
fn lookup(plan: &Plan, day: &str, time: &str) -> Result<ExitCode> {
    let day: DayCode = day.parse().context("Invalid --at day")?;
    let time: ClockTime = time.parse().context("Invalid --at time")?;
    if time == ClockTime::END_OF_DAY {
        bail!("--at time must be before 24:00");
    }

    let rates = rates_at(&plan.periods, day, time.minutes());
    let entries = slot_entries(&plan.periods, day, time.minutes());
    println!("{}", render_lookup(day, time, &rates, entries));
    Ok(ExitCode::from(lookup_status(entries)))
}

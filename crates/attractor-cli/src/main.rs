//! Strange-attractor simulator command line.
//!
//! Selects a chaotic system, plans the step schedule for the requested
//! output kind, integrates the trajectory with fixed-step RK4 and hands it
//! to the renderer. Invalid selections are rejected at the argument parser;
//! out-of-range times are rejected by the planner before any integration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attractor_sim::{integrate, Attractor, OutputKind, SimulationPlan, Trajectory};

#[derive(Parser, Debug)]
#[command(name = "attractor")]
#[command(about = "Strange-attractor simulator (fixed-step RK4)")]
#[command(version)]
struct Args {
    /// Strange attractor to be simulated
    #[arg(value_enum)]
    attractor: AttractorArg,

    /// Output format of the simulation
    #[arg(value_enum)]
    output: OutputArg,

    /// Total simulation time in seconds {animation: 1-60, image: 1-600}
    time: u32,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AttractorArg {
    Langford,
    Lorenz,
    Rossler,
    Sprott,
}

impl AttractorArg {
    fn model(self) -> Attractor {
        match self {
            Self::Langford => Attractor::Langford,
            Self::Lorenz => Attractor::Lorenz,
            Self::Rossler => Attractor::Rossler,
            Self::Sprott => Attractor::Sprott,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Animation,
    Image,
}

impl OutputArg {
    fn kind(self) -> OutputKind {
        match self {
            Self::Animation => OutputKind::Animation,
            Self::Image => OutputKind::Image,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    println!("Strange Attractor Simulator");
    println!("===========================\n");

    let model = args.attractor.model();
    let kind = args.output.kind();

    // 1. Plan (fail fast on an out-of-range time)
    let plan = attractor_sim::plan(kind, args.time)?;
    tracing::info!(
        "planned {} run: {} steps of {} s",
        kind.label(),
        plan.step_count,
        plan.step_size
    );

    // 2. Simulate
    let traj = integrate(model, model.initial_state(), plan.step_size, plan.step_count);
    print_run_stats(&plan, &traj);

    // 3. Render
    let path = attractor_render::render(&traj, kind, &args.output_dir, model.label())
        .with_context(|| format!("failed to render {} output", kind.label()))?;

    println!("\n{} written to {}", kind.label(), path.display());
    Ok(())
}

fn print_run_stats(plan: &SimulationPlan, traj: &Trajectory) {
    println!("Simulation Stats:");
    println!("  Steps:     {}", plan.step_count);
    println!("  Step Size: {} s", plan.step_size);
    println!("  Points:    {}", traj.len());
    if let Some(last) = traj.pos.last() {
        println!("  Final:     ({:.4}, {:.4}, {:.4})", last.x, last.y, last.z);
    }
    println!("-----------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_positionals() {
        let args = Args::parse_from(["attractor", "lorenz", "image", "10"]);
        assert_eq!(args.attractor, AttractorArg::Lorenz);
        assert_eq!(args.output, OutputArg::Image);
        assert_eq!(args.time, 10);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_args_reject_unknown_choices() {
        assert!(Args::try_parse_from(["attractor", "chen", "image", "10"]).is_err());
        assert!(Args::try_parse_from(["attractor", "lorenz", "video", "10"]).is_err());
        assert!(Args::try_parse_from(["attractor", "lorenz", "image", "ten"]).is_err());
        assert!(Args::try_parse_from(["attractor", "lorenz", "image", "-5"]).is_err());
    }

    #[test]
    fn test_arg_to_model_mapping() {
        assert_eq!(AttractorArg::Langford.model(), Attractor::Langford);
        assert_eq!(AttractorArg::Lorenz.model(), Attractor::Lorenz);
        assert_eq!(AttractorArg::Rossler.model(), Attractor::Rossler);
        assert_eq!(AttractorArg::Sprott.model(), Attractor::Sprott);

        assert_eq!(OutputArg::Animation.kind(), OutputKind::Animation);
        assert_eq!(OutputArg::Image.kind(), OutputKind::Image);
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use u_steiner::instance::{Instance, Solution};
use u_steiner::search::Method;

#[derive(Parser)]
#[command(name = "u-steiner")]
#[command(about = "Insert Steiner points to remove obtuse triangles from a CG:SHOP 2025 instance")]
struct Cmd {
    /// Instance JSON file
    input: PathBuf,

    /// Where to write the solution JSON
    output: PathBuf,

    /// Search driver: legacy, local, sa or ant (overrides the instance)
    #[arg(long)]
    method: Option<Method>,

    /// Iteration budget L (overrides the instance)
    #[arg(short = 'L', long = "iterations")]
    iterations: Option<usize>,

    /// Energy weight of obtuse triangles (sa)
    #[arg(long)]
    alpha: Option<f64>,

    /// Energy weight of Steiner points (sa)
    #[arg(long)]
    beta: Option<f64>,

    /// Random seed (sa)
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate local search trials in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Log every candidate decision
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();

    let instance = Instance::load(&cmd.input)
        .with_context(|| format!("loading instance {}", cmd.input.display()))?;
    let mut params = instance
        .run_parameters()
        .context("reading instance parameters")?;
    if let Some(method) = cmd.method {
        params.method = method;
    }
    if let Some(l) = cmd.iterations {
        params.max_iterations = l;
    }
    params.alpha = cmd.alpha.unwrap_or(params.alpha);
    params.beta = cmd.beta.unwrap_or(params.beta);
    params.seed = cmd.seed.or(params.seed);
    params.parallel = cmd.parallel;

    tracing::info!(
        instance = %instance.instance_uid,
        points = instance.num_points,
        constraints = instance.num_constraints,
        method = %params.method,
        l = params.max_iterations,
        alpha = params.alpha,
        beta = params.beta,
        "instance loaded"
    );

    let mut setup = instance.build().context("triangulating instance")?;
    let result = params
        .run(&mut setup.triangulation, &setup.region)
        .with_context(|| format!("running {} search", params.method))?;

    let solution = Solution::new(
        instance.instance_uid.clone(),
        &result.steiner_points,
        &setup.triangulation,
    );
    solution
        .save(&cmd.output)
        .with_context(|| format!("writing solution {}", cmd.output.display()))?;

    tracing::info!(
        initial_obtuse = result.initial_obtuse,
        final_obtuse = result.final_obtuse,
        steiner_points = result.steiner_points.len(),
        edges = solution.edges.len(),
        output = %cmd.output.display(),
        "solution written"
    );
    Ok(())
}

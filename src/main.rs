use gravbox::{bench_fusion, bench_gravity};
use gravbox::{run, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "gravitational n-body sandbox rendered as live terminal ascii art")]
struct Args {
    /// Scenario file name under scenarios/
    #[arg(short, default_value = "bounce.yaml")]
    scenario: String,

    /// Override the wall restitution coefficient
    #[arg(long)]
    cor: Option<f64>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Override the dataset body count
    #[arg(long)]
    count: Option<usize>,

    /// Override the stop time
    #[arg(long)]
    stop: Option<f64>,

    /// Override the display scale (au per cell row)
    #[arg(long)]
    scale: Option<f64>,

    /// Run the throughput probes instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&args.scenario);
    let file = File::open(&config_path)
        .with_context(|| format!("couldn't open scenario '{}'", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn apply_overrides(cfg: &mut ScenarioConfig, args: &Args) {
    if let Some(cor) = args.cor {
        cfg.parameters.cor = cor;
    }
    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    if let Some(stop) = args.stop {
        cfg.parameters.t_end = stop;
    }
    if let Some(count) = args.count {
        if let Some(ds) = cfg.dataset.as_mut() {
            ds.count = Some(count);
        }
    }
    if let Some(scale) = args.scale {
        if let Some(d) = cfg.display.as_mut() {
            d.scale = scale;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_fusion();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args)?;
    apply_overrides(&mut scenario_cfg, &args);

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    run(scenario)?;

    Ok(())
}

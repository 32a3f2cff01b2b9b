//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - display settings for the terminal renderer (`Display`)
//!
//! Configuration validation happens here: out-of-range restitution or time
//! step and body counts beyond capacity are rejected before the first tick.

use std::path::PathBuf;
use std::time::Duration;

use crate::configuration::config::{
    BodyConfig, ConfigError, DatasetFormat, PresetConfig, ScenarioConfig,
};
use crate::configuration::dataset::{self, AU, SECONDS_PER_DAY};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System, MAX_BODIES};

/// Display scaling and pacing for the terminal renderer.
///
/// `cell_x`/`cell_y` are simulation units per character cell; columns are
/// twice as dense as rows in astronomical mode so orbits do not render
/// stretched in the typical terminal cell aspect. `report_unit` divides the
/// coordinates printed below the frame.
#[derive(Debug, Clone)]
pub struct Display {
    pub cell_x: f64,
    pub cell_y: f64,
    pub report_unit: f64,
    pub frame_delay: Duration,
}

/// A fully-initialized simulation ready to run.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, the
/// set of active force laws (accelerations), and the display settings the
/// terminal renderer samples after every tick.
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub display: Display,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig, validated up front
        let p_cfg = cfg.parameters;
        if p_cfg.cor < 0.0 {
            return Err(ConfigError::NegativeRestitution(p_cfg.cor));
        }
        if p_cfg.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(p_cfg.dt));
        }

        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            g: p_cfg.g,
            cor: p_cfg.cor,
            merge_dist: p_cfg.merge_dist,
            width: p_cfg.width,
            height: p_cfg.height,
            seed: p_cfg.seed,
        };

        // Bodies: preset wins over dataset file, dataset wins over the
        // inline list
        let bodies: Vec<Body> = if let Some(preset) = cfg.preset {
            match preset {
                PresetConfig::Moon => dataset::moon_preset(parameters.g),
            }
        } else if let Some(ds) = &cfg.dataset {
            if let Some(requested) = ds.count {
                if requested > MAX_BODIES {
                    return Err(ConfigError::TooManyBodies {
                        requested,
                        capacity: MAX_BODIES,
                    });
                }
            }
            let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&ds.file);
            match ds.format {
                DatasetFormat::Cartesian => {
                    dataset::load_cartesian(&path, ds.count, &parameters)?
                }
                DatasetFormat::Heliocentric => dataset::load_heliocentric(&path)?,
            }
        } else {
            cfg.bodies
                .iter()
                .map(|bc: &BodyConfig| {
                    Body::new(
                        bc.m,
                        NVec2::new(bc.x[0], bc.x[1]),
                        NVec2::new(bc.v[0], bc.v[1]),
                    )
                })
                .collect()
        };

        if bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        if bodies.len() > MAX_BODIES {
            return Err(ConfigError::TooManyBodies {
                requested: bodies.len(),
                capacity: MAX_BODIES,
            });
        }

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            bounce: e_cfg.bounce,
            fusion: e_cfg.fusion,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        let display = match cfg.display {
            // Astronomical scaling: one row per `scale` au, columns doubled;
            // the sleep shortens as the simulated span grows so long runs
            // stay watchable
            Some(d) => Display {
                cell_x: AU * d.scale / 2.0,
                cell_y: AU * d.scale,
                report_unit: AU,
                frame_delay: Duration::from_micros(
                    (10_000.0 * 365.0 * SECONDS_PER_DAY / parameters.t_end) as u64,
                ),
            },
            // Sandbox scaling: one simulation unit per cell, one simulated
            // second shown as 200 ms of wall clock
            None => Display {
                cell_x: 1.0,
                cell_y: 1.0,
                report_unit: 1.0,
                frame_delay: Duration::from_micros((200_000.0 * parameters.dt) as u64),
            },
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            display,
        })
    }
}

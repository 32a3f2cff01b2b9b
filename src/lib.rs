pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, MAX_BODIES};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::bounce::{in_view, is_monotonic, resolve_bounces};
pub use simulation::fusion::fuse_bodies;
pub use simulation::engine::Engine;
pub use simulation::scenario::{Display, Scenario};

pub use configuration::config::{
    BodyConfig, ConfigError, DatasetConfig, DatasetFormat, DisplayConfig, EngineConfig,
    ParametersConfig, PresetConfig, ScenarioConfig,
};

pub use visualization::term::run;

pub use benchmark::benchmark::{bench_fusion, bench_gravity};

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which optional phases run (wall bounce, fusion)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - a body source       – inline [`BodyConfig`] list, a [`DatasetConfig`]
//!   file, or a [`PresetConfig`]
//! - [`DisplayConfig`]    – optional astronomical display scaling
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example bounded-sandbox scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   bounce: true            # reflect bodies off the view walls
//!   fusion: true            # merge bodies closer than merge_dist
//!
//! parameters:
//!   t_end: 400.0            # total simulation time
//!   dt: 0.1                 # fixed step size
//!   g: 1.0                  # gravitational constant
//!   cor: 0.8                # wall restitution coefficient
//!   merge_dist: 2.0         # fusion distance threshold
//!   width: 75               # view width in cells
//!   height: 40              # view height in cells
//!   seed: 42                # seed for random body generation
//!
//! dataset:
//!   file: data/cluster.dat
//!   format: cartesian       # mass x y vx vy per line
//!   count: 7                # shortfall is filled with random bodies
//! ```
//!
//! Astronomical scenarios replace the dataset with `format: heliocentric`
//! (or `preset: moon`) and add a `display: { scale: 0.1 }` block giving the
//! au per character cell.
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong turning configuration into a runnable
/// scenario. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed dataset line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("restitution coefficient must not be negative (got {0})")]
    NegativeRestitution(f64),

    #[error("time step must be positive (got {0})")]
    NonPositiveTimeStep(f64),

    #[error("{requested} bodies requested but capacity is {capacity}")]
    TooManyBodies { requested: usize, capacity: usize },

    #[error("scenario defines no bodies")]
    NoBodies,
}

/// Which optional tick phases run for this scenario. Astronomical scenarios
/// disable both.
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub bounce: bool, // reflect bodies off the view walls
    pub fusion: bool, // merge bodies closer than the fusion threshold
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,   // time end
    pub dt: f64,      // time step size
    pub g: f64,       // gravitational constant
    pub cor: f64,     // wall restitution coefficient
    #[serde(default = "default_merge_dist")]
    pub merge_dist: f64, // fusion distance threshold
    pub width: u16,   // view width in cells
    pub height: u16,  // view height in cells
    #[serde(default)]
    pub seed: u64,    // seed for random body generation
}

fn default_merge_dist() -> f64 {
    2.0
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position `(x, y)` in simulation units
    pub v: [f64; 2], // initial velocity `(vx, vy)` in simulation units per time unit
    pub m: f64,      // mass of the body
}

/// On-disk dataset field layout
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    #[serde(rename = "cartesian")] // mass x y vx vy per line
    Cartesian,

    #[serde(rename = "heliocentric")] // mass longitude[deg] radius[au] motion[deg/day] per line
    Heliocentric,
}

/// A whitespace-separated initial-condition file. `#`-prefixed lines are
/// comments. For the cartesian format, a `count` larger than the file's body
/// lines fills the shortfall with seeded random bodies.
#[derive(Deserialize, Debug, Clone)]
pub struct DatasetConfig {
    pub file: String, // path relative to the manifest directory
    pub format: DatasetFormat,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Built-in body configurations that need no file
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum PresetConfig {
    #[serde(rename = "moon")] // Sun, Earth and Moon on circular orbits
    Moon,
}

/// Astronomical display scaling
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub scale: f64, // au per character cell row
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level phase toggles
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // inline initial body list
    #[serde(default)]
    pub dataset: Option<DatasetConfig>, // file-based body source, wins over `bodies`
    #[serde(default)]
    pub preset: Option<PresetConfig>, // programmatic body source, wins over both
    #[serde(default)]
    pub display: Option<DisplayConfig>, // astronomical display scaling
}

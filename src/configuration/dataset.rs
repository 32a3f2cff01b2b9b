//! Initial-condition sources: dataset files and built-in presets.
//!
//! Dataset files are whitespace-separated numeric fields, one body per line,
//! with `#`-prefixed lines treated as comments. Two field layouts exist:
//!
//! - cartesian: `mass x y vx vy` — sandbox units; a requested count larger
//!   than the file is filled with seeded random bodies
//! - heliocentric: `mass longitude[deg] radius[au] motion[deg/day]` —
//!   converted to Cartesian meters before entering the body model

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ConfigError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Astronomical unit in meters.
pub const AU: f64 = 1.495_978_707e11;
/// Mean Earth–Moon distance in meters.
pub const EARTH_TO_MOON: f64 = 3.844e8;
/// Simulation seconds per dataset day.
pub const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

const SUN_MASS: f64 = 1.9885e30;
const EARTH_MASS: f64 = 5.972e24;
const MOON_MASS: f64 = 7.346e22;

/// Load a `mass x y vx vy` dataset, topping up to `count` bodies with
/// seeded random ones when the file is shorter than requested.
pub fn load_cartesian(
    path: &Path,
    count: Option<usize>,
    params: &Parameters,
) -> Result<Vec<Body>, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_cartesian(BufReader::new(file), count, params)
}

pub fn parse_cartesian<R: BufRead>(
    reader: R,
    count: Option<usize>,
    params: &Parameters,
) -> Result<Vec<Body>, ConfigError> {
    let mut bodies = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        if count.is_some_and(|limit| bodies.len() >= limit) {
            break;
        }
        let [m, x, y, vx, vy] =
            parse_fields(text).ok_or_else(|| ConfigError::MalformedLine {
                line: idx + 1,
                content: text.to_string(),
            })?;
        bodies.push(Body::new(m, NVec2::new(x, y), NVec2::new(vx, vy)));
    }

    // Fill the shortfall with uniform random bodies over the view rectangle
    if let Some(limit) = count {
        let mut rng = StdRng::seed_from_u64(params.seed);
        while bodies.len() < limit {
            bodies.push(random_body(&mut rng, params));
        }
    }

    Ok(bodies)
}

fn random_body(rng: &mut StdRng, params: &Parameters) -> Body {
    let hw = params.half_width();
    let hh = params.half_height();
    let m = rng.gen_range(40.0..80.0);
    let x = NVec2::new(rng.gen_range(-hw..hw), rng.gen_range(-hh..hh));
    let v = NVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
    Body::new(m, x, v)
}

/// Load a heliocentric dataset. All body lines in the file are taken; there
/// is no random fill for this format.
pub fn load_heliocentric(path: &Path) -> Result<Vec<Body>, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_heliocentric(BufReader::new(file))
}

pub fn parse_heliocentric<R: BufRead>(reader: R) -> Result<Vec<Body>, ConfigError> {
    let mut bodies = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let [m, longitude_deg, radius_au, daily_deg] =
            parse_fields(text).ok_or_else(|| ConfigError::MalformedLine {
                line: idx + 1,
                content: text.to_string(),
            })?;
        bodies.push(heliocentric_body(m, longitude_deg, radius_au, daily_deg));
    }

    Ok(bodies)
}

/// Convert heliocentric polar coordinates to the Cartesian body model.
/// Screen y grows downward, hence the sign flips on the y components.
pub fn heliocentric_body(m: f64, longitude_deg: f64, radius_au: f64, daily_deg: f64) -> Body {
    let dist = radius_au * AU; // m
    let rad = longitude_deg.to_radians();
    let vrad = daily_deg.to_radians(); // rad/day

    let x = NVec2::new(dist * rad.cos(), dist * -rad.sin());
    let v = NVec2::new(
        dist * vrad * -rad.sin() / SECONDS_PER_DAY,
        dist * vrad * -rad.cos() / SECONDS_PER_DAY,
    );
    Body::new(m, x, v)
}

/// Sun, Earth and Moon on circular orbits, in SI units.
pub fn moon_preset(g: f64) -> Vec<Body> {
    let earth_speed = (g * SUN_MASS / AU).sqrt();
    let moon_speed = (g * EARTH_MASS / EARTH_TO_MOON).sqrt();

    vec![
        Body::new(SUN_MASS, NVec2::zeros(), NVec2::zeros()),
        Body::new(
            EARTH_MASS,
            NVec2::new(AU, 0.0),
            NVec2::new(0.0, -earth_speed),
        ),
        Body::new(
            MOON_MASS,
            NVec2::new(AU + EARTH_TO_MOON, 0.0),
            NVec2::new(0.0, -earth_speed - moon_speed),
        ),
    ]
}

/// Split the leading `N` whitespace-separated floats out of a dataset line.
/// Extra trailing fields are ignored.
fn parse_fields<const N: usize>(text: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    let mut fields = text.split_whitespace();
    for slot in out.iter_mut() {
        *slot = fields.next()?.parse().ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_params() -> Parameters {
        Parameters {
            t_end: 400.0,
            dt: 0.1,
            g: 1.0,
            cor: 0.8,
            merge_dist: 2.0,
            width: 75,
            height: 40,
            seed: 42,
        }
    }

    #[test]
    fn cartesian_lines_and_comments() {
        let data = "\
# mass x y vx vy
60.0 -30.0 -19.9 12.0 7.0

60.0 30.0 -19.9 6.0 4.0
";
        let bodies = parse_cartesian(Cursor::new(data), None, &test_params()).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].m, 60.0);
        assert_eq!(bodies[0].x, NVec2::new(-30.0, -19.9));
        assert_eq!(bodies[0].v, NVec2::new(12.0, 7.0));
        assert_eq!(bodies[0].prev_x, bodies[0].x);
    }

    #[test]
    fn cartesian_count_truncates() {
        let data = "1.0 0.0 0.0 0.0 0.0\n2.0 1.0 1.0 0.0 0.0\n3.0 2.0 2.0 0.0 0.0\n";
        let bodies = parse_cartesian(Cursor::new(data), Some(2), &test_params()).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[1].m, 2.0);
    }

    #[test]
    fn cartesian_shortfall_is_random_filled() {
        let params = test_params();
        let data = "60.0 0.0 0.0 0.0 0.0\n";
        let bodies = parse_cartesian(Cursor::new(data), Some(4), &params).unwrap();
        assert_eq!(bodies.len(), 4);
        for b in &bodies[1..] {
            assert!((40.0..80.0).contains(&b.m));
            assert!(b.x.x.abs() <= params.half_width());
            assert!(b.x.y.abs() <= params.half_height());
            assert!(b.v.x.abs() <= 10.0 && b.v.y.abs() <= 10.0);
        }

        // Same seed, same fill
        let again = parse_cartesian(Cursor::new(data), Some(4), &params).unwrap();
        assert_eq!(bodies[3].x, again[3].x);
        assert_eq!(bodies[3].v, again[3].v);
    }

    #[test]
    fn cartesian_rejects_malformed_line() {
        let data = "60.0 -30.0 bogus 12.0 7.0\n";
        let err = parse_cartesian(Cursor::new(data), None, &test_params()).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn heliocentric_conversion_follows_axis_convention() {
        // A body at longitude 90 deg sits on the negative y axis (screen y
        // grows downward) and moves along -x for prograde motion.
        let b = heliocentric_body(5.972e24, 90.0, 1.0, 1.0);
        assert!(b.x.x.abs() < 1e-4);
        assert!((b.x.y + AU).abs() < 1e-4);

        let omega = 1.0_f64.to_radians();
        assert!((b.v.x + AU * omega / SECONDS_PER_DAY).abs() < 1e-9);
        assert!(b.v.y.abs() < 1e-9);
    }

    #[test]
    fn moon_preset_shape() {
        let g = 6.6743e-11;
        let bodies = moon_preset(g);
        assert_eq!(bodies.len(), 3);

        let (sun, earth, moon) = (&bodies[0], &bodies[1], &bodies[2]);
        assert!(sun.m > earth.m && earth.m > moon.m);
        assert_eq!(earth.x, NVec2::new(AU, 0.0));
        assert!((moon.x.x - earth.x.x - EARTH_TO_MOON).abs() < 1.0);

        // Earth orbital speed is close to the familiar ~29.8 km/s
        assert!((earth.v.norm() - 29.8e3).abs() < 0.5e3);
        // Moon moves with Earth plus its own orbital speed
        assert!(moon.v.norm() > earth.v.norm());
    }
}

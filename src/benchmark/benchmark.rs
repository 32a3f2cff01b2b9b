//! Manual throughput probes for the hot phases.
//!
//! Not wired into any test harness; run with `--bench` and read the timings.

use std::time::Instant;

use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::fusion::fuse_bodies;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

fn bench_params() -> Parameters {
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

/// Deterministic scatter over the view, no rand needed
fn scatter_system(n: usize, spread: f64) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * spread, (i_f * 0.13).cos() * spread);
        bodies.push(Body::new(1.0, x, NVec2::zeros()));
    }

    System {
        bodies,
        t: 0.0,
    }
}

pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let sys = scatter_system(n, 30.0);
        let gravity = NewtonianGravity { g: bench_params().g };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_pass = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt_pass:9.6} s");
    }
}

pub fn bench_fusion() {
    let params = bench_params();
    let ns = [25, 50, 100];

    for n in ns {
        // Tight scatter so a good share of pairs sits under the threshold
        let sys = scatter_system(n, 4.0);

        let mut scratch = sys.clone();
        let t0 = Instant::now();
        let merged = fuse_bodies(&mut scratch, &params);
        let dt_pass = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, fusion pass = {dt_pass:9.6} s, merged = {merged:3}, left = {:3}",
            scratch.len()
        );
    }
}

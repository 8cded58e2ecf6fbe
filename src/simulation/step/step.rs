use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::error::{PhysicsError, Result};
use crate::systems::collision::{aabb_vs_aabb, resolve_pair, Resolution};
use crate::systems::rigid_body::{check_delta_time, Body, IntegrationParams};

use super::{PerfTimer, WorldCore};

/// Below this many bodies the rayon fan-out costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_BODIES: usize = 256;

/// Counters for one completed step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub bodies_integrated: u32,
    /// Pairs considered (static/static pairs are skipped)
    pub pairs_tested: u32,
    /// Pairs whose cached bounds overlapped
    pub broad_overlaps: u32,
    /// Box pairs pushed apart
    pub separated: u32,
    /// Circle/circle and box/circle pairs stopped
    pub stopped: u32,
}

pub(super) fn step(world: &mut WorldCore, dt: f32) -> Result<StepReport> {
    world.validity().into_result()?;
    let dt = check_delta_time(dt)?;

    let settings = &world.settings;
    if settings.enforce_guards && (dt < settings.min_delta_time || dt > settings.max_delta_time) {
        return Err(PhysicsError::InvalidValue);
    }
    let params = IntegrationParams::from_settings(settings, world.gravity);

    let perf_on = world.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // === PHASE 1: INTEGRATION (slot order) ===
    integrate_all(&mut world.bodies, dt, &params);
    let integrate_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    // === PHASE 2: ALL-PAIRS COLLISION ===
    let mut report = collide_pairs(&mut world.bodies);
    report.bodies_integrated = world.bodies.len() as u32;
    let collision_ms = timer.as_mut().map_or(0.0, |t| t.lap_ms());

    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.integrate_ms = integrate_ms;
        stats.collision_ms = collision_ms;
        stats.step_ms = integrate_ms + collision_ms;
        stats.bodies_integrated = report.bodies_integrated;
        stats.pairs_tested = report.pairs_tested;
        stats.broad_overlaps = report.broad_overlaps;
        stats.separated = report.separated;
        stats.stopped = report.stopped;
        stats.body_count = world.bodies.len() as u32;
        stats.capacity = world.settings.capacity as u32;
    }

    Ok(report)
}

fn integrate_all(bodies: &mut [Body], dt: f32, params: &IntegrationParams) {
    // Bodies are independent during integration.
    #[cfg(feature = "parallel")]
    {
        if bodies.len() >= PARALLEL_MIN_BODIES {
            bodies.par_iter_mut().for_each(|body| body.advance(dt, params));
            return;
        }
    }

    for body in bodies.iter_mut() {
        body.advance(dt, params);
    }
}

/// One pass over every pair (i < j). Resolving a pair can move bounds that a
/// later pair in the same pass reads; there is no iteration to a fixed point.
fn collide_pairs(bodies: &mut [Body]) -> StepReport {
    let mut report = StepReport::default();
    let n = bodies.len();

    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if !a.is_dynamic() && !b.is_dynamic() {
                continue;
            }
            report.pairs_tested += 1;

            if !aabb_vs_aabb(a.bounds(), b.bounds()) {
                continue;
            }
            report.broad_overlaps += 1;

            match resolve_pair(a, b) {
                Resolution::Separated(_) => report.separated += 1,
                Resolution::Stopped => report.stopped += 1,
                Resolution::Clear => {}
            }
        }
    }

    report
}

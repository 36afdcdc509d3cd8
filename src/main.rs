//! Demo front end: visualizes generations of brains learning to drive.
//!
//! Pass a track image path as the first argument to race on it; without one
//! a procedural ring circuit is generated. The evolution step here is the
//! external collaborator of the simulation core: it only reads the fitness
//! slice and produces the next population of controllers.

use evodrive::simulation::brain::Brain;
use evodrive::simulation::evaluation::{Generation, GenerationStatus};
use evodrive::simulation::params::Params;
use evodrive::simulation::summary::GenerationSummary;
use evodrive::simulation::track::TrackMap;
use log::{error, info};
use macroquad::prelude::*;
// The macroquad prelude bundles its own `rand` module; reach the rand crate
// explicitly so the two never collide.
use ::rand::Rng;

mod graphics;

const POPULATION_SIZE: usize = 30;
const HIDDEN_SIZE: usize = 8;
const WEIGHT_SCALE: f32 = 1.0;

/// Ring circuit through the spawn point, used when no track asset is given.
fn ring_track(params: &Params) -> TrackMap {
    let cx = params.bounds_width / 2.0;
    let cy = params.bounds_height / 2.0;
    let inner = 320.0;
    let outer = 520.0;

    TrackMap::from_fn(
        params.bounds_width as usize,
        params.bounds_height as usize,
        |x, y| {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let radius = (dx * dx + dy * dy).sqrt();
            radius < inner || radius > outer
        },
    )
}

/// Loads the track named on the command line, or generates the ring.
async fn load_track(params: &Params) -> Result<TrackMap, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let image = load_image(&path)
                .await
                .map_err(|e| format!("failed to load track image {path}: {e}"))?;
            TrackMap::from_rgba(
                &image.bytes,
                image.width as usize,
                image.height as usize,
                params.boundary_color,
            )
        }
        None => Ok(ring_track(params)),
    }
}

/// Truncation selection with crossover and mutation over the brain
/// population. Elites survive unchanged; the rest are bred from them.
fn evolve(population: &[Brain], fitness: &[f32]) -> Vec<Brain> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let elite = (population.len() / 5).max(2).min(population.len());
    let mut next = Vec::with_capacity(population.len());

    for rank in 0..population.len() {
        if rank < elite {
            next.push(population[ranked[rank]].clone());
            continue;
        }

        let parent_a = &population[ranked[::rand::rng().random_range(0..elite)]];
        let parent_b = &population[ranked[::rand::rng().random_range(0..elite)]];
        let mut child = Brain::crossover(parent_a, parent_b);

        // Log-uniform mutation scale: mostly small tweaks, occasional jumps.
        let log_scale = ::rand::rng().random_range((0.002_f32).ln()..(0.4_f32).ln());
        child.mutate(log_scale.exp());
        next.push(child);
    }
    next
}

#[macroquad::main("Evodrive")]
async fn main() {
    env_logger::init();

    let params = Params::default();
    let map = match load_track(&params).await {
        Ok(map) => map,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    let track_texture = graphics::track_texture(&map);

    let layer_sizes = [params.sensor_angles.len(), HIDDEN_SIZE, 4];
    let mut population: Vec<Brain> = (0..POPULATION_SIZE)
        .map(|_| Brain::new(&layer_sizes, WEIGHT_SCALE))
        .collect();

    let mut generation_index = 0;
    let mut generation = Generation::new(generation_index, POPULATION_SIZE, &params);

    loop {
        if is_key_down(KeyCode::Escape) {
            break;
        }

        if generation.step(&population, &map, &params) == GenerationStatus::Terminated {
            let summary = GenerationSummary::capture(&generation);
            info!(
                "generation {} finished: best fitness {:.1}, mean {:.1}, {} ticks",
                summary.generation, summary.best_fitness, summary.mean_fitness, summary.ticks
            );

            population = evolve(&population, generation.fitness());
            generation_index += 1;
            generation = Generation::new(generation_index, POPULATION_SIZE, &params);
        }

        clear_background(DARKGRAY);
        graphics::draw_track(&track_texture);
        graphics::draw_vehicles(&generation, &params);
        graphics::draw_hud(&generation, &params);

        next_frame().await;
    }
}

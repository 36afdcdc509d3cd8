//! Persistence of per-generation results.

use serde::{Deserialize, Serialize};

use super::evaluation::Generation;

/// Outcome of one evaluated generation.
///
/// The external evolutionary algorithm consumes fitness directly from
/// [`Generation::fitness`]; this summary is the durable record written
/// between generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Generation index the evaluation loop was created with.
    pub generation: u32,
    /// Ticks the generation lasted.
    pub ticks: u32,
    /// Vehicles still alive when the loop terminated.
    pub alive_at_end: usize,
    /// Best fitness across the population.
    pub best_fitness: f32,
    /// Mean fitness across the population.
    pub mean_fitness: f32,
    /// RFC 3339 timestamp of when the summary was captured.
    pub timestamp: String,
}

impl GenerationSummary {
    /// Captures a summary of a generation's current state.
    pub fn capture(generation: &Generation) -> Self {
        let fitness = generation.fitness();
        let (best, mean) = if fitness.is_empty() {
            (0.0, 0.0)
        } else {
            let best = fitness.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let mean = fitness.iter().sum::<f32>() / fitness.len() as f32;
            (best, mean)
        };

        Self {
            generation: generation.index(),
            ticks: generation.tick(),
            alive_at_end: generation.alive_count(),
            best_fitness: best,
            mean_fitness: mean,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Saves the summary to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a summary from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let summary = serde_json::from_str(&json)?;
        Ok(summary)
    }
}

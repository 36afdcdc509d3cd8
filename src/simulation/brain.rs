//! Feed-forward controller brains.
//!
//! The evaluation loop only ever sees the [`Controller`] trait; this module
//! is one concrete variant an evolutionary host can mutate and cross over,
//! used by the demo binary and the tests.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::controller::Controller;

/// One dense tanh layer of a controller brain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Connection weights, one row per output neuron.
    pub weights: Array2<f32>,
    /// Per-neuron bias terms.
    pub biases: Array1<f32>,
}

impl Layer {
    /// Random layer with weights and biases drawn from `[-scale, scale)`.
    pub fn new_random(input_size: usize, output_size: usize, scale: f32) -> Self {
        Self {
            weights: Array2::random((output_size, input_size), Uniform::new(-scale, scale)),
            biases: Array1::random(output_size, Uniform::new(-scale, scale)),
        }
    }

    /// Activates the layer for one input vector.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        (self.weights.dot(inputs) + &self.biases).mapv(f32::tanh)
    }

    /// Jitters every weight and bias by uniform noise in
    /// `[-mutation_scale, mutation_scale)`.
    pub fn mutate(&mut self, mutation_scale: f32) {
        let noise = Uniform::new(-mutation_scale, mutation_scale);
        self.weights += &Array2::random(self.weights.dim(), noise);
        self.biases += &Array1::random(self.biases.len(), noise);
    }

    /// Blends two parent layers into a child at the element-wise midpoint.
    pub fn crossover(parent1: &Layer, parent2: &Layer) -> Self {
        Self {
            weights: (&parent1.weights + &parent2.weights) / 2.0,
            biases: (&parent1.biases + &parent2.biases) / 2.0,
        }
    }
}

/// A stack of dense layers driving one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    /// Ordered layers from observation to action scores.
    pub layers: Vec<Layer>,
}

impl Brain {
    /// Creates a brain with random weights for the given layer sizes.
    ///
    /// The first size must match the observation length and the last must
    /// cover the four action indices.
    pub fn new(layer_sizes: &[usize], scale: f32) -> Self {
        let layers = (0..layer_sizes.len() - 1)
            .map(|i| Layer::new_random(layer_sizes[i], layer_sizes[i + 1], scale))
            .collect();
        Self { layers }
    }

    /// Runs a forward pass through all layers.
    #[inline]
    pub fn think(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = inputs.clone();
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        output
    }

    /// Mutates every layer by adding random noise.
    pub fn mutate(&mut self, mutation_scale: f32) {
        for layer in &mut self.layers {
            layer.mutate(mutation_scale);
        }
    }

    /// Creates a brain by averaging two parents layer by layer.
    pub fn crossover(parent1: &Brain, parent2: &Brain) -> Self {
        let layers = parent1
            .layers
            .iter()
            .zip(&parent2.layers)
            .map(|(layer1, layer2)| Layer::crossover(layer1, layer2))
            .collect();
        Self { layers }
    }
}

impl Controller for Brain {
    fn evaluate(&self, observation: &Array1<f32>) -> Array1<f32> {
        self.think(observation)
    }
}

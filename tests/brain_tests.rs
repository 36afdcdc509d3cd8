#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evodrive::simulation::brain::Brain;
use evodrive::simulation::controller::Controller;
use ndarray::{Array1, Array2};

#[test]
fn brain_output_matches_the_action_arity() {
    let brain = Brain::new(&[5, 8, 4], 0.5);
    let observation = Array1::zeros(5);

    let outputs = brain.evaluate(&observation);

    assert_eq!(outputs.len(), 4);
    // tanh keeps every activation in (-1, 1).
    for value in &outputs {
        assert!(value.abs() <= 1.0);
    }
}

#[test]
fn layer_shapes_follow_the_layer_sizes() {
    let brain = Brain::new(&[5, 8, 4], 0.1);

    assert_eq!(brain.layers.len(), 2);
    assert_eq!(brain.layers[0].weights.dim(), (8, 5));
    assert_eq!(brain.layers[0].biases.len(), 8);
    assert_eq!(brain.layers[1].weights.dim(), (4, 8));
    assert_eq!(brain.layers[1].biases.len(), 4);
}

#[test]
fn crossover_averages_parent_weights() {
    let mut parent1 = Brain::new(&[2, 3], 0.1);
    let mut parent2 = Brain::new(&[2, 3], 0.1);
    parent1.layers[0].weights = Array2::from_elem((3, 2), 1.0);
    parent1.layers[0].biases = Array1::from_elem(3, 0.0);
    parent2.layers[0].weights = Array2::from_elem((3, 2), 3.0);
    parent2.layers[0].biases = Array1::from_elem(3, 2.0);

    let child = Brain::crossover(&parent1, &parent2);

    assert!(child.layers[0].weights.iter().all(|&w| w == 2.0));
    assert!(child.layers[0].biases.iter().all(|&b| b == 1.0));
}

#[test]
fn mutation_perturbs_the_weights() {
    let mut brain = Brain::new(&[4, 4], 0.1);
    let before = brain.clone();

    brain.mutate(0.5);

    let changed = brain.layers[0]
        .weights
        .iter()
        .zip(before.layers[0].weights.iter())
        .any(|(a, b)| a != b);
    assert!(changed);
}

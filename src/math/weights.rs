use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// The connection weights between two layers of neurons, stored as a dense
/// `(from + 1) × to` matrix. The extra row at the end holds the bias for each
/// neuron in the to-layer; it can be thought of as an invisible bias neuron
/// at the end of the from-layer which always outputs 1, so the biases are the
/// weights of its connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    data: Vec<Vec<f64>>,
}

impl Weights {
    /// A zero-initialised weight matrix between a from-layer of `from_size`
    /// neurons and a to-layer of `to_size` neurons.
    pub fn zeros(from_size: usize, to_size: usize) -> Weights {
        Weights {
            data: vec![vec![0.0; to_size]; from_size + 1],
        }
    }

    /// Builds a weight store from an existing matrix, as produced by a
    /// serializer or written out by hand. The matrix must have one more row
    /// than the from-layer has neurons (the bias row) and be rectangular.
    pub fn from_matrix(data: Vec<Vec<f64>>) -> Result<Weights> {
        if data.is_empty() {
            return Err(Error::ShapeMismatch {
                context: "weight matrix rows",
                expected: 1,
                actual: 0,
            });
        }

        let cols = data[0].len();
        for row in &data {
            if row.len() != cols {
                return Err(Error::ShapeMismatch {
                    context: "weight matrix row",
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        Ok(Weights { data })
    }

    /// The number of neurons in the from-layer (the bias row excluded).
    pub fn from_size(&self) -> usize {
        self.data.len() - 1
    }

    /// The number of neurons in the to-layer.
    pub fn to_size(&self) -> usize {
        self.data[0].len()
    }

    /// The weight between the `from`th neuron of the from-layer and the
    /// `to`th neuron of the to-layer. `from == from_size()` addresses the
    /// bias row.
    pub fn weight(&self, from: usize, to: usize) -> Result<f64> {
        self.check_indices(from, to)?;
        Ok(self.data[from][to])
    }

    pub fn set_weight(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        self.check_indices(from, to)?;
        self.data[from][to] = weight;
        Ok(())
    }

    /// Adds `delta` onto the weight between the `from`th and `to`th neurons.
    pub fn adjust_weight(&mut self, from: usize, to: usize, delta: f64) -> Result<()> {
        self.check_indices(from, to)?;
        self.data[from][to] += delta;
        Ok(())
    }

    /// The bias fed to the `to`th neuron of the to-layer.
    pub fn bias(&self, to: usize) -> Result<f64> {
        self.check_to_index(to)?;
        Ok(self.data[self.from_size()][to])
    }

    pub fn set_bias(&mut self, to: usize, bias: f64) -> Result<()> {
        self.check_to_index(to)?;
        let bias_row = self.from_size();
        self.data[bias_row][to] = bias;
        Ok(())
    }

    /// Sets every weight and bias to a value drawn independently and
    /// uniformly from `[-|amplitude|, |amplitude|)`.
    pub fn randomize(&mut self, amplitude: f64) {
        let mut rng = rand::thread_rng();
        let amplitude = amplitude.abs();

        for row in &mut self.data {
            for weight in row {
                *weight = amplitude * (2.0 * rng.gen::<f64>() - 1.0);
            }
        }
    }

    /// A row-major view of the matrix, bias row last. This is what an
    /// external serializer should persist.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    fn check_indices(&self, from: usize, to: usize) -> Result<()> {
        // The bias row is addressable through the weight accessors, so the
        // `from` limit is inclusive of it.
        if from >= self.data.len() {
            return Err(Error::IndexOutOfRange {
                context: "weights from-neuron",
                index: from,
                limit: self.data.len(),
            });
        }

        self.check_to_index(to)
    }

    fn check_to_index(&self, to: usize) -> Result<()> {
        if to >= self.to_size() {
            return Err(Error::IndexOutOfRange {
                context: "weights to-neuron",
                index: to,
                limit: self.to_size(),
            });
        }

        Ok(())
    }
}

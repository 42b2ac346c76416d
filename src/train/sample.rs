use serde::{Serialize, Deserialize};

/// One input/expected-output pair to train or evaluate a network on, with
/// the error metrics derived from an actual output the network produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    input: Vec<f64>,
    expected_output: Vec<f64>,
}

impl TrainingSample {
    pub fn new(input: Vec<f64>, expected_output: Vec<f64>) -> TrainingSample {
        TrainingSample {
            input,
            expected_output,
        }
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn expected_output(&self) -> &[f64] {
        &self.expected_output
    }

    /// The sum squared error of each output value against its expectation:
    /// `0.5 · (expected − actual)²`.
    pub fn sum_squared_error(&self, actual_output: &[f64]) -> Vec<f64> {
        self.expected_output
            .iter()
            .zip(actual_output)
            .map(|(expected, actual)| 0.5 * (expected - actual).powi(2))
            .collect()
    }

    /// The total of the per-output sum squared errors.
    pub fn total_sum_squared_error(&self, actual_output: &[f64]) -> f64 {
        self.sum_squared_error(actual_output).iter().sum()
    }

    /// The cross-entropy error of each output value against its expectation:
    /// `−expected · ln(actual)`.
    pub fn cross_entropy_error(&self, actual_output: &[f64]) -> Vec<f64> {
        self.expected_output
            .iter()
            .zip(actual_output)
            .map(|(expected, actual)| -(expected * actual.ln()))
            .collect()
    }

    /// The total of the per-output cross-entropy errors.
    pub fn total_cross_entropy_error(&self, actual_output: &[f64]) -> f64 {
        self.cross_entropy_error(actual_output).iter().sum()
    }

    /// The element-wise difference `expected − actual`.
    pub fn difference(&self, actual_output: &[f64]) -> Vec<f64> {
        self.expected_output
            .iter()
            .zip(actual_output)
            .map(|(expected, actual)| expected - actual)
            .collect()
    }
}

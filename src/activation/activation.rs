use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// The activation function applied by a layer. A closed set of variants so
/// that serializers and match arms stay exhaustive when one is added.
///
/// `Softmax` is vector-valued, which is why both `activate()` and
/// `derivative()` work on whole vectors rather than element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Passes net inputs through unchanged.
    #[serde(rename = "linear")]
    Identity,
    #[serde(rename = "sigmoid")]
    Sigmoid,
    #[serde(rename = "softmax")]
    Softmax,
    /// Outputs 1 for a net input greater than 0, otherwise 0.
    #[serde(rename = "step")]
    Step,
}

impl Activation {
    /// Transforms a layer's net inputs into its outputs.
    pub fn activate(&self, net_inputs: &[f64]) -> Vec<f64> {
        match self {
            Activation::Identity => net_inputs.to_vec(),
            Activation::Sigmoid => net_inputs
                .iter()
                .map(|x| 1.0 / (1.0 + E.powf(-x)))
                .collect(),
            Activation::Softmax => {
                let exponentials: Vec<f64> = net_inputs.iter().map(|x| E.powf(*x)).collect();
                let sum: f64 = exponentials.iter().sum();
                exponentials.iter().map(|e| e / sum).collect()
            }
            Activation::Step => net_inputs
                .iter()
                .map(|x| if *x > 0.0 { 1.0 } else { 0.0 })
                .collect(),
        }
    }

    /// The derivative of the activation, evaluated at the outputs it most
    /// recently produced (not at the net inputs).
    pub fn derivative(&self, outputs: &[f64]) -> Vec<f64> {
        match self {
            Activation::Identity | Activation::Step => vec![1.0; outputs.len()],
            Activation::Sigmoid | Activation::Softmax => {
                outputs.iter().map(|y| y * (1.0 - y)).collect()
            }
        }
    }

    /// The stable name a serializer should use for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "linear",
            Activation::Sigmoid => "sigmoid",
            Activation::Softmax => "softmax",
            Activation::Step => "step",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_passes_inputs_through() {
        let outputs = Activation::Identity.activate(&[-1.5, 0.0, 2.0]);
        assert_eq!(outputs, vec![-1.5, 0.0, 2.0]);
        assert_eq!(Activation::Identity.derivative(&outputs), vec![1.0; 3]);
    }

    #[test]
    fn sigmoid_squashes_and_differentiates_from_output() {
        let outputs = Activation::Sigmoid.activate(&[0.0, 1.0]);
        assert_relative_eq!(outputs[0], 0.5);
        assert_relative_eq!(outputs[1], 0.7310585786300049, max_relative = 1e-12);

        let derivatives = Activation::Sigmoid.derivative(&outputs);
        assert_relative_eq!(derivatives[0], 0.25);
        assert_relative_eq!(derivatives[1], outputs[1] * (1.0 - outputs[1]));
    }

    #[test]
    fn softmax_outputs_form_a_distribution() {
        let outputs = Activation::Softmax.activate(&[1.0, 2.0, 3.0]);
        assert_relative_eq!(outputs.iter().sum::<f64>(), 1.0, max_relative = 1e-12);
        assert!(outputs[2] > outputs[1] && outputs[1] > outputs[0]);
    }

    #[test]
    fn step_thresholds_at_zero() {
        let outputs = Activation::Step.activate(&[-0.1, 0.0, 0.1]);
        assert_eq!(outputs, vec![0.0, 0.0, 1.0]);
        assert_eq!(Activation::Step.derivative(&outputs), vec![1.0; 3]);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Activation::Identity.name(), "linear");
        assert_eq!(Activation::Sigmoid.name(), "sigmoid");
        assert_eq!(Activation::Softmax.name(), "softmax");
        assert_eq!(Activation::Step.name(), "step");
    }
}

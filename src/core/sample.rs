use crate::config::scaler::Scaler;
use crate::domain::model::FeatureVector;
use rand::Rng;

/// Synthesize one plausible input row for manual runs without an argument:
/// each feature is its stored mean plus a uniform offset of at most half of
/// that feature's scale (half of 1 where the scale is 0).
pub fn sample_near_mean(scaler: &Scaler) -> FeatureVector {
    let mut rng = rand::rng();
    let values = (0..scaler.len())
        .map(|i| {
            let bound = if scaler.scale[i] == 0.0 {
                1.0
            } else {
                scaler.scale[i]
            };
            scaler.mean[i] + rng.random_range(-0.5..0.5) * bound
        })
        .collect();
    FeatureVector::new(values)
}

use serde::{Deserialize, Serialize};

/// Subset of a Mapbox places response that the form cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub place_name: String,
    /// `[lng, lat]`.
    pub center: [f64; 2],
}

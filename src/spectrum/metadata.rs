use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::noise::VarianceLinearModel;
use super::SpectrumError;

/// Kind of luminescence measurement a spectrum came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    /// Generic luminescence
    #[default]
    Luminescence,
    /// Cathodoluminescence
    Cathodoluminescence,
    /// Cathodoluminescence acquired in an SEM
    CathodoluminescenceSem,
    /// Cathodoluminescence acquired in a STEM
    CathodoluminescenceStem,
    /// Photoluminescence
    Photoluminescence,
    /// Electroluminescence
    Electroluminescence,
    /// Time-resolved luminescence
    LuminescenceTransient,
}

/// Descriptive metadata carried alongside the spectral data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectrumMetadata {
    /// Free-form title
    #[serde(default)]
    pub title: String,

    /// Measurement technique
    #[serde(default)]
    pub signal_type: SignalType,

    /// Excitation laser wavelength, in the unit of the signal axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laser_wavelength: Option<f64>,

    /// Linear noise model used to estimate variance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_linear_model: Option<VarianceLinearModel>,

    /// Pixels removed from the navigation edges so far
    /// (`[left, right]` for line scans, `[left, bottom, right, top]` for maps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cropped_edges: Option<Vec<usize>>,

    /// Operations applied to the data
    #[serde(default)]
    pub processing: ProcessingHistory,
}

impl SpectrumMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SpectrumError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, SpectrumError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Ordered record of operations applied to a spectrum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingHistory {
    /// List of processing steps applied
    pub steps: Vec<ProcessingStep>,
}

/// A single processing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStep {
    /// Step order (1-indexed)
    pub order: usize,

    /// Operation name (e.g. "to_energy", "join_spectra", "crop_edges")
    pub operation: String,

    /// Operation parameters
    pub parameters: BTreeMap<String, String>,
}

impl ProcessingHistory {
    /// Create a new empty processing history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, numbering it after the existing ones
    pub fn record<I, K, V>(&mut self, operation: &str, parameters: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let parameters = parameters
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        self.steps.push(ProcessingStep {
            order: self.steps.len() + 1,
            operation: operation.to_string(),
            parameters,
        });
    }

    /// Most recent step, if any
    pub fn last(&self) -> Option<&ProcessingStep> {
        self.steps.last()
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

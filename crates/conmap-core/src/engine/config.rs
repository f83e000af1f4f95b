use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value} for alignment parameter '{name}': {reason}")]
    InvalidAlignmentParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid distance cutoff {value}: must be finite and positive")]
    InvalidDistanceCutoff { value: f64 },

    #[error("Bandwidth method not yet implemented: {name}")]
    UnsupportedBandwidthMethod { name: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Scoring parameters for local pairwise sequence alignment.
///
/// `id_chars` is the score added when two identical characters align and
/// `nonid_chars` when two different ones do; the affine gap model charges
/// `gap_open_pen` for the first gapped column of a run and `gap_ext_pen` for
/// every further one. Both gap penalties must be non-positive. The defaults
/// are the ones the matcher has always used for registering a prediction
/// onto a structure.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignmentParams {
    pub id_chars: f64,
    pub nonid_chars: f64,
    pub gap_open_pen: f64,
    pub gap_ext_pen: f64,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            id_chars: 2.0,
            nonid_chars: 1.0,
            gap_open_pen: -0.5,
            gap_ext_pen: -0.1,
        }
    }
}

impl AlignmentParams {
    /// Creates a validated set of alignment parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAlignmentParameter` if any value is not
    /// finite, if `id_chars` is not positive, or if either gap penalty is
    /// positive.
    pub fn new(
        id_chars: f64,
        nonid_chars: f64,
        gap_open_pen: f64,
        gap_ext_pen: f64,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            id_chars,
            nonid_chars,
            gap_open_pen,
            gap_ext_pen,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("id_chars", self.id_chars),
            ("nonid_chars", self.nonid_chars),
            ("gap_open_pen", self.gap_open_pen),
            ("gap_ext_pen", self.gap_ext_pen),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::InvalidAlignmentParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if self.id_chars <= 0.0 {
            return Err(ConfigError::InvalidAlignmentParameter {
                name: "id_chars",
                value: self.id_chars,
                reason: "match reward must be positive",
            });
        }
        if self.gap_open_pen > 0.0 {
            return Err(ConfigError::InvalidAlignmentParameter {
                name: "gap_open_pen",
                value: self.gap_open_pen,
                reason: "gap penalties must be non-positive",
            });
        }
        if self.gap_ext_pen > 0.0 {
            return Err(ConfigError::InvalidAlignmentParameter {
                name: "gap_ext_pen",
                value: self.gap_ext_pen,
                reason: "gap penalties must be non-positive",
            });
        }
        Ok(())
    }
}

/// Options controlling how a contact map is matched against a structure.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Rewrite contact residue numbers to the structure's numbering.
    pub renumber: bool,
    /// Drop contacts touching a residue with no aligned counterpart.
    pub remove_unmatched: bool,
    /// The Cβ-Cβ distance (Å) below which a contact counts as true.
    pub distance_cutoff: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            renumber: true,
            remove_unmatched: false,
            distance_cutoff: 8.0,
        }
    }
}

impl MatchOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_cutoff.is_finite() || self.distance_cutoff <= 0.0 {
            return Err(ConfigError::InvalidDistanceCutoff {
                value: self.distance_cutoff,
            });
        }
        Ok(())
    }
}

/// The bandwidth estimator used for contact density curves.
///
/// Exactly one method is implemented; requesting any other name fails when
/// the value is parsed, not when the curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandwidthMethod {
    /// Bowman & Azzalini's normal-scale rule.
    #[default]
    Bowman,
}

impl FromStr for BandwidthMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bowman" => Ok(Self::Bowman),
            _ => Err(ConfigError::UnsupportedBandwidthMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Density estimation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DensityConfig {
    pub bw_method: BandwidthMethod,
}

/// Pre-match trimming of the working contact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Contacts separated by fewer residues than this are dropped.
    pub min_sequence_separation: u32,
    /// Keep only the best-scoring `top` contacts; `None` keeps everything.
    pub top: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_sequence_separation: 5,
            top: None,
        }
    }
}

/// The complete, eagerly validated configuration of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub alignment: AlignmentParams,
    pub matching: MatchOptions,
    pub density: DensityConfig,
    pub filter: FilterConfig,
}

impl AnalysisConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// Every section and field is optional and falls back to its default.
    /// The core never opens files; callers hand it the configuration text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alignment.validate()?;
        self.matching.validate()?;
        Ok(())
    }
}

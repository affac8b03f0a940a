//! Harness configuration: optional overrides resolved against defaults.
//!
//! A [`HarnessConfig`] can be built in code or loaded from a JSON object such
//! as `{"max_finalized": 500, "sample_count": 50, "seed": 7,
//! "heuristic": "landmark", "landmarks": 3}`. Every key is optional; unknown
//! keys are rejected.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use waypoint_search::policy::SearchPolicy;

/// Default number of sampled `(start, goal)` pairs per run.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
/// Default sampling seed.
pub const DEFAULT_SEED: u64 = 0;
/// Default landmark count for [`HeuristicKind::Landmark`].
pub const DEFAULT_LANDMARKS: usize = 4;

const KNOWN_KEYS: [&str; 5] = [
    "heuristic",
    "landmarks",
    "max_finalized",
    "sample_count",
    "seed",
];

/// Error loading or resolving a [`HarnessConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {detail}")]
    Io { path: String, detail: String },
    #[error("config is not valid JSON: {detail}")]
    InvalidJson { detail: String },
    #[error("config must be a JSON object, found {found}")]
    NotAnObject { found: String },
    #[error("unknown config key {key:?}")]
    UnknownKey { key: String },
    #[error("invalid value for {key:?}: {detail}")]
    InvalidValue { key: String, detail: String },
}

/// Which heuristic capability the runner wires into each search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    /// Breadth-first pseudo-coordinates, Euclidean distance.
    #[default]
    Euclidean,
    /// Landmark hop-distance lower bound.
    Landmark,
    /// Constant zero (Dijkstra order).
    Zero,
}

impl HeuristicKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Landmark => "landmark",
            Self::Zero => "zero",
        }
    }

    /// Parse the config-file spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "euclidean" => Some(Self::Euclidean),
            "landmark" => Some(Self::Landmark),
            "zero" => Some(Self::Zero),
            _ => None,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration overrides. `None` uses the crate default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Finalize budget per query. `None` is unbounded.
    pub max_finalized: Option<u64>,
    /// Number of sampled pairs. `None` uses [`DEFAULT_SAMPLE_COUNT`].
    pub sample_count: Option<usize>,
    /// Sampling seed. `None` uses [`DEFAULT_SEED`].
    pub seed: Option<u64>,
    pub heuristic: Option<HeuristicKind>,
    /// Landmark count. `None` uses [`DEFAULT_LANDMARKS`].
    pub landmarks: Option<usize>,
}

/// A [`HarnessConfig`] with every default applied and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub policy: SearchPolicy,
    pub sample_count: usize,
    pub seed: u64,
    pub heuristic: HeuristicKind,
    pub landmarks: usize,
}

impl HarnessConfig {
    /// Apply defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `max_finalized` or
    /// `landmarks` is zero.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let policy = SearchPolicy {
            max_finalized: self.max_finalized,
        };
        policy
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: "max_finalized".into(),
                detail: e.to_string(),
            })?;

        let landmarks = self.landmarks.unwrap_or(DEFAULT_LANDMARKS);
        if landmarks == 0 {
            return Err(ConfigError::InvalidValue {
                key: "landmarks".into(),
                detail: "must be at least 1".into(),
            });
        }

        Ok(ResolvedConfig {
            policy,
            sample_count: self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            heuristic: self.heuristic.unwrap_or_default(),
            landmarks,
        })
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
    /// error from [`HarnessConfig::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json(&bytes)
    }

    /// Parse a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, a non-object document,
    /// unknown keys, or values of the wrong type.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| ConfigError::InvalidJson {
            detail: e.to_string(),
        })?;
        let Value::Object(map) = value else {
            return Err(ConfigError::NotAnObject {
                found: json_kind(&value).into(),
            });
        };

        if let Some(key) = map.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey { key: key.clone() });
        }

        let heuristic = match map.get("heuristic") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => {
                Some(HeuristicKind::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                    key: "heuristic".into(),
                    detail: format!("expected euclidean, landmark or zero, found {name:?}"),
                })?)
            }
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "heuristic".into(),
                    detail: format!("expected string, found {}", json_kind(other)),
                })
            }
        };

        Ok(Self {
            max_finalized: optional_u64(&map, "max_finalized")?,
            sample_count: optional_usize(&map, "sample_count")?,
            seed: optional_u64(&map, "seed")?,
            heuristic,
            landmarks: optional_usize(&map, "landmarks")?,
        })
    }
}

fn optional_u64(map: &Map<String, Value>, key: &str) -> Result<Option<u64>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| ConfigError::InvalidValue {
            key: key.into(),
            detail: format!("expected non-negative integer, found {value}"),
        }),
    }
}

fn optional_usize(map: &Map<String, Value>, key: &str) -> Result<Option<usize>, ConfigError> {
    optional_u64(map, key)?
        .map(|v| {
            usize::try_from(v).map_err(|_| ConfigError::InvalidValue {
                key: key.into(),
                detail: format!("{v} does not fit in usize"),
            })
        })
        .transpose()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Scenario definition for headless demo runs
//!
//! A scenario is a JSON list of steps driving the simulated list: drag
//! input, scheduler time, programmatic triggers, and status assertions.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use dragload_core::DragStatus;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which vertical edge of the demo list a step addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Up,
    Down,
}

/// Serializable name for a drag status, used in assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusName {
    Normal,
    DragSmall,
    DragBig,
    Loading,
    LoadEnd,
}

impl StatusName {
    pub fn to_status(self) -> DragStatus {
        match self {
            StatusName::Normal => DragStatus::Normal,
            StatusName::DragSmall => DragStatus::DragSmall,
            StatusName::DragBig => DragStatus::DragBig,
            StatusName::Loading => DragStatus::Loading,
            StatusName::LoadEnd => DragStatus::LoadEnd,
        }
    }
}

/// Sequence of headless demo steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One step of a demo scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Move the content offset with the finger down.
    Drag {
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
    },
    /// Lift the finger.
    Release,
    /// Advance the scheduler by whole frames.
    Tick { frames: u32 },
    /// Advance the scheduler by wall-clock milliseconds.
    Wait { ms: u64 },
    /// Programmatically trigger an edge.
    Simulate { edge: Edge },
    /// Finish an edge's load (in place of a fetch completion).
    Complete { edge: Edge },
    /// Fail the run unless the edge is in the given status.
    AssertStatus { edge: Edge, status: StatusName },
}

//! DragLoad demo and diagnostics
//!
//! A headless stand-in for a real list screen: a simulated scroll host, a
//! title accessory, a fake network fetch, and a JSON scenario runner that
//! drives all of it deterministically. The `dragload` binary wraps this in a
//! small CLI.

pub mod fetch;
pub mod runner;
pub mod scenario;
pub mod sim;
pub mod title;

pub use fetch::SimulatedFetch;
pub use runner::{DemoWorld, RunConfig, RunReport};
pub use scenario::{Edge, Scenario, ScenarioError, ScenarioStep, StatusName};
pub use sim::SimulatedList;
pub use title::TitleAccessory;

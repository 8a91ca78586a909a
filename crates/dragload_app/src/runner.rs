//! Scenario runner
//!
//! Wires the full demo world together (simulated list, one controller per
//! vertical edge, title accessories, fake fetches) and executes scenarios
//! against it, ticking the scheduler deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

use dragload_animation::AnimationScheduler;
use dragload_control::{ControllerConfig, DragController};
use dragload_core::{Direction, DragStatus, Size, Vec2};

use crate::fetch::SimulatedFetch;
use crate::scenario::{Edge, Scenario, ScenarioStep, StatusName};
use crate::sim::SimulatedList;
use crate::title::TitleAccessory;

/// Threshold used by both demo edges.
const THRESHOLD: f32 = 60.0;
/// Row count a refresh resets to, and a load-more appends.
const PAGE_ROWS: usize = 10;

/// Frame pacing for a run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub tick_ms: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { tick_ms: 16.0 }
    }
}

/// What happened during a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub frames: u64,
    pub elapsed_ms: f64,
    pub rows: usize,
    pub down_triggers: usize,
    pub up_triggers: usize,
    pub down_status: DragStatus,
    pub up_status: DragStatus,
}

/// The assembled demo: a list with `Up` and `Down` drag-load edges whose
/// triggers run a simulated fetch and then complete themselves.
pub struct DemoWorld {
    list: Arc<SimulatedList>,
    scheduler: Arc<AnimationScheduler>,
    controllers: FxHashMap<Edge, DragController>,
    accessories: FxHashMap<Edge, Arc<Mutex<TitleAccessory>>>,
    triggers: FxHashMap<Edge, Arc<AtomicUsize>>,
    fetch_delay_ms: f32,
}

impl DemoWorld {
    pub fn new(initial_rows: usize, fetch_delay_ms: f32) -> Self {
        let list = Arc::new(SimulatedList::new(Size::new(375.0, 600.0), 44.0));
        list.set_rows(initial_rows);
        let scheduler = Arc::new(AnimationScheduler::new());

        let mut controllers = FxHashMap::default();
        let mut accessories = FxHashMap::default();
        let mut triggers = FxHashMap::default();

        for edge in [Edge::Down, Edge::Up] {
            let direction = match edge {
                Edge::Down => Direction::Down(THRESHOLD),
                Edge::Up => Direction::Up(THRESHOLD),
            };
            let controller = DragController::attach(
                list.port(),
                scheduler.clone(),
                ControllerConfig::new(direction),
            );

            let accessory = Arc::new(Mutex::new(TitleAccessory::new()));
            controller.set_accessory(accessory.clone());

            let counter = Arc::new(AtomicUsize::new(0));
            let fetch = SimulatedFetch::new(fetch_delay_ms);
            let handle = controller.clone();
            let fetch_list = list.clone();
            let fetch_scheduler = scheduler.clone();
            let fetch_counter = counter.clone();
            controller.set_on_trigger(move || {
                fetch_counter.fetch_add(1, Ordering::SeqCst);
                let list = fetch_list.clone();
                let controller = handle.clone();
                fetch.start(&fetch_scheduler, move || {
                    match edge {
                        // A refresh replaces the data set, a load-more
                        // appends the next page.
                        Edge::Down => list.set_rows(PAGE_ROWS),
                        Edge::Up => list.push_rows(PAGE_ROWS),
                    }
                    controller.complete_load();
                });
            });

            controllers.insert(edge, controller);
            accessories.insert(edge, accessory);
            triggers.insert(edge, counter);
        }

        Self {
            list,
            scheduler,
            controllers,
            accessories,
            triggers,
            fetch_delay_ms,
        }
    }

    pub fn list(&self) -> &SimulatedList {
        &self.list
    }

    pub fn rows(&self) -> usize {
        self.list.rows()
    }

    pub fn controller(&self, edge: Edge) -> &DragController {
        &self.controllers[&edge]
    }

    pub fn trigger_count(&self, edge: Edge) -> usize {
        self.triggers[&edge].load(Ordering::SeqCst)
    }

    pub fn accessory_text(&self, edge: Edge) -> String {
        self.accessories[&edge].lock().unwrap().text().to_owned()
    }

    /// Execute a scenario step by step. Fails on the first unmet assertion.
    pub fn run_scenario(&self, scenario: &Scenario, config: RunConfig) -> Result<RunReport> {
        let tick_ms = config.tick_ms.max(1.0);
        let mut frames: u64 = 0;
        let mut elapsed_ms: f64 = 0.0;

        for (index, step) in scenario.steps.iter().enumerate() {
            tracing::debug!("step {index}: {step:?}");
            match step {
                ScenarioStep::Drag { x, y } => {
                    self.list.drag_to(Vec2::new(*x, *y));
                }
                ScenarioStep::Release => {
                    self.list.end_drag();
                }
                ScenarioStep::Tick { frames: count } => {
                    for _ in 0..*count {
                        self.scheduler.advance(tick_ms);
                        frames += 1;
                        elapsed_ms += tick_ms as f64;
                    }
                }
                ScenarioStep::Wait { ms } => {
                    let mut remaining = *ms as f64;
                    while remaining > 0.0 {
                        self.scheduler.advance(tick_ms);
                        frames += 1;
                        elapsed_ms += tick_ms as f64;
                        remaining -= tick_ms as f64;
                    }
                }
                ScenarioStep::Simulate { edge } => {
                    self.controller(*edge).simulate_trigger();
                }
                ScenarioStep::Complete { edge } => {
                    self.controller(*edge).complete_load();
                }
                ScenarioStep::AssertStatus { edge, status } => {
                    let actual = self.controller(*edge).status();
                    let expected = status.to_status();
                    if actual != expected {
                        bail!(
                            "step {index}: expected {expected:?} on {edge:?}, found {actual:?}"
                        );
                    }
                }
            }
        }

        Ok(RunReport {
            frames,
            elapsed_ms,
            rows: self.rows(),
            down_triggers: self.trigger_count(Edge::Down),
            up_triggers: self.trigger_count(Edge::Up),
            down_status: self.controller(Edge::Down).status(),
            up_status: self.controller(Edge::Up).status(),
        })
    }

    /// The built-in demo flow: a programmatic refresh on startup, then a
    /// drag-up load-more, both completed by the simulated fetch.
    pub fn run_demo(&self, config: RunConfig) -> Result<RunReport> {
        let fetch = self.fetch_delay_ms.ceil() as u64;
        let scenario = Scenario {
            steps: vec![
                ScenarioStep::Simulate { edge: Edge::Down },
                // Offset animation, settle delay, and inset reservation.
                ScenarioStep::Wait { ms: 1100 },
                ScenarioStep::AssertStatus {
                    edge: Edge::Down,
                    status: StatusName::Loading,
                },
                ScenarioStep::Wait { ms: fetch + 400 },
                ScenarioStep::AssertStatus {
                    edge: Edge::Down,
                    status: StatusName::Normal,
                },
                ScenarioStep::Drag { x: 0.0, y: 90.0 },
                ScenarioStep::Release,
                ScenarioStep::Wait { ms: 400 },
                ScenarioStep::AssertStatus {
                    edge: Edge::Up,
                    status: StatusName::Loading,
                },
                ScenarioStep::Wait { ms: fetch + 400 },
                ScenarioStep::AssertStatus {
                    edge: Edge::Up,
                    status: StatusName::Normal,
                },
            ],
        };
        self.run_scenario(&scenario, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_demo_flow() {
        let world = DemoWorld::new(0, 3000.0);
        let report = world
            .run_demo(RunConfig::default())
            .expect("demo flow should pass its own assertions");

        // The refresh resets to one page, the load-more appends another.
        assert_eq!(report.rows, 2 * PAGE_ROWS);
        assert_eq!(report.down_triggers, 1);
        assert_eq!(report.up_triggers, 1);
        assert_eq!(report.down_status, DragStatus::Normal);
        assert_eq!(report.up_status, DragStatus::Normal);
    }

    #[test]
    fn test_scenario_drives_a_manual_refresh() {
        let world = DemoWorld::new(3, 3000.0);
        let scenario = Scenario::from_json(
            r#"{
                "steps": [
                    { "type": "drag", "y": -80.0 },
                    { "type": "release" },
                    { "type": "wait", "ms": 600 },
                    { "type": "assert_status", "edge": "down", "status": "loading" },
                    { "type": "wait", "ms": 3400 },
                    { "type": "assert_status", "edge": "down", "status": "normal" }
                ]
            }"#,
        )
        .unwrap();

        let report = world.run_scenario(&scenario, RunConfig::default()).unwrap();
        assert_eq!(report.rows, PAGE_ROWS);
        assert_eq!(report.down_triggers, 1);
        assert_eq!(report.up_triggers, 0);
    }

    #[test]
    fn test_failed_assertion_reports_the_step() {
        let world = DemoWorld::new(0, 3000.0);
        let scenario = Scenario::from_json(
            r#"{
                "steps": [
                    { "type": "assert_status", "edge": "down", "status": "loading" }
                ]
            }"#,
        )
        .unwrap();

        let err = world
            .run_scenario(&scenario, RunConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("step 0"));
    }

    #[test]
    fn test_accessory_text_tracks_the_drag() {
        let world = DemoWorld::new(PAGE_ROWS, 3000.0);

        world.list().drag_to(Vec2::new(0.0, -30.0));
        assert_eq!(world.accessory_text(Edge::Down), "Drag to load");

        world.list().drag_to(Vec2::new(0.0, -80.0));
        assert_eq!(world.accessory_text(Edge::Down), "Release to load");
    }
}

//! Direction-aware drag controller
//!
//! One controller per attached edge. It subscribes to the port's channels,
//! runs the drag state machine on offset signals, keeps the accessory band's
//! rest position current on geometry signals, and drives the loading
//! lifecycle through the inset animator.
//!
//! All continuations scheduled by a controller hold only a weak reference to
//! it; a controller detached mid-animation lets the animation finish but its
//! completions find `attached == false` and do nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use dragload_animation::{AnimationScheduler, Easing};
use dragload_core::{Direction, DragStatus, SubscriptionId};

use crate::accessory::AccessoryView;
use crate::animator::InsetAnimator;
use crate::geometry::GeometryResolver;
use crate::port::ScrollPort;

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Runtime configuration of one drag-load edge.
///
/// The threshold distance travels inside the direction payload. The trigger
/// callback is supplied separately via [`DragController::set_on_trigger`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub direction: Direction,
    /// Duration of the inset reserve/release animations, in milliseconds.
    pub animation_duration_ms: f32,
    /// Pause between a simulated drag and its loading transition.
    pub settle_delay_ms: f32,
    pub enabled: bool,
}

impl ControllerConfig {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            animation_duration_ms: 250.0,
            settle_delay_ms: 500.0,
            enabled: true,
        }
    }
}

struct Inner {
    id: u64,
    port: Arc<ScrollPort>,
    scheduler: Arc<AnimationScheduler>,
    config: ControllerConfig,
    resolver: GeometryResolver,
    status: DragStatus,
    band_position: f32,
    accessory: Option<Arc<Mutex<dyn AccessoryView>>>,
    on_trigger: Option<Arc<dyn Fn() + Send + Sync>>,
    animator: InsetAnimator,
    offset_sub: Option<SubscriptionId>,
    size_sub: Option<SubscriptionId>,
    viewport_sub: Option<SubscriptionId>,
    safe_area_sub: Option<SubscriptionId>,
    dragging_sub: Option<SubscriptionId>,
    attached: bool,
}

/// Drag-load behavior attached to one edge of a scrollable container.
#[derive(Clone)]
pub struct DragController {
    inner: Arc<Mutex<Inner>>,
}

impl DragController {
    /// Attach a controller to a container for the configured direction.
    ///
    /// Drag detection stays dormant until an accessory view is supplied via
    /// [`set_accessory`](Self::set_accessory); geometry tracking starts
    /// immediately.
    pub fn attach(
        port: Arc<ScrollPort>,
        scheduler: Arc<AnimationScheduler>,
        config: ControllerConfig,
    ) -> Self {
        let id = NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed);
        let resolver = GeometryResolver::new(config.direction);
        let band_position = resolver.rest_position(&port.signal());

        let inner = Arc::new(Mutex::new(Inner {
            id,
            port,
            scheduler,
            config,
            resolver,
            status: DragStatus::Normal,
            band_position,
            accessory: None,
            on_trigger: None,
            animator: InsetAnimator::new(),
            offset_sub: None,
            size_sub: None,
            viewport_sub: None,
            safe_area_sub: None,
            dragging_sub: None,
            attached: true,
        }));

        if config.enabled {
            Self::subscribe_all(&inner);
        }
        tracing::debug!("controller {id} attached ({:?})", config.direction);
        DragController { inner }
    }

    /// Supply (or replace) the accessory view. The view immediately receives
    /// the current status so its content starts in sync.
    pub fn set_accessory(&self, accessory: Arc<Mutex<dyn AccessoryView>>) {
        let mut guard = self.inner.lock().unwrap();
        accessory.lock().unwrap().status_changed(guard.status);
        guard.accessory = Some(accessory);
    }

    /// Set the callback fired when a loading cycle has fully reserved its
    /// insets. The callee is expected to call
    /// [`complete_load`](Self::complete_load) when its work finishes.
    pub fn set_on_trigger(&self, f: impl Fn() + Send + Sync + 'static) {
        self.inner.lock().unwrap().on_trigger = Some(Arc::new(f));
    }

    pub fn status(&self) -> DragStatus {
        self.inner.lock().unwrap().status
    }

    pub fn direction(&self) -> Direction {
        self.inner.lock().unwrap().config.direction
    }

    /// Rest position of the accessory band along the scroll axis.
    pub fn band_position(&self) -> f32 {
        self.inner.lock().unwrap().band_position
    }

    pub fn is_attached(&self) -> bool {
        self.inner.lock().unwrap().attached
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().unwrap().config.enabled
    }

    /// Enable or disable drag detection. Disabling drops the channel
    /// subscriptions; enabling restores them and refreshes geometry.
    pub fn set_enabled(&self, enabled: bool) {
        let attached = {
            let mut guard = self.inner.lock().unwrap();
            if guard.config.enabled == enabled {
                return;
            }
            guard.config.enabled = enabled;
            if !enabled {
                Self::unsubscribe_all(&mut guard);
            }
            guard.attached
        };
        if enabled && attached {
            Self::subscribe_all(&self.inner);
            Self::refresh_band(&self.inner);
        }
    }

    /// Reconfigure the direction (or its threshold) and re-run geometry.
    pub fn set_direction(&self, direction: Direction) {
        let mut guard = self.inner.lock().unwrap();
        if guard.config.direction == direction {
            return;
        }
        guard.config.direction = direction;
        guard.resolver.set_direction(direction);
        let signal = guard.port.signal();
        guard.band_position = guard.resolver.rest_position(&signal);
        tracing::debug!("direction reconfigured to {direction:?}");
    }

    /// Change only the threshold distance of the current direction.
    pub fn set_threshold(&self, threshold: f32) {
        let direction = self.direction().with_threshold(threshold);
        self.set_direction(direction);
    }

    /// Finish the current loading cycle: animate the reserved inset back and
    /// settle to `Normal`. Silently ignored unless the status is `Loading`.
    pub fn complete_load(&self) {
        let mut guard = self.inner.lock().unwrap();
        if !guard.attached || guard.status != DragStatus::Loading {
            tracing::debug!("complete_load ignored in {:?}", guard.status);
            return;
        }
        Self::apply_status(&mut guard, DragStatus::LoadEnd);

        let port = guard.port.clone();
        let scheduler = guard.scheduler.clone();
        let resolver = guard.resolver;
        let duration = guard.config.animation_duration_ms;
        let weak = Arc::downgrade(&self.inner);
        let started = guard.animator.end_loading(&port, &scheduler, &resolver, duration, move || {
            Self::load_end_settled(&weak);
        });
        if !started {
            Self::apply_status(&mut guard, DragStatus::Normal);
            let id = guard.id;
            guard.port.release_loading(id);
        }
    }

    /// Programmatically drive this edge into loading: animate the content
    /// offset past the threshold, wait out the settle delay, then enter the
    /// loading lifecycle. A demo/test hook; normal operation never needs it.
    pub fn simulate_trigger(&self) {
        let guard = self.inner.lock().unwrap();
        if !Self::detection_active(&guard) || guard.status != DragStatus::Normal {
            return;
        }
        let signal = guard.port.signal();
        let start = signal.content_offset;
        let target = guard.resolver.simulate_offset(&signal);
        let port = guard.port.clone();
        let scheduler = guard.scheduler.clone();
        let duration = guard.config.animation_duration_ms;
        let settle = guard.config.settle_delay_ms;
        drop(guard);

        scheduler.animate(
            duration,
            Easing::EaseInOut,
            move |progress| {
                port.offset.set(start.lerp(target, progress));
            },
            || {},
        );

        let weak = Arc::downgrade(&self.inner);
        scheduler.delay(settle, move || {
            let Some(inner) = weak.upgrade() else { return };
            let guard = inner.lock().unwrap();
            if !Self::detection_active(&guard) || guard.status.is_settling() {
                return;
            }
            Self::begin_loading(&inner, guard);
        });
        tracing::debug!("simulated drag toward {target:?} scheduled");
    }

    /// Tear the controller down: drop all subscriptions and give up the
    /// loading slot. Safe to call any number of times. In-flight animations
    /// run to completion; their continuations see the detached state and
    /// do nothing.
    pub fn detach(&self) {
        let mut guard = self.inner.lock().unwrap();
        if !guard.attached {
            return;
        }
        Self::unsubscribe_all(&mut guard);
        let id = guard.id;
        guard.port.release_loading(id);
        guard.attached = false;
        tracing::debug!("controller {id} detached");
    }

    // =========================================================================
    // Signal handling
    // =========================================================================

    fn detection_active(inner: &Inner) -> bool {
        inner.attached && inner.config.enabled && inner.accessory.is_some()
    }

    fn subscribe_all(inner: &Arc<Mutex<Inner>>) {
        let port = inner.lock().unwrap().port.clone();
        let weak = Arc::downgrade(inner);

        let offset_sub = port.offset.subscribe({
            let weak = weak.clone();
            move |_| {
                if let Some(inner) = weak.upgrade() {
                    Self::handle_scroll(&inner);
                }
            }
        });
        let size_sub = port.content_size.subscribe({
            let weak = weak.clone();
            move |_| {
                if let Some(inner) = weak.upgrade() {
                    Self::refresh_band(&inner);
                }
            }
        });
        let viewport_sub = port.viewport.subscribe({
            let weak = weak.clone();
            move |_| {
                if let Some(inner) = weak.upgrade() {
                    Self::refresh_band(&inner);
                }
            }
        });
        let safe_area_sub = port.safe_area.subscribe({
            let weak = weak.clone();
            move |_| {
                if let Some(inner) = weak.upgrade() {
                    Self::refresh_band(&inner);
                }
            }
        });
        let dragging_sub = port.dragging.subscribe({
            let weak = weak.clone();
            move |dragging: &bool| {
                if !*dragging {
                    if let Some(inner) = weak.upgrade() {
                        Self::handle_release(&inner);
                    }
                }
            }
        });

        let mut guard = inner.lock().unwrap();
        guard.offset_sub = Some(offset_sub);
        guard.size_sub = Some(size_sub);
        guard.viewport_sub = Some(viewport_sub);
        guard.safe_area_sub = Some(safe_area_sub);
        guard.dragging_sub = Some(dragging_sub);
    }

    fn unsubscribe_all(inner: &mut Inner) {
        let port = inner.port.clone();
        if let Some(id) = inner.offset_sub.take() {
            port.offset.unsubscribe(id);
        }
        if let Some(id) = inner.size_sub.take() {
            port.content_size.unsubscribe(id);
        }
        if let Some(id) = inner.viewport_sub.take() {
            port.viewport.unsubscribe(id);
        }
        if let Some(id) = inner.safe_area_sub.take() {
            port.safe_area.unsubscribe(id);
        }
        if let Some(id) = inner.dragging_sub.take() {
            port.dragging.unsubscribe(id);
        }
    }

    /// Offset signal: run the drag machine while dragging, or catch the case
    /// where the content springs back after a past-threshold release.
    fn handle_scroll(inner: &Arc<Mutex<Inner>>) {
        let mut guard = inner.lock().unwrap();
        if !Self::detection_active(&guard) || guard.status.is_settling() {
            return;
        }
        let signal = guard.port.signal();
        if signal.dragging {
            let threshold = guard.resolver.direction().threshold();
            let depth = guard.resolver.drag_depth(&signal);
            tracing::trace!(
                "drag depth {:.1} (threshold {:.1}, {:?})",
                depth,
                threshold,
                guard.resolver.direction()
            );
            if let Some(next) = guard.status.on_drag(depth, threshold) {
                Self::apply_status(&mut guard, next);
            }
        } else if guard.status == DragStatus::DragBig {
            Self::begin_loading(inner, guard);
        }
    }

    /// Dragging flipped to false: a past-threshold drag starts loading even
    /// if no further offset signal arrives.
    fn handle_release(inner: &Arc<Mutex<Inner>>) {
        let guard = inner.lock().unwrap();
        if !Self::detection_active(&guard) || guard.status.is_settling() {
            return;
        }
        if guard.status == DragStatus::DragBig {
            Self::begin_loading(inner, guard);
        }
    }

    /// Geometry signal: reposition the accessory band without touching the
    /// drag status.
    fn refresh_band(inner: &Arc<Mutex<Inner>>) {
        let mut guard = inner.lock().unwrap();
        if !guard.attached {
            return;
        }
        let signal = guard.port.signal();
        let band = guard.resolver.rest_position(&signal);
        if band != guard.band_position {
            tracing::trace!("accessory band repositioned to {band:.1}");
            guard.band_position = band;
        }
    }

    // =========================================================================
    // Loading lifecycle
    // =========================================================================

    fn begin_loading(inner: &Arc<Mutex<Inner>>, mut guard: MutexGuard<'_, Inner>) {
        let id = guard.id;
        if !guard.port.try_claim_loading(id) {
            tracing::debug!(
                "loading slot busy; {:?} stays in {:?}",
                guard.resolver.direction(),
                guard.status
            );
            return;
        }
        Self::apply_status(&mut guard, DragStatus::Loading);

        let signal = guard.port.signal();
        let port = guard.port.clone();
        let scheduler = guard.scheduler.clone();
        let resolver = guard.resolver;
        let duration = guard.config.animation_duration_ms;
        let weak = Arc::downgrade(inner);
        guard
            .animator
            .begin_loading(&port, &scheduler, &resolver, &signal, duration, move || {
                Self::loading_settled(&weak);
            });
    }

    /// Reservation animation finished: tell the outside world to load.
    fn loading_settled(weak: &Weak<Mutex<Inner>>) {
        let Some(inner) = weak.upgrade() else { return };
        let trigger = {
            let guard = inner.lock().unwrap();
            if !guard.attached || guard.status != DragStatus::Loading {
                return;
            }
            guard.on_trigger.clone()
        };
        if let Some(trigger) = trigger {
            trigger();
        }
    }

    /// Restore animation finished: settle back to rest.
    fn load_end_settled(weak: &Weak<Mutex<Inner>>) {
        let Some(inner) = weak.upgrade() else { return };
        let mut guard = inner.lock().unwrap();
        if !guard.attached {
            return;
        }
        if guard.status == DragStatus::LoadEnd {
            Self::apply_status(&mut guard, DragStatus::Normal);
        }
        guard.animator.finish_cycle();
        let id = guard.id;
        guard.port.release_loading(id);
    }

    /// Status write with change detection; the accessory only ever hears
    /// about real changes.
    fn apply_status(inner: &mut Inner, next: DragStatus) {
        if inner.status == next {
            return;
        }
        tracing::debug!(
            "drag status {:?} -> {:?} ({:?})",
            inner.status,
            next,
            inner.resolver.direction()
        );
        inner.status = next;
        if let Some(accessory) = &inner.accessory {
            accessory.lock().unwrap().status_changed(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragload_core::{EdgeInsets, Size, Vec2};
    use std::sync::atomic::AtomicUsize;

    struct RecordingAccessory {
        history: Vec<DragStatus>,
    }

    impl AccessoryView for RecordingAccessory {
        fn status_changed(&mut self, status: DragStatus) {
            self.history.push(status);
        }
    }

    struct Harness {
        port: Arc<ScrollPort>,
        scheduler: Arc<AnimationScheduler>,
        controller: DragController,
        triggers: Arc<AtomicUsize>,
        accessory: Arc<Mutex<RecordingAccessory>>,
    }

    impl Harness {
        fn new(direction: Direction, content: Size, viewport: Size) -> Self {
            let port = Arc::new(ScrollPort::new());
            port.content_size.set(content);
            port.viewport.set(viewport);
            let scheduler = Arc::new(AnimationScheduler::new());

            let controller = DragController::attach(
                port.clone(),
                scheduler.clone(),
                ControllerConfig::new(direction),
            );
            let accessory = Arc::new(Mutex::new(RecordingAccessory { history: Vec::new() }));
            controller.set_accessory(accessory.clone());

            let triggers = Arc::new(AtomicUsize::new(0));
            let triggers_clone = triggers.clone();
            controller.set_on_trigger(move || {
                triggers_clone.fetch_add(1, Ordering::SeqCst);
            });

            Self {
                port,
                scheduler,
                controller,
                triggers,
                accessory,
            }
        }

        fn drag_to(&self, offset: Vec2) {
            self.port.dragging.set(true);
            self.port.offset.set(offset);
        }

        fn release(&self) {
            self.port.dragging.set(false);
        }

        /// Run well past any animation and settle delay.
        fn settle(&self) {
            for _ in 0..80 {
                self.scheduler.advance(16.0);
            }
        }

        fn trigger_count(&self) -> usize {
            self.triggers.load(Ordering::SeqCst)
        }
    }

    fn square(extent: f32) -> Size {
        Size::new(extent, extent)
    }

    #[test]
    fn test_drag_past_threshold_release_loads() {
        // Viewport 600, content 600, threshold 60, Down.
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.drag_to(Vec2::new(0.0, -80.0));
        assert_eq!(h.controller.status(), DragStatus::DragBig);

        h.release();
        assert_eq!(h.controller.status(), DragStatus::Loading);
        assert_eq!(h.trigger_count(), 0, "trigger waits for the reservation");

        h.settle();
        assert_eq!(h.trigger_count(), 1);
        assert_eq!(h.port.content_inset().top, 60.0);

        h.controller.complete_load();
        assert_eq!(h.controller.status(), DragStatus::LoadEnd);
        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Normal);
        assert_eq!(h.port.content_inset().top, 0.0);
        assert_eq!(h.trigger_count(), 1);
    }

    #[test]
    fn test_drag_below_threshold_release_stays_small() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.drag_to(Vec2::new(0.0, -30.0));
        assert_eq!(h.controller.status(), DragStatus::DragSmall);

        h.release();
        h.settle();
        assert_eq!(h.controller.status(), DragStatus::DragSmall);
        assert_eq!(h.trigger_count(), 0);
        assert_eq!(h.port.content_inset().top, 0.0);
    }

    #[test]
    fn test_threshold_monotonicity_all_directions() {
        let cases: [(Direction, fn(f32) -> Vec2); 4] = [
            (Direction::Down(60.0), |d| Vec2::new(0.0, -d)),
            (Direction::Up(60.0), |d| Vec2::new(0.0, d)),
            (Direction::Right(60.0), |d| Vec2::new(-d, 0.0)),
            (Direction::Left(60.0), |d| Vec2::new(d, 0.0)),
        ];
        for (direction, offset_for_depth) in cases {
            let h = Harness::new(direction, square(600.0), square(600.0));

            h.drag_to(offset_for_depth(0.0));
            assert_eq!(h.controller.status(), DragStatus::Normal, "{direction:?}");

            h.drag_to(offset_for_depth(59.5));
            assert_eq!(h.controller.status(), DragStatus::DragSmall, "{direction:?}");

            h.drag_to(offset_for_depth(60.0));
            assert_eq!(h.controller.status(), DragStatus::DragBig, "{direction:?}");

            h.drag_to(offset_for_depth(60.5));
            assert_eq!(h.controller.status(), DragStatus::DragBig, "{direction:?}");
        }
    }

    #[test]
    fn test_loading_locks_out_scroll_signals() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.drag_to(Vec2::new(0.0, -80.0));
        h.release();
        assert_eq!(h.controller.status(), DragStatus::Loading);

        h.drag_to(Vec2::new(0.0, -10.0));
        h.drag_to(Vec2::new(0.0, 0.0));
        h.release();
        assert_eq!(h.controller.status(), DragStatus::Loading);

        h.settle();
        h.controller.complete_load();
        assert_eq!(h.controller.status(), DragStatus::LoadEnd);

        h.drag_to(Vec2::new(0.0, -100.0));
        assert_eq!(h.controller.status(), DragStatus::LoadEnd);
        h.release();

        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Normal);
    }

    #[test]
    fn test_inset_round_trip_survives_orthogonal_mutation() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));
        h.port.set_content_inset(EdgeInsets::new(5.0, 0.0, 0.0, 0.0));

        h.drag_to(Vec2::new(0.0, -80.0));
        h.release();
        h.settle();
        assert_eq!(h.port.content_inset().top, 65.0);

        // A horizontal edge contributes mid-cycle.
        h.port.update_content_inset(|i| i.right = 33.0);

        h.controller.complete_load();
        h.settle();

        let insets = h.port.content_inset();
        assert_eq!(insets.top, 5.0, "affected axis restored exactly");
        assert_eq!(insets.right, 33.0, "orthogonal contribution untouched");
    }

    #[test]
    fn test_only_one_direction_loads_at_a_time() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));
        let up = DragController::attach(
            h.port.clone(),
            h.scheduler.clone(),
            ControllerConfig::new(Direction::Up(60.0)),
        );
        up.set_accessory(Arc::new(Mutex::new(RecordingAccessory { history: Vec::new() })));

        // Down goes into loading first.
        h.drag_to(Vec2::new(0.0, -80.0));
        h.release();
        assert_eq!(h.controller.status(), DragStatus::Loading);

        // Up reaches DragBig and releases while Down holds the slot.
        h.drag_to(Vec2::new(0.0, 80.0));
        assert_eq!(up.status(), DragStatus::DragBig);
        h.release();
        assert_eq!(up.status(), DragStatus::DragBig, "must not enter loading");

        h.settle();
        h.controller.complete_load();
        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Normal);

        // With the slot free, the next released-past-threshold signal loads.
        h.port.offset.set(Vec2::new(0.0, 80.5));
        assert_eq!(up.status(), DragStatus::Loading);
    }

    #[test]
    fn test_accessory_never_hears_no_op_updates() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.drag_to(Vec2::new(0.0, -10.0));
        h.drag_to(Vec2::new(0.0, -20.0));
        h.drag_to(Vec2::new(0.0, -40.0));

        let history = h.accessory.lock().unwrap().history.clone();
        // Initial sync plus exactly one DragSmall, despite three signals.
        assert_eq!(history, vec![DragStatus::Normal, DragStatus::DragSmall]);
    }

    #[test]
    fn test_no_accessory_means_no_detection() {
        let port = Arc::new(ScrollPort::new());
        port.content_size.set(square(600.0));
        port.viewport.set(square(600.0));
        let scheduler = Arc::new(AnimationScheduler::new());
        let controller = DragController::attach(
            port.clone(),
            scheduler,
            ControllerConfig::new(Direction::Down(60.0)),
        );

        port.dragging.set(true);
        port.offset.set(Vec2::new(0.0, -80.0));
        assert_eq!(controller.status(), DragStatus::Normal);

        // Supplying the accessory arms detection for the next signal.
        controller.set_accessory(Arc::new(Mutex::new(RecordingAccessory { history: Vec::new() })));
        port.offset.set(Vec2::new(0.0, -81.0));
        assert_eq!(controller.status(), DragStatus::DragBig);
    }

    #[test]
    fn test_disabled_controller_ignores_drags() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));
        h.controller.set_enabled(false);

        h.drag_to(Vec2::new(0.0, -80.0));
        h.release();
        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Normal);
        assert_eq!(h.trigger_count(), 0);

        h.controller.set_enabled(true);
        h.drag_to(Vec2::new(0.0, -90.0));
        assert_eq!(h.controller.status(), DragStatus::DragBig);
    }

    #[test]
    fn test_detach_is_idempotent_and_guards_continuations() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.drag_to(Vec2::new(0.0, -80.0));
        h.release();
        assert_eq!(h.controller.status(), DragStatus::Loading);

        // Detach while the reservation animation is in flight.
        h.controller.detach();
        h.controller.detach();
        assert!(!h.controller.is_attached());

        h.settle();
        assert_eq!(h.trigger_count(), 0, "completion must notice the detach");

        // Signals are dead after detach.
        h.drag_to(Vec2::new(0.0, -80.0));
        assert_eq!(h.controller.status(), DragStatus::Loading);

        // The loading slot was given back on detach.
        assert!(!h.port.is_loading_claimed());
    }

    #[test]
    fn test_complete_load_outside_loading_is_ignored() {
        let h = Harness::new(Direction::Down(60.0), square(600.0), square(600.0));

        h.controller.complete_load();
        assert_eq!(h.controller.status(), DragStatus::Normal);

        h.drag_to(Vec2::new(0.0, -30.0));
        h.controller.complete_load();
        assert_eq!(h.controller.status(), DragStatus::DragSmall);
        assert_eq!(h.port.content_inset(), EdgeInsets::ZERO);
    }

    #[test]
    fn test_simulate_trigger_loads_without_gesture() {
        // Content shorter than viewport: the simulated Down drag does not
        // even need to move the offset.
        let h = Harness::new(Direction::Down(60.0), square(600.0), Size::new(600.0, 800.0));

        h.controller.simulate_trigger();
        assert_eq!(h.controller.status(), DragStatus::Normal, "waits out the settle delay");

        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Loading);
        assert_eq!(h.trigger_count(), 1);

        // A second simulate while busy is ignored.
        h.controller.simulate_trigger();
        h.settle();
        assert_eq!(h.trigger_count(), 1);

        h.controller.complete_load();
        h.settle();
        assert_eq!(h.controller.status(), DragStatus::Normal);
    }

    #[test]
    fn test_trailing_band_tracks_content_growth() {
        let h = Harness::new(Direction::Up(60.0), Size::new(600.0, 400.0), square(600.0));
        assert_eq!(h.controller.band_position(), 600.0);

        h.port.content_size.set(Size::new(600.0, 1000.0));
        assert_eq!(h.controller.band_position(), 1000.0);
    }

    #[test]
    fn test_trailing_loading_reserves_padded_inset() {
        // Up, content 400 < viewport 600 -> bottom inset 260.
        let h = Harness::new(Direction::Up(60.0), Size::new(600.0, 400.0), square(600.0));

        h.drag_to(Vec2::new(0.0, 70.0));
        assert_eq!(h.controller.status(), DragStatus::DragBig);
        h.release();
        h.settle();

        assert_eq!(h.port.content_inset().bottom, 260.0);
        assert_eq!(h.trigger_count(), 1);

        h.controller.complete_load();
        h.settle();
        assert_eq!(h.port.content_inset().bottom, 0.0);
    }

    #[test]
    fn test_direction_reconfiguration_reruns_geometry() {
        let h = Harness::new(Direction::Down(60.0), Size::new(600.0, 400.0), square(600.0));
        assert_eq!(h.controller.band_position(), 0.0);

        h.controller.set_direction(Direction::Up(60.0));
        assert_eq!(h.controller.band_position(), 600.0);

        h.controller.set_threshold(90.0);
        assert_eq!(h.controller.direction(), Direction::Up(90.0));
    }
}

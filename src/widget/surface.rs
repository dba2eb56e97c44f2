//! Host surfaces a die renders into
//!
//! The controller never touches a DOM directly. It talks to a `DieSurface`,
//! which the browser binding implements over `web-sys` and `HeadlessSurface`
//! implements in memory for tests and the CLI.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::widget::types::DieEvent;

/// Identifies one scheduled "apply exhausted palette" callback. The controller
/// ignores tokens from an older generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisableToken(pub u64);

pub trait DieSurface {
    /// Replace the isolated subtree with `fragment`.
    fn render(&mut self, fragment: &str);

    /// Set a custom property (`--die-size`, `--total-rolls`, ...) on the host.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Hover text on the host element.
    fn set_title(&mut self, title: &str);

    /// Point `#die[data-face]` at `face`.
    fn set_face(&mut self, face: u32);

    /// Rendered height of the host in pixels, if it has been laid out.
    fn client_height(&self) -> Option<f64>;

    fn dispatch(&mut self, event: DieEvent);

    /// Call back `DieController::on_disable_timer(token)` once `delay` has passed.
    fn schedule_disable(&mut self, delay: Duration, token: DisableToken);
}

/// In-memory surface. Records everything the controller does and keeps a
/// virtual clock for scheduled callbacks.
#[derive(Debug, Default, Clone)]
pub struct HeadlessSurface {
    pub fragment: String,
    pub style: BTreeMap<String, String>,
    pub title: Option<String>,
    pub face: Option<u32>,
    pub events: Vec<DieEvent>,
    /// Height reported to the controller; `None` behaves like an unlaid-out element
    pub height: Option<f64>,
    now: Duration,
    timers: Vec<(Duration, DisableToken)>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// Drain recorded events.
    pub fn take_events(&mut self) -> Vec<DieEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Move the virtual clock forward and return the tokens that came due,
    /// oldest first. The caller hands them to the controller.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DisableToken> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _)| *at <= now);
        self.timers = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl DieSurface for HeadlessSurface {
    fn render(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_face(&mut self, face: u32) {
        self.face = Some(face);
    }

    fn client_height(&self) -> Option<f64> {
        self.height
    }

    fn dispatch(&mut self, event: DieEvent) {
        self.events.push(event);
    }

    fn schedule_disable(&mut self, delay: Duration, token: DisableToken) {
        self.timers.push((self.now + delay, token));
    }
}

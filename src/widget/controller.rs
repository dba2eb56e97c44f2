//! Die controller
//!
//! Owns the configuration, the roll state and the surface, and runs the roll
//! state machine:
//!
//! - **Detached**: constructed, nothing rendered, clicks are dropped.
//! - **Connected**: rendered; each click draws a face until the budget runs out.
//! - **Disconnected**: torn down; clicks and late timer callbacks do nothing.
//!
//! While connected the die is either idle or exhausted. The rolling animation
//! itself is a CSS transition on the surface and needs no state here.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::widget::geometry::DieShape;
use crate::widget::surface::{DieSurface, DisableToken};
use crate::widget::types::{
    DieColors, DieConfig, DieEvent, DieResult, DieState, RollBudget,
};

/// Size used when the host hasn't been laid out yet.
pub const DEFAULT_DIE_SIZE_PX: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Detached,
    Connected,
    Disconnected,
}

pub struct DieController<S: DieSurface, R: Rng = StdRng> {
    config: DieConfig,
    shape: DieShape,
    state: DieState,
    surface: S,
    rng: R,
    lifecycle: Lifecycle,
    /// Bumped whenever a pending disable callback should be ignored
    disable_generation: u64,
    exhausted_palette: bool,
}

impl<S: DieSurface> DieController<S, StdRng> {
    pub fn new(config: DieConfig, surface: S) -> DieResult<Self> {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }
}

impl<S: DieSurface, R: Rng> DieController<S, R> {
    /// Build a detached controller. The configuration is validated here so the
    /// state machine never sees an inverted range or a non-positive roll time.
    pub fn with_rng(config: DieConfig, surface: S, rng: R) -> DieResult<Self> {
        config.validate()?;
        let shape = config.shape();
        let state = DieState::new(config.clamp_face(config.initial_value), config.allowed_rolls);
        Ok(Self {
            config,
            shape,
            state,
            surface,
            rng,
            lifecycle: Lifecycle::Detached,
            disable_generation: 0,
            exhausted_palette: false,
        })
    }

    pub fn config(&self) -> &DieConfig {
        &self.config
    }

    pub fn shape(&self) -> DieShape {
        self.shape
    }

    pub fn state(&self) -> &DieState {
        &self.state
    }

    pub fn value(&self) -> u32 {
        self.state.current_face
    }

    pub fn rolls_remaining(&self) -> RollBudget {
        self.state.rolls_remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Render the die and show the initial face.
    ///
    /// Appearance variables are published before rendering so the first paint
    /// doesn't animate from default values. The initial face is displayed
    /// without consuming budget or dispatching a selection.
    pub fn connect(&mut self) {
        if self.lifecycle != Lifecycle::Detached {
            debug!(lifecycle = ?self.lifecycle, "die already connected, ignoring");
            return;
        }

        let colors = self.config.colors.clone();
        self.apply_palette(&colors);
        self.surface
            .set_style_property("--roll-time", &format!("{}s", self.config.roll_time));
        self.publish_rotation_offset();

        self.surface.render(&self.shape.fragment());

        let size = self
            .surface
            .client_height()
            .filter(|h| *h > 0.0)
            .unwrap_or(DEFAULT_DIE_SIZE_PX);
        self.surface
            .set_style_property("--die-size", &format!("{size}px"));

        self.lifecycle = Lifecycle::Connected;
        info!(
            shape = %self.shape,
            min = self.config.min_roll,
            max = self.config.max_roll,
            budget = %self.state.rolls_remaining,
            "die connected"
        );

        let initial = self.config.clamp_face(self.config.initial_value);
        if initial != self.config.initial_value {
            debug!(
                initial_value = self.config.initial_value,
                face = initial,
                "initial value outside roll range, clamped"
            );
        }
        self.show_face(initial);
    }

    /// Trigger binding: a click is a user roll. Dropped unless connected.
    pub fn click(&mut self) -> Option<u32> {
        if self.lifecycle != Lifecycle::Connected {
            debug!(lifecycle = ?self.lifecycle, "click dropped");
            return None;
        }
        self.roll(None)
    }

    /// Roll the die.
    ///
    /// With `Some(value)` the die just turns to that face: no budget is spent
    /// and nothing is dispatched. With `None` a face is drawn uniformly from
    /// the roll range, dispatched as a selection and returned; once the budget
    /// is exhausted this is a no-op returning `None`.
    pub fn roll(&mut self, value: Option<u32>) -> Option<u32> {
        if self.lifecycle != Lifecycle::Connected {
            debug!(lifecycle = ?self.lifecycle, "roll ignored, die not connected");
            return None;
        }

        match value {
            Some(value) => {
                let face = self.config.clamp_face(value);
                if face != value {
                    warn!(value, face, "face outside roll range, clamped");
                }
                self.show_face(face);
                None
            }
            None => self.roll_random(),
        }
    }

    fn roll_random(&mut self) -> Option<u32> {
        if self.state.is_exhausted() {
            debug!("roll ignored, budget exhausted");
            return None;
        }

        let value = self
            .rng
            .gen_range(self.config.min_roll..=self.config.max_roll);
        self.surface.dispatch(DieEvent::Selection(value));

        self.state.current_face = value;
        self.surface.set_title(&value.to_string());
        self.surface.set_face(value);

        self.state.rolls_remaining = self.state.rolls_remaining.consume();
        self.state.rolls_performed += 1;
        self.publish_rotation_offset();

        debug!(
            value,
            remaining = %self.state.rolls_remaining,
            rolls = self.state.rolls_performed,
            "die rolled"
        );

        if self.state.is_exhausted() {
            self.schedule_exhausted_palette();
        }
        Some(value)
    }

    /// Timer callback for a scheduled exhausted palette. Stale tokens, a
    /// replenished budget or a torn-down die make this a no-op.
    pub fn on_disable_timer(&mut self, token: DisableToken) {
        if self.lifecycle != Lifecycle::Connected {
            debug!(?token, "disable timer after teardown, ignoring");
            return;
        }
        if token != DisableToken(self.disable_generation) {
            debug!(?token, current = self.disable_generation, "stale disable timer");
            return;
        }
        if self.state.is_exhausted() {
            self.apply_exhausted_palette();
        }
    }

    /// Replace the remaining budget from outside. Any pending disable callback
    /// is invalidated; the configured palette comes back if rolls are allowed
    /// again.
    pub fn reset_budget(&mut self, budget: RollBudget) {
        self.state.rolls_remaining = budget;
        self.disable_generation += 1;
        info!(budget = %budget, "roll budget reset");

        if self.lifecycle != Lifecycle::Connected {
            return;
        }
        if self.state.is_exhausted() {
            self.apply_exhausted_palette();
        } else if self.exhausted_palette {
            let colors = self.config.colors.clone();
            self.apply_palette(&colors);
            self.exhausted_palette = false;
        }
    }

    pub fn disconnect(&mut self) {
        if self.lifecycle == Lifecycle::Connected {
            info!(rolls = self.state.rolls_performed, "die disconnected");
        }
        self.lifecycle = Lifecycle::Disconnected;
    }

    fn show_face(&mut self, face: u32) {
        self.state.current_face = face;
        self.surface.set_title(&face.to_string());
        self.surface.set_face(face);
        if self.state.is_exhausted() {
            self.apply_exhausted_palette();
        }
    }

    fn schedule_exhausted_palette(&mut self) {
        self.disable_generation += 1;
        let delay = Duration::from_millis(self.config.roll_time_millis());
        self.surface
            .schedule_disable(delay, DisableToken(self.disable_generation));
    }

    fn publish_rotation_offset(&mut self) {
        let turns = self.state.rotation_offset_turns(self.config.roll_time);
        self.surface
            .set_style_property("--total-rolls", &format!("{turns}turn"));
    }

    fn apply_exhausted_palette(&mut self) {
        self.apply_palette(&DieColors::exhausted());
        self.exhausted_palette = true;
    }

    fn apply_palette(&mut self, colors: &DieColors) {
        self.surface
            .set_style_property("--die-color-even", &colors.even);
        self.surface.set_style_property("--die-color-odd", &colors.odd);
        self.surface.set_style_property("--dot-color", &colors.dot);
    }
}

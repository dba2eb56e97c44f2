//! Browser binding
//!
//! `WebDie` turns any host element into a die: it reads the host's attributes,
//! renders into an open shadow root, and only then starts listening for
//! clicks. Selections are dispatched on the host as `selection` custom events
//! with the face value as `detail`.
//!
//! Events are queued while the controller is borrowed and fired once the
//! borrow is released, so `selection` listeners may call back into `WebDie`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CustomEvent, CustomEventInit, HtmlElement, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

use crate::widget::controller::DieController;
use crate::widget::surface::{DieSurface, DisableToken};
use crate::widget::types::{DieAttributes, DieEvent, RollBudget};

type SharedController = Rc<RefCell<DieController<DomSurface>>>;

/// Surface over a host element and its shadow root.
pub struct DomSurface {
    host: HtmlElement,
    shadow: ShadowRoot,
    queued: Vec<DieEvent>,
    /// Timers hold this instead of the controller, so a callback that fires
    /// after the die is gone has nothing to upgrade.
    controller: Weak<RefCell<DieController<DomSurface>>>,
}

impl DomSurface {
    fn new(host: HtmlElement, shadow: ShadowRoot) -> Self {
        Self {
            host,
            shadow,
            queued: Vec::new(),
            controller: Weak::new(),
        }
    }
}

/// Run `f` on the controller, then fire whatever it dispatched after the
/// borrow has ended. Returns `None` if the controller is already borrowed.
fn with_controller<T>(
    controller: &SharedController,
    f: impl FnOnce(&mut DieController<DomSurface>) -> T,
) -> Option<T> {
    let (result, host, events) = {
        let Ok(mut die) = controller.try_borrow_mut() else {
            warn!("die is busy, call dropped");
            return None;
        };
        let result = f(&mut die);
        let surface = die.surface_mut();
        (result, surface.host.clone(), std::mem::take(&mut surface.queued))
    };
    for event in events {
        fire(&host, event);
    }
    Some(result)
}

fn fire(host: &HtmlElement, event: DieEvent) {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from(event.value()));
    match CustomEvent::new_with_event_init_dict(event.name(), &init) {
        Ok(custom) => {
            if let Err(err) = host.dispatch_event(&custom) {
                warn!(?err, "failed to dispatch {}", event.name());
            }
        }
        Err(err) => warn!(?err, "failed to create {} event", event.name()),
    }
}

impl DieSurface for DomSurface {
    fn render(&mut self, fragment: &str) {
        self.shadow.set_inner_html(fragment);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.host.style().set_property(name, value) {
            warn!(name, ?err, "failed to set style property");
        }
    }

    fn set_title(&mut self, title: &str) {
        self.host.set_title(title);
    }

    fn set_face(&mut self, face: u32) {
        let Some(die) = self.shadow.get_element_by_id("die") else {
            warn!(face, "die element missing from shadow root");
            return;
        };
        if let Err(err) = die.set_attribute("data-face", &face.to_string()) {
            warn!(face, ?err, "failed to set data-face");
        }
    }

    fn client_height(&self) -> Option<f64> {
        let height = self.host.client_height();
        (height > 0).then_some(height as f64)
    }

    fn dispatch(&mut self, event: DieEvent) {
        self.queued.push(event);
    }

    fn schedule_disable(&mut self, delay: Duration, token: DisableToken) {
        let Some(window) = web_sys::window() else {
            warn!("no window, exhausted palette will not be applied");
            return;
        };

        let controller = self.controller.clone();
        let callback = Closure::once_into_js(move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            with_controller(&controller, |die| die.on_disable_timer(token));
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            millis,
        ) {
            warn!(?err, "failed to schedule exhausted palette");
        }
    }
}

/// A die mounted on a host element.
#[wasm_bindgen]
pub struct WebDie {
    controller: SharedController,
    host: HtmlElement,
    on_click: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl WebDie {
    /// Mount a die on `host`, configured from its attributes
    /// (`maxrollvalue`, `allowedrolls`, `bgcolor`, ...).
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<WebDie, JsValue> {
        console_error_panic_hook::set_once();

        let config = DieAttributes::from_lookup(|name| host.get_attribute(name))
            .parse()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let shadow = match host.shadow_root() {
            Some(shadow) => shadow,
            None => host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
        };

        let controller = DieController::new(config, DomSurface::new(host.clone(), shadow))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let controller: SharedController = Rc::new(RefCell::new(controller));
        {
            let mut die = controller.borrow_mut();
            die.surface_mut().controller = Rc::downgrade(&controller);
            die.connect();
        }

        let weak = Rc::downgrade(&controller);
        let on_click = Closure::wrap(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                with_controller(&controller, |die| die.click());
            }
        }) as Box<dyn FnMut()>);
        host.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        Ok(WebDie {
            controller,
            host,
            on_click: Some(on_click),
        })
    }

    /// Roll the die. With a value the die only turns to that face; without one
    /// it draws a face, dispatches `selection` and returns the value.
    pub fn roll(&self, value: Option<u32>) -> Option<u32> {
        with_controller(&self.controller, |die| die.roll(value)).flatten()
    }

    pub fn value(&self) -> u32 {
        self.read(|die| die.value()).unwrap_or_default()
    }

    /// Remaining rolls, or `undefined` when unlimited.
    #[wasm_bindgen(js_name = rollsRemaining)]
    pub fn rolls_remaining(&self) -> Option<u32> {
        self.read(|die| die.rolls_remaining().remaining()).flatten()
    }

    #[wasm_bindgen(js_name = isExhausted)]
    pub fn is_exhausted(&self) -> bool {
        self.read(|die| die.is_exhausted()).unwrap_or_default()
    }

    /// Replace the roll budget; `undefined` means unlimited.
    #[wasm_bindgen(js_name = resetBudget)]
    pub fn reset_budget(&self, rolls: Option<u32>) {
        with_controller(&self.controller, |die| {
            die.reset_budget(RollBudget::from(rolls))
        });
    }

    /// Stop listening for clicks and ignore any pending timer.
    pub fn disconnect(&mut self) {
        self.detach_listener();
        with_controller(&self.controller, |die| die.disconnect());
    }
}

impl WebDie {
    fn read<T>(&self, f: impl FnOnce(&DieController<DomSurface>) -> T) -> Option<T> {
        match self.controller.try_borrow() {
            Ok(die) => Some(f(&die)),
            Err(_) => {
                warn!("die is busy, read dropped");
                None
            }
        }
    }

    fn detach_listener(&mut self) {
        if let Some(on_click) = self.on_click.take() {
            if let Err(err) = self
                .host
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to remove click listener");
            }
        }
    }
}

impl Drop for WebDie {
    fn drop(&mut self) {
        self.detach_listener();
    }
}

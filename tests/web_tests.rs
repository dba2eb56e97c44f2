//! Browser tests for the `WebDie` binding
//!
//! Run with `wasm-pack test --headless --firefox -- --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, HtmlElement};

use dice3d_widget::widget::web::WebDie;

wasm_bindgen_test_configure!(run_in_browser);

fn host(attributes: &[(&str, &str)]) -> HtmlElement {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let host: HtmlElement = document
        .create_element("div")
        .expect("create host")
        .dyn_into()
        .expect("div is an HtmlElement");
    for (name, value) in attributes {
        host.set_attribute(name, value).expect("set attribute");
    }
    host
}

/// Record the `detail` of every `selection` dispatched on `host`.
fn record_selections(host: &HtmlElement) -> Rc<RefCell<Vec<u32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let listener = Closure::wrap(Box::new(move |event: CustomEvent| {
        let value = event.detail().as_f64().expect("numeric detail") as u32;
        sink.borrow_mut().push(value);
    }) as Box<dyn FnMut(CustomEvent)>);
    host.add_event_listener_with_callback("selection", listener.as_ref().unchecked_ref())
        .expect("add listener");
    listener.forget();
    seen
}

#[wasm_bindgen_test]
fn click_dispatches_one_selection() {
    let host = host(&[("maxrollvalue", "6")]);
    let seen = record_selections(&host);
    let die = WebDie::new(host.clone()).expect("mount die");

    host.click();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!((1..=6).contains(&seen[0]));
    assert_eq!(die.value(), seen[0]);
    assert_eq!(host.title(), seen[0].to_string());
}

#[wasm_bindgen_test]
fn selection_listener_can_read_the_die() {
    let host = host(&[("maxrollvalue", "20"), ("allowedrolls", "3")]);
    let die = Rc::new(WebDie::new(host.clone()).expect("mount die"));

    let observed = Rc::new(RefCell::new(Vec::new()));
    let (reader, sink) = (die.clone(), observed.clone());
    let listener = Closure::wrap(Box::new(move |event: CustomEvent| {
        let detail = event.detail().as_f64().expect("numeric detail") as u32;
        sink.borrow_mut().push((
            detail,
            reader.value(),
            reader.rolls_remaining(),
            reader.is_exhausted(),
        ));
    }) as Box<dyn FnMut(CustomEvent)>);
    host.add_event_listener_with_callback("selection", listener.as_ref().unchecked_ref())
        .expect("add listener");
    listener.forget();

    host.click();
    host.click();
    host.click();

    let observed = observed.borrow();
    assert_eq!(observed.len(), 3);
    for (detail, value, _, _) in observed.iter() {
        assert_eq!(detail, value);
    }
    assert_eq!(observed[0].2, Some(2));
    assert_eq!(observed[2].2, Some(0));
    assert!(observed[2].3);
}

#[wasm_bindgen_test]
fn selection_listener_can_reset_the_budget() {
    let host = host(&[("allowedrolls", "1")]);
    let die = Rc::new(WebDie::new(host.clone()).expect("mount die"));

    let resetter = die.clone();
    let listener = Closure::wrap(Box::new(move |_: CustomEvent| {
        resetter.reset_budget(Some(5));
    }) as Box<dyn FnMut(CustomEvent)>);
    host.add_event_listener_with_callback("selection", listener.as_ref().unchecked_ref())
        .expect("add listener");
    listener.forget();

    host.click();
    assert_eq!(die.rolls_remaining(), Some(5));
    assert!(!die.is_exhausted());
}

#[wasm_bindgen_test]
fn exhausted_die_dispatches_nothing() {
    let host = host(&[("allowedrolls", "0")]);
    let seen = record_selections(&host);
    let die = WebDie::new(host.clone()).expect("mount die");

    host.click();
    host.click();

    assert!(seen.borrow().is_empty());
    assert!(die.is_exhausted());
    assert_eq!(die.roll(None), None);
}

#[wasm_bindgen_test]
fn disconnect_removes_the_click_listener() {
    let host = host(&[("maxrollvalue", "6"), ("initialvalue", "3")]);
    let seen = record_selections(&host);
    let mut die = WebDie::new(host.clone()).expect("mount die");

    die.disconnect();
    host.click();

    assert!(seen.borrow().is_empty());
    assert_eq!(die.value(), 3);
    assert_eq!(die.rolls_remaining(), Some(10_000));
}

#[wasm_bindgen_test]
fn explicit_roll_turns_without_dispatching() {
    let host = host(&[("maxrollvalue", "12")]);
    let seen = record_selections(&host);
    let die = WebDie::new(host.clone()).expect("mount die");

    assert_eq!(die.roll(Some(9)), None);

    assert!(seen.borrow().is_empty());
    assert_eq!(die.value(), 9);
    let face = host
        .shadow_root()
        .and_then(|shadow| shadow.get_element_by_id("die"))
        .and_then(|die| die.get_attribute("data-face"));
    assert_eq!(face.as_deref(), Some("9"));
}

#[wasm_bindgen_test]
fn invalid_attributes_are_rejected() {
    let host = host(&[("minrollvalue", "9"), ("maxrollvalue", "2")]);
    assert!(WebDie::new(host).is_err());
}

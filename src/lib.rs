//! Dice3D Widget
//!
//! An animated polyhedral die for web pages. The die state machine, its
//! configuration and the per-shape markup/stylesheet generation live in
//! [`widget`] and run anywhere; the browser binding is behind the `web`
//! feature.

pub mod widget;

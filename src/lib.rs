//! Turbo Studio — a visual scene editor core for the Turbo DSL.
//!
//! Place text elements on a 2D canvas, preview them live, and emit
//! equivalent `turbo::go! { text!(...) }` source. Three coupled parts share
//! one source of truth:
//!
//! - [`document`] — the ordered scene model and its snapshots
//! - [`codegen`] — deterministic snapshot → DSL source compilation
//! - [`render`] — snapshot replay onto an abstract drawing surface
//!
//! [`api`] fronts the three host-facing operations; [`editor`] is the
//! interactive terminal host shipped with the crate.

pub mod api;
pub mod codegen;
pub mod document;
pub mod editor;
pub mod render;
pub mod types;

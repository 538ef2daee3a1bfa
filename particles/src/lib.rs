//! Decorative particle field for the site's hero and contact backgrounds.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! bounded 2D simulation of wandering particles that bounce off the arena
//! edges and flee the pointer, drawn with proximity connections.
//! The host layer is responsible only for scheduling frames and forwarding
//! pointer and resize events to the [`engine::Engine`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound wrapper around the simulation |
//! | [`field`] | Testable [`field::ParticleField`] core: tick, resize, connections |
//! | [`particle`] | Particle state and the per-tick physics steps |
//! | [`config`] | Host-supplied tuning options and presets |
//! | [`point`] | 2D point type used for positions and the pointer |
//! | [`render`] | Draws a field to a 2D context |
//! | [`consts`] | Shared physics and drawing constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod field;
pub mod particle;
pub mod point;
pub mod render;

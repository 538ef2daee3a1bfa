//! # robeurope-site
//!
//! Client-side behavior for the Robeurope landing page, compiled to
//! WebAssembly. The page markup is static; this crate owns the stateful parts:
//!
//! | Module | Role |
//! |--------|------|
//! | [`about`] | Scroll-driven about section panels |
//! | [`feedback`] | Feedback board: persisted store, modal controller, list rendering |
//! | [`contact`] | Contact form validation and simulated send |
//! | [`carousel`] | Video carousel with phased slide transitions |
//! | [`menu`] | Slide-out navigation menu |
//! | [`notice`] | Transient toast notices |
//! | [`storage`] | Key-value persistence seam (`localStorage` in the browser) |
//! | [`clock`] | Wall-clock seam for ids and dates |
//!
//! The particle backgrounds live in the sibling `particles` crate. With the
//! `hydrate` feature the `web` module binds all of the above to the DOM.

pub mod about;
pub mod carousel;
pub mod clock;
pub mod contact;
pub mod feedback;
pub mod menu;
pub mod notice;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod web;

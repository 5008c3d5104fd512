//! # giftbox
//!
//! Storefront client for gift-box products: catalog loading, the order form
//! flow, notifications, text rendering, and an in-memory stub of the
//! storefront HTTP API used for local development and tests.
//!
//! The catalog screen is a plain state container driven by `&mut self`
//! calls, so any front-end (the bundled terminal one included) can host it.

pub mod config;
pub mod net;
pub mod render;
pub mod screen;
pub mod state;
pub mod stub;

//! MTR Light Rail schedule aggregation service.
//!
//! Polls the public light-rail next-train API, normalises the per-station
//! payloads into a canonical model, and assembles multi-station and
//! route-direction views for presentation layers to render.

pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod domain;
pub mod lrt;
pub mod prefs;
pub mod web;

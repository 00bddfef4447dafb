//! # Starscape
//!
//! Nearby-star catalog builder and 3D starfield scene engine.
//!
//! The crate covers two halves of one pipeline:
//!
//! - **Catalog building**: read the raw star table (CSV), drop stars beyond
//!   the distance cutoff, format the coordinates and write the JSON catalog
//!   sorted by distance, one single-component record per source row.
//! - **Scene engine**: project catalog records to Cartesian light-year
//!   space, derive stars, labels, stalks, neighbour connections and the
//!   reference grid, and keep all of it in sync with the view settings,
//!   the camera and user input, frame by frame.
//!
//! ## Architecture
//!
//! - [`models`]: catalog records, spectral classes and sexagesimal coordinates
//! - [`services`]: catalog builder plus projection, connections, grid,
//!   search, highlight and camera focus computations
//! - [`db`]: catalog repositories (JSON file, in-memory) behind one trait
//! - [`scene`]: scene state, command queue and the frame loop
//! - [`config`]: `starscape.toml` settings with environment overrides
//! - [`http`]: Axum server exposing the catalog (feature `http-server`)

// RepositoryError carries context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod models;
pub mod scene;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

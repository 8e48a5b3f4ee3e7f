//! Time-series stats graph rendering
//!
//! Turns an ordered sequence of samples into gridlines, a smoothed or
//! straight data path and marker discs, ready to be stroked by any 2D
//! drawing surface. An embedded-graphics canvas is included for RGB565
//! displays.
//!
//! It is `#![no_std]` with `extern crate alloc`; float math goes through
//! `libm` so the same code runs on embedded targets and desktop hosts.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod ui;

pub use ui::components::graph;

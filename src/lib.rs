//! Geometry engine for a closed **chain or belt** wrapped around an
//! arbitrary cyclic arrangement of circular sprockets: rotation-direction
//! inference, external/internal tangent computation between neighbors,
//! total belt length and link pitch, and an arc-length sampler that emits
//! evenly spaced link anchor points plus per-sprocket rotation phases for
//! any offset along the belt.
//!
//! Rendering, timing, and input are left to the consumer: build a
//! [`ChainDrive`] once, then call [`ChainDrive::sample`] each frame with
//! an offset derived from elapsed time.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` bindings ([`wasm::ChainDriveJs`]) for
//!   driving the animation from a browser

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod chain;
pub mod errors;
pub mod float_types;
pub mod sampler;
pub mod shapes;
pub mod sprocket;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use chain::{ChainConfig, ChainDrive, SegmentBounds};
pub use errors::DegenerateConfiguration;
pub use sampler::ChainSample;
pub use shapes::link_outline;
pub use sprocket::Sprocket;

#[cfg(feature = "wasm")]
pub mod wasm;

//! # Greekscope Models (the kernel)
//!
//! Closed-form Black-Scholes-Merton pricing and analytical Greeks for
//! European options on a dividend-paying underlying.
//!
//! This crate provides:
//! - Standard normal distribution helpers (`norm_cdf`, `norm_pdf`)
//! - The Black-Scholes-Merton kernel (d1/d2 and call/put prices)
//! - The Greeks engine (Delta, Gamma, Theta, Vega, Rho) with display
//!   scaling conventions
//! - Structured validation errors for out-of-domain parameters
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports `f64` and `f32`
//! - **Pure evaluation**: No shared state; every call reads its own
//!   inputs and allocates its own outputs, so concurrent use needs no
//!   locking
//! - **Validate once**: Parameters are checked at construction, so the
//!   formulas never divide by zero or take a logarithm of a
//!   non-positive number

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;

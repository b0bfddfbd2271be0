//! # Greekscope Risk (parameter sweeps)
//!
//! Repeated independent evaluation of price and Greeks while one
//! parameter is swept over a grid and the others are held fixed.
//!
//! Every sweep point is a fresh, stateless kernel evaluation, so points
//! share no state, results are order-independent, and the whole sweep
//! could be evaluated in any order or in parallel without coordination.
//! Out-of-domain grid points (an expired option, a vanished volatility)
//! are reported as skipped rather than silently patched over; the
//! validity guard lives in the kernel, not here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sweep;

pub use sweep::{linspace, sweep, sweep_over, SkippedPoint, SweepAxis, SweepPoint, SweepResult};

//! A value-or-error container with left-to-right chaining.
//!
//! `Outcome<T, E>` holds exactly one of a value or an error. Fallible stages
//! (`Fn(T) -> Outcome<T, E>`) are chained over it; the first error stops the
//! chain and every later stage is skipped.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  outcome.rs  │────▶│   chain.rs   │────▶│  pipeline.rs  │
//! │  (Outcome,   │     │ (apply, >>,  │     │  (Pipeline,   │
//! │  accessors)  │     │  compose)    │     │  run_traced)  │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     contracts.rs                         │
//! │   (state after transitions, short-circuit, reports)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Properties
//!
//! | Property              | Where it is enforced                            |
//! |-----------------------|-------------------------------------------------|
//! | One live member       | `Outcome` is an enum; layout asserted at build  |
//! | Default is error      | `impl Default for Outcome`                      |
//! | `T == E` unambiguous  | only `From<T>` is implicit; errors are named    |
//! | Short-circuit         | `chain::apply`, `Pipeline::run_traced`          |
//! | Left-to-right         | `>>` associativity, `compose`, `Pipeline`       |
//!
//! # Usage
//!
//! ```
//! use outcome::{Outcome, Pipeline};
//!
//! fn add1(v: i64) -> Outcome<i64, String> { Outcome::from_value(v + 1) }
//! fn times3(v: i64) -> Outcome<i64, String> { Outcome::from_value(v * 3) }
//!
//! let m: Outcome<i64, String> = 1i64.into();
//! assert!((m >> add1 >> times3 >> times3).holds(&18));
//!
//! let pipeline = Pipeline::new().then(add1).then(times3);
//! assert!(pipeline.run_value(1).holds(&6));
//! ```

// Module declarations
pub mod chain;
pub mod contracts;
mod error;
mod outcome;
mod pipeline;
pub mod testing;

// Re-exports for public API
pub use chain::{apply, compose};
pub use error::{InvalidStateAccess, State};
pub use outcome::Outcome;
pub use pipeline::{Pipeline, PipelineReport, StageFailure};

//! buildlight core: watcher contract and status interpretation
//!
//! A watcher polls a CI server through a [`StatusSource`], reduces the
//! project's current activity and last build outcome to one
//! [`IndicatorAction`], and hands it to an [`IndicatorSink`].
//!
//! ## Key Components
//!
//! - `interpret`: the pure decision table
//! - `StatusSource`: the seam CI server kinds plug into
//! - `IndicatorSink`: the seam signaling devices plug into
//! - `Watcher`: one fetch, one decision, one signal per cycle
//!
//! In-memory doubles for both seams live in the `fakes` module.

mod error;
pub mod fakes;
mod interpret;
mod sink;
mod source;
mod status;
pub mod telemetry;
mod watcher;

pub use error::{Result, WatchError};
pub use interpret::interpret;
pub use sink::IndicatorSink;
pub use source::StatusSource;
pub use status::{Activity, BuildOutcome, IndicatorAction, ProjectStatus};
pub use watcher::{Watcher, WatcherConfig};

//! Diagnostics returned alongside a conversion.
//!
//! `ConversionReport` records the resolved plan, what happened to each
//! channel and how long each stage took. Everything serializes to JSON for
//! the command-line tool.

pub mod report;
pub mod timing;

pub use report::{ChannelReport, ChannelStatus, ConversionReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};

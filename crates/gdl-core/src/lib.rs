//! GDL core: turns Google Drive share links into direct-download links.

pub mod config;
pub mod logging;

pub mod batch;
pub mod export;
pub mod link;

pub use batch::{process_batch, BatchEntry, BatchError, BatchReport, ConversionOutcome};
pub use link::{convert, convert_single, SingleLinkError};

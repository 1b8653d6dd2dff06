//! buildlight CCTray: status source for `cc.xml` feeds
//!
//! CruiseControl introduced the `cc.xml` project feed and most CI servers
//! still publish it. This crate fetches the feed over HTTP and extracts
//! one project's activity and last build status for the watcher.

pub mod cc_xml;
pub mod fetcher;
pub mod source;

pub use fetcher::{DocumentFetcher, HttpFetcher, DEFAULT_TIMEOUT};
pub use source::CcTraySource;

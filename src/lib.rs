//! Content pipeline for the Madrid city-guide page.
//!
//! The guide is a static site whose sections are filled in at load time:
//! each section fetches a directory of small JSON content files, groups and
//! ranks the items, and renders them into HTML fragments. This crate holds
//! that whole pipeline — fetch, load, group, rank, render, toggle — behind
//! two seams: [`fetch::Fetch`] for the network and [`mount::Mount`] for the
//! rendering target.

pub mod fetch;
pub mod grouping;
pub mod icons;
pub mod models;
pub mod mount;
pub mod page;
pub mod render;
pub mod sections;
pub mod store;
pub mod toggle;


pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use mount::{MemoryMount, Mount};
pub use page::Guide;
pub use toggle::{UiEvent, ViewMode};

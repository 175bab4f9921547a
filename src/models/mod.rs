//! Data transfer objects for the gist page.
//!
//! These structs are serialized to JSON for the API and fed to the page renderer.
//! - `gist`: GistView, TimeSpan, Author, RunTutorial
//! - `tree`: TreeRow for the reconstructed directory listing

pub mod gist;
pub mod tree;

pub use gist::*;
pub use tree::*;

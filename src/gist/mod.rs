pub mod age;
pub mod composer;
pub mod snippet;
pub mod source;
pub mod tree;

pub use composer::GistComposer;

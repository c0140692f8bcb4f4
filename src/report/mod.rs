//! Report data model.
//!
//! A `Report` is a hierarchy of `Section`s, each carrying `TaskResult`s and
//! rich `ContentBlock`s. Sections declare dependencies on other sections by
//! id and are ordered topologically before rendering.

pub mod block;
pub mod dag;
pub mod model;

pub use block::{ContentBlock, KvPair, ListItem};
pub use model::{NarrativeSection, Report, Section, TaskResult};

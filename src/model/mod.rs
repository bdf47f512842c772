//! Dialect-neutral schema model

mod elements;

pub use elements::{Column, ColumnMetadataSource, Table, UniqueConstraint};

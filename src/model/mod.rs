//! Pure data model: identifiers, columns, layout descriptors, errors.

pub mod column;
pub mod error;
pub mod identifiers;
pub mod layout;

pub use column::{Column, StyleMap};
pub use error::GridError;
pub use identifiers::{ColumnId, RowKey, Slot};
pub use layout::{ColumnLayout, GridLayout};

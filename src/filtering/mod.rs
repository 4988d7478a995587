/*! Row filtering utilities

Filters decide whether a raw row makes it into the generated tables at all:
a rejected row is dropped before persistence, not merely flagged.

[RowFilter] is the pure single-predicate trait, [Validators] holds the
ordered, named predicate registry applied by the table writer.
! */
mod filter;
mod row;

pub use filter::RowFilter;
pub use row::Validators;

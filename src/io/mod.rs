/*! Row table IO

csv reading/writing of the generated tables. The writer side applies the
row validators: rejected rows are dropped before they reach disk.
!*/
pub mod reader;
pub mod writer;

pub use reader::{read_cognates, read_rows};
pub use writer::{CognateWriter, RowWriter};

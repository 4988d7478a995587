pub mod badge;
pub mod dataset;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod markup;
pub mod report;
pub mod row;
pub mod sounds;
pub mod stats;

//! `ft-output` — ranking output writers.
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`writer`] | `RankingWriter` trait                                        |
//! | [`csv`]    | `CsvRankingWriter`, file names and header rows               |
//! | [`error`]  | `OutputError`, `OutputResult<T>`                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ft_output::{CsvRankingWriter, RankingWriter};
//!
//! let mut writer = CsvRankingWriter::new(Path::new("./output"))?;
//! writer.write_rankings(&rankings)?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;


pub use csv::CsvRankingWriter;
pub use error::{OutputError, OutputResult};
pub use writer::RankingWriter;

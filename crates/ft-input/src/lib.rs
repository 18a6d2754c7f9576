//! `ft-input` — readers for the festival and trail relations produced by the
//! upstream cleaning step.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`loader`] | `load_festivals_*`, `load_trails_*`, required column lists |
//! | [`error`]  | `InputError`, `InputResult<T>`                             |

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{
    FESTIVAL_COLUMNS, Relation, TRAIL_COLUMNS, load_festivals_csv, load_festivals_reader,
    load_trails_csv, load_trails_reader,
};

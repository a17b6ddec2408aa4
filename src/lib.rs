pub mod tally_error;
pub mod tally_generator;
pub mod tally_lang;
pub mod tally_multiset;

pub use tally_error::{InputKeyError, KeyRejection};
pub use tally_generator::{render, write_counts};
pub use tally_lang::{Key, Value};
pub use tally_multiset::{tally, try_tally, Tally};

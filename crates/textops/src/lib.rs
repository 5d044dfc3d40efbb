//! textops — small pure string-transformation utilities.
//!
//! Three independent, stateless operations:
//! 1. Run-length encoding of lowercase text (`rle`)
//! 2. Longest substring under a global character-frequency floor (`frequent`)
//! 3. Date normalization into `YYYY-MM-DD` (`date`)
//!
//! Every operation is a pure function over its input string. Nothing here
//! does I/O or keeps state between calls, so concurrent use needs no
//! coordination.

pub mod date;
pub mod error;
pub mod frequent;
pub mod rle;

pub use date::reformat_date;
pub use error::{Result, TextOpsError};
pub use frequent::longest_frequent_substring;
pub use rle::run_length_encode;

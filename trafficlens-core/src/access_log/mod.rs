//! Combined log format parsing.
//!
//! A combined log line looks like this:
//!
//! ```text
//! 203.0.113.5 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 2326 "https://example.org/" "Mozilla/5.0 ..."
//! ```
//!
//! [`parse_line`] turns one such line into a [`LogRecord`] or a
//! [`MalformedLineError`] that names the first field it could not find.
//! The parser holds no state and never touches I/O.

mod error;
mod parse;
mod types;

pub use error::*;
pub use parse::*;
pub use types::*;

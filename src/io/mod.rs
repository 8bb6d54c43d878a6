/*!
# IO

Console input and formatted output for the interactive session.

- [`Console`] asks for values on a [`BufRead`](std::io::BufRead) / [`Write`](std::io::Write) pair
  and re-prompts until the answer is acceptable,
- [`Reporter`] renders graphs and traversal results as text.

Both only ever talk to generic readers and writers, so sessions can be driven from memory in tests.
Failures of the underlying streams are reported as `std::io::Error`; running out of input is
[`ErrorKind::UnexpectedEof`](std::io::ErrorKind::UnexpectedEof).
*/

pub mod console;
pub mod report;

pub use console::*;
pub use report::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;

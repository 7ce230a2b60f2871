//! Diagnostic printing. The only side effect in the crate.

use std::io::{self, Write};

use crate::Scalar;

/// Write `name` on one line and the lanes, space separated with six
/// decimals, on the next.
pub fn write_labeled<W: Write, S: Scalar>(out: &mut W, name: &str, lanes: &[S]) -> io::Result<()> {
    writeln!(out, "{name}")?;
    for (i, lane) in lanes.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{lane:.6}")?;
    }
    writeln!(out)
}

/// [`write_labeled`] to stdout. Write errors are ignored.
pub(crate) fn print<S: Scalar>(name: &str, lanes: &[S]) {
    let mut out = io::stdout().lock();
    let _ = write_labeled(&mut out, name, lanes);
}

//! Print the lines produced by `echo`.

use std::io::{self, Write};

pub fn emit<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

use std::fmt::{Display, Write as _};
use std::hash::Hash;
use std::io::{self, Write};

use crate::tally_multiset::Tally;

/// Formats a tally as `Counts: {k: n, ...}`, most common first.
pub fn render<K: Display + Ord + Hash>(counts: &Tally<K>) -> String {
    let mut line = String::from("Counts: {");
    for (i, (key, count)) in counts.most_common().into_iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        // writing into a String cannot fail
        let _ = write!(line, "{}: {}", key, count);
    }
    line.push('}');
    line
}

/// Writes the rendered line followed by a newline.
pub fn write_counts<K, W>(counts: &Tally<K>, mut out: W) -> io::Result<()>
where
    K: Display + Ord + Hash,
    W: Write,
{
    writeln!(out, "{}", render(counts))
}

//! The line reducer: one left-moving slide of a single row.
//!
//! A slide is compress, merge, compress. Each stage reports whether it
//! changed its own input; the reducer as a whole reports whether the final
//! line differs from the line it was given.

use crate::core::Tile;

/// Points earned by merges.
pub type Score = u64;

/// Result of sliding one line to the left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Vec<Tile>,
    pub score: Score,
    pub changed: bool,
}

/// The tile two neighbours combine into, if they can merge.
///
/// Equal non-zero tiles merge unless doubling would overflow a [`Tile`].
#[must_use]
pub fn merged_value(a: Tile, b: Tile) -> Option<Tile> {
    if a != 0 && a == b {
        a.checked_mul(2)
    } else {
        None
    }
}

/// Move every non-zero tile to the front, keeping their order.
pub fn compress(line: &[Tile]) -> (Vec<Tile>, bool) {
    let mut out: Vec<Tile> = line.iter().copied().filter(|&t| t != 0).collect();
    out.resize(line.len(), 0);
    let changed = out.as_slice() != line;
    (out, changed)
}

/// Combine equal neighbours in a single left-to-right pass.
///
/// A merged tile is never merged again in the same pass, so `[2, 2, 4]`
/// becomes `[4, 4, 0]`, not `[8, 0, 0]`. Empty cells are skipped without
/// producing output; callers compress first.
pub fn merge(line: &[Tile]) -> (Vec<Tile>, Score, bool) {
    let n = line.len();
    let mut out = vec![0; n];
    let mut score: Score = 0;
    let mut write = 0;
    let mut read = 0;

    while read < n {
        let current = line[read];
        if current == 0 {
            read += 1;
            continue;
        }

        match line.get(read + 1).and_then(|&next| merged_value(current, next)) {
            Some(merged) => {
                out[write] = merged;
                score = score.saturating_add(merged);
                read += 2;
            }
            None => {
                out[write] = current;
                read += 1;
            }
        }
        write += 1;
    }

    let changed = out.as_slice() != line;
    (out, score, changed)
}

/// Slide a line to the left: compress, merge, compress again.
pub fn reduce_line(line: &[Tile]) -> LineOutcome {
    let (compressed, _) = compress(line);
    let (merged, score, _) = merge(&compressed);
    let (reduced, _) = compress(&merged);

    let changed = reduced.as_slice() != line;
    LineOutcome {
        line: reduced,
        score,
        changed,
    }
}

//! Levenshtein distance over CDR3 amino-acid sequences.
//!
//! Sequences are compared byte-wise. No amino-acid alphabet check is
//! applied; any string is accepted and compared as-is, matching the
//! behavior of the reference databases this tool queries.

/// Minimum number of single-character insertions, deletions, or
/// substitutions needed to turn `a` into `b`.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic program; prev[j] is the distance between a[..i] and
    // b[..j] from the previous outer iteration.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Whether `a` and `b` are within `max_mismatches` edits of each other.
#[must_use]
pub fn within(a: &str, b: &str, max_mismatches: usize) -> bool {
    levenshtein(a, b) <= max_mismatches
}

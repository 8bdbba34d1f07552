//! String similarity based on Levenshtein edit distance.

/// Levenshtein distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // (len(a) + 1) x (len(b) + 1) table; row i holds distances for a[..i].
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1]
                    .min(table[i - 1][j])
                    .min(table[i][j - 1])
            };
        }
    }

    table[a.len()][b.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / len(longer)`.
///
/// Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    let (longer, shorter, longer_len) = if len_a >= len_b {
        (a, b, len_a)
    } else {
        (b, a, len_b)
    };

    if longer_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein(longer, shorter) as f64 / longer_len as f64
}

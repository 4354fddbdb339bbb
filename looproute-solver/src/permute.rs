//! Lexicographic permutation enumeration.
//!
//! The brute-force search relies on a fixed enumeration order for its
//! tie-break guarantee, so permutations are generated lexicographically over
//! the index sequence `0..n` rather than in an arbitrary order.

/// Iterator over all permutations of `0..n` in lexicographic order.
pub(crate) struct Permutations {
    next: Option<Vec<usize>>,
}

/// Enumerate permutations of `0..n` lexicographically, starting with the
/// identity.
pub(crate) fn lexicographic(n: usize) -> Permutations {
    Permutations {
        next: Some((0..n).collect()),
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if advance(&mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }
}

/// Step `v` to its lexicographic successor in place.
///
/// Returns `false` when `v` is already the final (descending) permutation.
fn advance(v: &mut [usize]) -> bool {
    if v.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix; the element before it is the pivot.
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    // Rightmost element greater than the pivot.
    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_three_elements_in_lexicographic_order() {
        let orders: Vec<Vec<usize>> = lexicographic(3).collect();
        assert_eq!(
            orders,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(lexicographic(1).count(), 1);
        assert_eq!(lexicographic(2).count(), 2);
        assert_eq!(lexicographic(4).count(), 24);
        assert_eq!(lexicographic(5).count(), 120);
    }

    #[test]
    fn zero_elements_yield_one_empty_permutation() {
        let orders: Vec<Vec<usize>> = lexicographic(0).collect();
        assert_eq!(orders, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn enumeration_is_repeatable() {
        let first: Vec<Vec<usize>> = lexicographic(4).collect();
        let second: Vec<Vec<usize>> = lexicographic(4).collect();
        assert_eq!(first, second);
    }
}

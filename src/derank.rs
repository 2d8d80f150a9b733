// Tournament arg-min over the children of a heap node.
//
// Fixed brackets cover the arities the frontier uses. Other lengths fall back
// to a linear scan.

/// Core comparison and index selection
///
/// Ties go left, so earlier children win.
#[inline(always)]
#[must_use]
fn fight<T: PartialOrd>(a: &[T], l: usize, r: usize) -> usize {
    if a[l] <= a[r] { l } else { r }
}

#[inline(always)]
#[must_use]
fn derank_2<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 2);
    fight(a, 0, 1)
}

// [0 1] 2
#[inline(always)]
#[must_use]
fn derank_3<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 3);
    fight(a, derank_2(&a[..2]), 2)
}

// [0 1] [2 3]
#[inline(always)]
#[must_use]
fn derank_4<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 4);
    fight(a, derank_2(&a[..2]), derank_2(&a[2..]) + 2)
}

/// Index of the smallest element, preferring the leftmost among equals.
#[inline(always)]
#[must_use]
pub fn derank<T: PartialOrd>(a: &[T]) -> usize {
    match a.len() {
        1 => 0usize,
        2 => derank_2(a),
        3 => derank_3(a),
        4 => derank_4(a),
        _ => linear_min_index(a),
    }
}

/// Reference arg-min, one comparison per element.
pub fn linear_min_index<T: PartialOrd>(xs: &[T]) -> usize {
    assert!(!xs.is_empty());
    (1..xs.len()).fold(0, |best, i| fight(xs, best, i))
}

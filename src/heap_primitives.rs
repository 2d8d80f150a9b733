// Index arithmetic for implicit d-ary heaps.
//
// A heap is a tree-like structure where every subtree's root has a better score
// than all the other nodes in the subtree. It lives in a flat array that's
// traversed in a non-linear way. For a 4-ary heap these are the indices,
//
// ```text
//                                  0
//           1              2                3               4
//     5  6  7  8     9 10 11 12     13 14 15 16     17 18 19 20
// ```
//
// The last level will often be incomplete.
//
// With arity `A` you can go up, to the first children, and to the last
// children of any index with,
//   - Up:          `(i-1)//A`
//   - First child: `(A*i) + 1`
//   - Last child:  `A*(i+1)`

/// The parent node
///
/// ```
/// use wayfinder::heap_primitives::index_parent;
/// assert_eq!(index_parent::<2>(1), 0);
/// assert_eq!(index_parent::<2>(2), 0);
/// assert_eq!(index_parent::<2>(25), 12);
/// assert_eq!(index_parent::<4>(4), 0);
/// assert_eq!(index_parent::<4>(5), 1);
/// assert_eq!(index_parent::<4>(20), 4);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const A: usize>(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / A
}

/// The first children
///
/// ```
/// use wayfinder::heap_primitives::index_first_children;
/// assert_eq!(index_first_children::<2>(0), 1);
/// assert_eq!(index_first_children::<2>(11), 23);
/// assert_eq!(index_first_children::<4>(0), 1);
/// assert_eq!(index_first_children::<4>(1), 5);
/// assert_eq!(index_first_children::<4>(4), 17);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_children<const A: usize>(i: usize) -> usize {
    (A * i) + 1
}

/// The last children
///
/// ```
/// use wayfinder::heap_primitives::index_last_children;
/// assert_eq!(index_last_children::<2>(0), 2);
/// assert_eq!(index_last_children::<2>(6), 14);
/// assert_eq!(index_last_children::<4>(0), 4);
/// assert_eq!(index_last_children::<4>(1), 8);
/// assert_eq!(index_last_children::<4>(4), 20);
/// ```
#[inline(always)]
#[must_use]
pub fn index_last_children<const A: usize>(i: usize) -> usize {
    A * (i + 1)
}

//! Partial application.

/// Fix the first argument of a two-argument function.
///
/// ```
/// use molt_util::partial;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_ten = partial(add, 10);
/// assert_eq!(add_ten(5), 15);
/// ```
pub fn partial<A, B, R, F>(f: F, first: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |second| f(first.clone(), second)
}

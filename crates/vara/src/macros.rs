#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        size_of::<$t>()
    };
}

/// Constructs a [`DynVec`](crate::DynVec) from a list of values or from
/// `value; count`. Both forms allocate, so both yield a `Result`.
///
/// ```
/// use vara::dyn_vec;
///
/// let filled = dyn_vec![3u32; 7].unwrap();
/// let listed = dyn_vec![1, 2, 3].unwrap();
/// assert_eq!(filled.len(), 7);
/// assert_eq!(listed.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! dyn_vec {
    ($value:expr; $n:expr) => {
        $crate::DynVec::with_len($n, $value)
    };
    [$($elem:expr),+ $(,)?] => {
        $crate::DynVec::from_array([$($elem),+])
    };
}

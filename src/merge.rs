/// Capability required of every element stored in an [`AvlTree`](crate::AvlTree).
///
/// The tree orders elements with [`Ord`] and never stores two elements
/// that compare equal. When an insert meets an element that is already
/// present, the resident element absorbs the incoming one through
/// [`Merge::merge`] instead of a second node being created.
///
/// # Contract
///
/// Implementations must satisfy:
/// - **Key stability:** merging never changes how `self` orders against
///   other elements.
/// - **Idempotency:** merging data that is already present adds nothing.
/// - **Order preservation:** associated values keep their first-seen order.
pub trait Merge {
    /// Absorb `other`'s associated data into `self`.
    ///
    /// Only meaningful when `self` and `other` compare equal; callers
    /// outside the tree should treat unequal keys as a no-op.
    fn merge(&mut self, other: Self);
}

macro_rules! merge_keeps_resident {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                #[inline]
                fn merge(&mut self, _other: Self) {}
            }
        )*
    };
}

// Plain keys carry no payload, so the resident value wins.
merge_keeps_resident!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

impl Merge for alloc::string::String {
    #[inline]
    fn merge(&mut self, _other: Self) {}
}

impl Merge for &str {
    #[inline]
    fn merge(&mut self, _other: Self) {}
}

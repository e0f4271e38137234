use crate::Text;

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for [u8] {}
    impl Sealed for crate::Text {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Types that can look up an entry of a [`Dict`](crate::Dict).
///
/// Keys are compared by their raw bytes, so `"name"`, `b"name"` and a
/// decoded [`Text`] all find the same entry.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn key_bytes(&self) -> &[u8];
}

impl Index for str {
    #[inline]
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Index for String {
    #[inline]
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Index for [u8] {
    #[inline]
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl Index for Text {
    #[inline]
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn key_bytes(&self) -> &[u8] {
        (**self).key_bytes()
    }
}

//! List entries

use heapless::String;

/// Anything with a display name can be listed
pub trait Entry {
    fn name(&self) -> &str;
}

impl Entry for str {
    fn name(&self) -> &str {
        self
    }
}

impl<const N: usize> Entry for String<N> {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<E: Entry + ?Sized> Entry for &E {
    fn name(&self) -> &str {
        (**self).name()
    }
}

//! Versioned values for change tracking on synchronized state.

/// Value that bumps its version whenever it actually changes.
///
/// Setting a value equal to the current one is a no-op, which is what keeps
/// redundant updates off the wire.
///
/// # Example
/// ```ignore
/// let mut shims = Versioned::new(true);
/// assert!(!shims.set(true));
/// assert!(shims.set(false));
/// assert_eq!(shims.version(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    value: T,
    version: u32,
}

impl<T> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl<T: PartialEq> Versioned<T> {
    /// Set a new value, bumping the version if it differs.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, new_value: T) -> bool {
        if self.value != new_value {
            self.value = new_value;
            self.version = self.version.wrapping_add(1);
            true
        } else {
            false
        }
    }
}

impl<T: Default> Default for Versioned<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_flag() {
        let mut value = Versioned::new(true);
        assert_eq!(value.version(), 0);

        assert!(!value.set(true));
        assert_eq!(value.version(), 0);

        assert!(value.set(false));
        assert_eq!(value.version(), 1);
        assert!(!*value.get());
    }

    #[test]
    fn test_versioned_counts_changes() {
        let mut value = Versioned::new(0.2f32);
        value.set(0.3);
        value.set(0.3);
        value.set(0.2);
        assert_eq!(value.version(), 2);
        assert_eq!(*value.get(), 0.2);
    }
}

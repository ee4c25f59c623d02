//! FILENAME: core/session/src/signal.rs
// PURPOSE: A minimal observable cell. The UI re-renders a binding when its
//          version moves.

#[derive(Debug, Clone, Default)]
pub struct Signal<T> {
    value: T,
    version: u64,
}

impl<T: PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Signal { value, version: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value. Returns true (and bumps the version) only when it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        true
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

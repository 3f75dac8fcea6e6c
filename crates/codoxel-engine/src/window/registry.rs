use std::collections::HashMap;
use std::hash::Hash;

/// Result of removing a window from the registry.
#[derive(Debug)]
pub struct Closed<V> {
    pub entry: V,

    /// `true` exactly once: when this removal emptied the registry.
    pub stop: bool,
}

/// Owned collection of open windows keyed by window id.
///
/// Tracks the "stop" signal: the event loop must end when the last open window
/// is removed, and that signal is raised only once per registry.
#[derive(Debug)]
pub struct WindowRegistry<K, V> {
    entries: HashMap<K, V>,
    stopped: bool,
}

impl<K, V> WindowRegistry<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stopped: false,
        }
    }

    pub fn insert(&mut self, id: K, entry: V) {
        self.entries.insert(id, entry);
    }

    pub fn get_mut(&mut self, id: &K) -> Option<&mut V> {
        self.entries.get_mut(id)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the stop signal has been raised.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Removes a window. Unknown ids (already closed) return `None`.
    pub fn close(&mut self, id: &K) -> Option<Closed<V>> {
        let entry = self.entries.remove(id)?;
        let stop = self.entries.is_empty() && self.raise_stop();
        Some(Closed { entry, stop })
    }

    /// Raises the stop signal if it was not raised yet.
    ///
    /// Used directly when no window could be opened at all.
    pub fn raise_stop(&mut self) -> bool {
        !std::mem::replace(&mut self.stopped, true)
    }

    /// Removes every remaining window; used while the event loop is shutting down.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        self.stopped = true;
        self.entries.drain().collect()
    }
}

impl<K, V> Default for WindowRegistry<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_only_window_stops_once() {
        let mut reg = WindowRegistry::new();
        reg.insert(1u32, "main");

        let closed = reg.close(&1).unwrap();
        assert_eq!(closed.entry, "main");
        assert!(closed.stop);
        assert!(reg.stopped());

        // A second close event for the same window is a no-op.
        assert!(reg.close(&1).is_none());
        assert!(!reg.raise_stop());
    }

    #[test]
    fn two_windows_stop_only_after_both_close() {
        let mut reg = WindowRegistry::new();
        reg.insert(1u32, "a");
        reg.insert(2u32, "b");

        let first = reg.close(&2).unwrap();
        assert_eq!(first.entry, "b");
        assert!(!first.stop);
        assert!(!reg.stopped());
        assert_eq!(reg.len(), 1);

        let last = reg.close(&1).unwrap();
        assert!(last.stop);
        assert!(reg.is_empty());
    }

    #[test]
    fn raise_stop_without_windows() {
        let mut reg: WindowRegistry<u32, ()> = WindowRegistry::default();
        assert!(reg.raise_stop());
        assert!(!reg.raise_stop());
    }

    #[test]
    fn drain_empties_and_stops() {
        let mut reg = WindowRegistry::new();
        reg.insert(1u32, 'x');
        reg.insert(2u32, 'y');

        let mut drained: Vec<_> = reg.drain().into_iter().map(|(k, _)| k).collect();
        drained.sort();
        assert_eq!(drained, vec![1, 2]);
        assert!(reg.is_empty());
        assert!(reg.stopped());
    }
}

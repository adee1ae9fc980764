//! Observable value holder backing the hook state.

use tokio::sync::watch;

/// A shared value with replace-on-write semantics.
///
/// Writers overwrite the whole value; there is no partial mutation. Readers
/// either take a snapshot with [`Reactive::get`] or observe replacements
/// through [`Reactive::subscribe`].
#[derive(Debug)]
pub struct Reactive<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Reactive<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replaces the current value wholesale.
    pub fn replace(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Watch for replacements.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Reactive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

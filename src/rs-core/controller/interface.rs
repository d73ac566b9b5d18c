use std::{cell::Cell, rc::Rc};

/// Keeps track of whether the player's interface should be hidden.
///
/// The interface is visible as long as the pointer moved over the player in the
/// last configured delay. Each movement cancels the pending hide timer and
/// schedules a new one, so only one is ever pending.
pub(crate) struct InterfaceVisibility<T> {
    /// Shared with the pending timer's callback, which sets it to `true` once
    /// the quiet period elapsed.
    is_hidden: Rc<Cell<bool>>,

    /// Handle to the pending hide timer, if one.
    hide_timer: Option<T>,
}

impl<T> InterfaceVisibility<T> {
    pub(crate) fn new() -> Self {
        Self {
            is_hidden: Rc::new(Cell::new(false)),
            hide_timer: None,
        }
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.is_hidden.get()
    }

    pub(crate) fn has_pending_timer(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Mark the interface as visible and re-arm the hide timer.
    ///
    /// `schedule` is given the callback to run once the delay elapsed and
    /// returns the corresponding timer handle.
    pub(crate) fn on_activity(&mut self, schedule: impl FnOnce(Box<dyn FnOnce()>) -> T) {
        self.is_hidden.set(false);

        // Dropping the previous handle cancels it before the new one exists.
        self.hide_timer = None;

        let is_hidden = Rc::clone(&self.is_hidden);
        self.hide_timer = Some(schedule(Box::new(move || is_hidden.set(true))));
    }

    /// Cancel the pending hide timer, if one.
    pub(crate) fn cancel(&mut self) {
        self.hide_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    type Pending = Rc<RefCell<Vec<(Rc<Cell<bool>>, Option<Box<dyn FnOnce()>>)>>>;

    fn scheduler(pending: &Pending) -> impl FnOnce(Box<dyn FnOnce()>) -> FakeTimer {
        let pending = Rc::clone(pending);
        move |callback| {
            let cancelled = Rc::new(Cell::new(false));
            pending
                .borrow_mut()
                .push((Rc::clone(&cancelled), Some(callback)));
            FakeTimer { cancelled }
        }
    }

    fn fire_all(pending: &Pending) {
        let callbacks: Vec<Box<dyn FnOnce()>> = pending
            .borrow_mut()
            .iter_mut()
            .filter(|(cancelled, _)| !cancelled.get())
            .filter_map(|(_, cb)| cb.take())
            .collect();
        callbacks.into_iter().for_each(|cb| cb());
    }

    #[test]
    fn test_starts_visible() {
        let visibility = InterfaceVisibility::<FakeTimer>::new();
        assert!(!visibility.is_hidden());
        assert!(!visibility.has_pending_timer());
    }

    #[test]
    fn test_hides_when_timer_fires() {
        let pending: Pending = Rc::new(RefCell::new(vec![]));
        let mut visibility = InterfaceVisibility::new();
        visibility.on_activity(scheduler(&pending));
        assert!(!visibility.is_hidden());
        fire_all(&pending);
        assert!(visibility.is_hidden());
    }

    #[test]
    fn test_rearming_cancels_previous_timer() {
        let pending: Pending = Rc::new(RefCell::new(vec![]));
        let mut visibility = InterfaceVisibility::new();
        visibility.on_activity(scheduler(&pending));
        visibility.on_activity(scheduler(&pending));
        {
            let pending = pending.borrow();
            assert_eq!(pending.len(), 2);
            assert!(pending[0].0.get());
            assert!(!pending[1].0.get());
        }
    }

    #[test]
    fn test_activity_shows_interface_again() {
        let pending: Pending = Rc::new(RefCell::new(vec![]));
        let mut visibility = InterfaceVisibility::new();
        visibility.on_activity(scheduler(&pending));
        fire_all(&pending);
        assert!(visibility.is_hidden());
        visibility.on_activity(scheduler(&pending));
        assert!(!visibility.is_hidden());
    }

    #[test]
    fn test_cancel() {
        let pending: Pending = Rc::new(RefCell::new(vec![]));
        let mut visibility = InterfaceVisibility::new();
        visibility.on_activity(scheduler(&pending));
        visibility.cancel();
        assert!(!visibility.has_pending_timer());
        fire_all(&pending);
        assert!(!visibility.is_hidden());
    }
}

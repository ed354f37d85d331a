use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::navigation::state::NavAction;

/// Something that reports the page's vertical scroll offset and notifies
/// listeners whenever it changes.
pub trait ScrollSource {
    fn vertical_offset(&self) -> f64;

    /// Registers `listener`; it is called with the current offset on every
    /// scroll notification until the returned subscription is dropped.
    fn subscribe(&self, listener: Box<dyn Fn(f64)>) -> ScrollSubscription;
}

/// Keeps a listener registered for as long as it is alive.
#[must_use = "dropping the subscription removes the listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription that never delivers anything.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Feeds every offset `source` reports into `dispatch` as a scroll action.
pub fn track_scroll<S: ScrollSource>(
    source: &S,
    dispatch: impl Fn(NavAction) + 'static,
) -> ScrollSubscription {
    source.subscribe(Box::new(move |offset| dispatch(NavAction::Scrolled(offset))))
}

/// The browser window's `scroll` event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn vertical_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, listener: Box<dyn Fn(f64)>) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll tracking disabled");
            return ScrollSubscription::detached();
        };

        let source = *self;
        let callback = Closure::<dyn Fn()>::new(move || {
            listener(source.vertical_offset());
        });

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Failed to register scroll listener");
            return ScrollSubscription::detached();
        }

        ScrollSubscription::new(move || {
            // The closure must outlive the registration, so it moves in here.
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                callback.as_ref().unchecked_ref(),
            );
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Listeners = Rc<RefCell<Vec<(usize, Rc<dyn Fn(f64)>)>>>;

    /// In-memory scroll source driven by the test.
    #[derive(Default)]
    pub struct ManualScroll {
        offset: Cell<f64>,
        next_id: Cell<usize>,
        listeners: Listeners,
    }

    impl ManualScroll {
        pub fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            let listeners: Vec<Rc<dyn Fn(f64)>> =
                self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
            for listener in listeners {
                listener(offset);
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for ManualScroll {
        fn vertical_offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, listener: Box<dyn Fn(f64)>) -> ScrollSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, Rc::from(listener)));

            let listeners = self.listeners.clone();
            ScrollSubscription::new(move || {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScroll;
    use super::*;
    use crate::navigation::state::NavViewState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn follow(source: &ManualScroll, state: &Rc<Cell<NavViewState>>) -> ScrollSubscription {
        let state = state.clone();
        track_scroll(source, move |action| state.set(state.get().apply(action)))
    }

    #[test]
    fn test_notifications_update_scrolled() {
        let source = ManualScroll::default();
        let state = Rc::new(Cell::new(NavViewState::default()));
        let _subscription = follow(&source, &state);

        source.scroll_to(120.0);
        assert!(state.get().scrolled);
        source.scroll_to(0.0);
        assert!(!state.get().scrolled);
        assert_eq!(source.vertical_offset(), 0.0);
    }

    #[test]
    fn test_dropped_subscription_stops_updates() {
        let source = ManualScroll::default();
        let state = Rc::new(Cell::new(NavViewState::default()));
        let subscription = follow(&source, &state);

        source.scroll_to(50.0);
        assert!(state.get().scrolled);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        assert!(state.get().scrolled);
    }

    #[test]
    fn test_dropping_one_subscription_keeps_the_other() {
        let source = ManualScroll::default();
        let first = Rc::new(Cell::new(NavViewState::default()));
        let second = Rc::new(Cell::new(NavViewState::default()));
        let first_sub = follow(&source, &first);
        let _second_sub = follow(&source, &second);

        drop(first_sub);
        source.scroll_to(80.0);
        assert!(!first.get().scrolled);
        assert!(second.get().scrolled);
    }

    #[test]
    fn test_release_runs_exactly_once() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _subscription = ScrollSubscription::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);

        drop(ScrollSubscription::detached());
        assert_eq!(released.get(), 1);
    }
}

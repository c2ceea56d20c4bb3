use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Calls the wrapped callback once `wait_ms` have passed without another
/// call. Dropping the pending [`Timeout`] cancels it.
pub struct Debounced<T> {
    wait_ms: u32,
    callback: Rc<dyn Fn(T)>,
    pending: RefCell<Option<Timeout>>,
}

impl<T: 'static> Debounced<T> {
    pub fn new(wait_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, arg: T) {
        if self.wait_ms == 0 {
            (self.callback)(arg);
            return;
        }
        let callback = self.callback.clone();
        let timeout = Timeout::new(self.wait_ms, move || callback(arg));
        // Replacing drops, and so cancels, the previous timer.
        self.pending.borrow_mut().replace(timeout);
    }
}

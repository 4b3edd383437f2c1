/// A registered listener that detaches itself exactly once, either through
/// [`Subscription::dispose`] or when dropped.
pub struct Subscription {
    name: &'static str,
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(name: &'static str, dispose: impl FnOnce() + 'static) -> Self {
        tracing::debug!("{name}: attach");
        Self {
            name,
            dispose: Some(Box::new(dispose)),
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.dispose.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            tracing::debug!("{}: detach", self.name);
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(counter: &Rc<Cell<u32>>) -> Subscription {
        let counter = Rc::clone(counter);
        Subscription::new("test", move || counter.set(counter.get() + 1))
    }

    #[test]
    fn drop_runs_disposer_once() {
        let detached = Rc::new(Cell::new(0));
        {
            let subscription = counting(&detached);
            assert!(subscription.is_active());
        }
        assert_eq!(detached.get(), 1);
    }

    #[test]
    fn explicit_dispose_is_not_repeated_on_drop() {
        let detached = Rc::new(Cell::new(0));
        let mut subscription = counting(&detached);
        subscription.dispose();
        subscription.dispose();
        assert!(!subscription.is_active());
        drop(subscription);
        assert_eq!(detached.get(), 1);
    }
}

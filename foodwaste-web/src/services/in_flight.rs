use std::cell::RefCell;
use std::rc::Rc;

/// Marks a form as busy for as long as the guard lives.
///
/// The shared flag is checked and set synchronously, so a second click that
/// lands before the next render is still refused. Dropping the guard clears
/// the flag and reports `false`, whatever path the request took.
pub struct InFlight {
    flag: Rc<RefCell<bool>>,
    on_change: Box<dyn Fn(bool)>,
}

impl InFlight {
    /// Claims the flag, or returns `None` when a request is already running.
    pub fn try_begin(flag: &Rc<RefCell<bool>>, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        on_change(true);
        Some(Self {
            flag: Rc::clone(flag),
            on_change: Box::new(on_change),
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.replace(false);
        (self.on_change)(false);
    }
}

impl std::fmt::Debug for InFlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlight")
            .field("flag", &self.flag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        (events, move |busy| sink.borrow_mut().push(busy))
    }

    #[test]
    fn guard_reports_busy_then_ready() {
        let flag = Rc::new(RefCell::new(false));
        let (events, on_change) = recorder();
        {
            let _guard = InFlight::try_begin(&flag, on_change).expect("flag was free");
            assert!(*flag.borrow());
        }
        assert!(!*flag.borrow());
        assert_eq!(*events.borrow(), vec![true, false]);
    }

    #[test]
    fn second_attempt_is_refused_while_busy() {
        let flag = Rc::new(RefCell::new(false));
        let (events, on_change) = recorder();
        let first = InFlight::try_begin(&flag, on_change);
        assert!(first.is_some());

        let (second_events, second_change) = recorder();
        assert!(InFlight::try_begin(&flag, second_change).is_none());
        assert!(second_events.borrow().is_empty());

        drop(first);
        assert_eq!(*events.borrow(), vec![true, false]);
        assert!(InFlight::try_begin(&flag, |_| {}).is_some());
    }

    #[test]
    fn guard_resets_when_the_attempt_fails() {
        fn attempt(flag: &Rc<RefCell<bool>>) -> Result<(), &'static str> {
            let _guard = InFlight::try_begin(flag, |_| {}).ok_or("busy")?;
            Err("server unavailable")
        }

        let flag = Rc::new(RefCell::new(false));
        assert_eq!(attempt(&flag), Err("server unavailable"));
        assert!(!*flag.borrow());
    }
}

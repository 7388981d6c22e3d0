/// Flag toggled on the active slide and its indicator.
pub const ACTIVE: &str = "active";

/// The slice of an element the animation code is allowed to touch.
///
/// The browser implementation lives in `dom::element`; tests use
/// `fake::FakeElement`.
pub trait ViewHandle {
    /// Sets or clears a named visual state flag.
    fn set_flag(&self, flag: &str, on: bool);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

#[cfg(test)]
pub mod fake {
    use super::ViewHandle;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct Inner {
        name: String,
        flags: RefCell<BTreeSet<String>>,
        text: RefCell<String>,
        history: RefCell<Vec<String>>,
    }

    /// In-memory element. Clones share state; equality is identity.
    #[derive(Clone, Default)]
    pub struct FakeElement(Rc<Inner>);

    impl FakeElement {
        pub fn named(name: &str) -> Self {
            Self(Rc::new(Inner {
                name: name.to_string(),
                ..Default::default()
            }))
        }

        pub fn with_text(name: &str, text: &str) -> Self {
            let el = Self::named(name);
            *el.0.text.borrow_mut() = text.to_string();
            el
        }

        pub fn has_flag(&self, flag: &str) -> bool {
            self.0.flags.borrow().contains(flag)
        }

        /// Every text written through `set_text`, in order.
        pub fn history(&self) -> Vec<String> {
            self.0.history.borrow().clone()
        }
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl std::fmt::Debug for FakeElement {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "FakeElement({})", self.0.name)
        }
    }

    impl ViewHandle for FakeElement {
        fn set_flag(&self, flag: &str, on: bool) {
            let mut flags = self.0.flags.borrow_mut();
            if on {
                flags.insert(flag.to_string());
            } else {
                flags.remove(flag);
            }
        }

        fn text(&self) -> String {
            self.0.text.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.0.text.borrow_mut() = text.to_string();
            self.0.history.borrow_mut().push(text.to_string());
        }
    }

    pub fn elements(prefix: &str, count: usize) -> Vec<FakeElement> {
        (0..count)
            .map(|i| FakeElement::named(&format!("{prefix}-{i}")))
            .collect()
    }
}

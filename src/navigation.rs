// Standard Library Imports
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

// External Crate Imports
use dioxus::logger::tracing::debug;

// Public API ==========================================================================================================

/// Something that can move the UI shell to a new path, typically a router owned by the application.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// The navigation capability handed down to components as context. Components never talk to a concrete router, they
/// just ask whichever `Navigator` the shell provided to `go()` somewhere.
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigator>);

impl Navigation {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn go(&self, path: &str) {
        debug!(path, "navigating");
        self.0.navigate_to(path);
    }
}

impl Debug for Navigation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        #[derive(Debug)]
        struct Navigator;

        f.debug_tuple("Navigation").field(&Navigator).finish()
    }
}

// Unit Tests ==========================================================================================================

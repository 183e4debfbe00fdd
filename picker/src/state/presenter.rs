// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use super::ColorSnapshot;

/// Abstraction for the rendering surface (DOM, TUI, test recorder) for dependency
/// injection. Presenters receive read-only snapshots and render them; they never hold
/// a reference that can mutate the widget state. Re-rendering the same snapshot must
/// be idempotent.
pub trait Presenter {
    fn render(&mut self, snapshot: &ColorSnapshot);
}

/// Most widgets have one or two presenters (the UI surface, maybe a logger), so keep
/// them inline.
pub type PresenterVec = SmallVec<[Box<dyn Presenter>; 2]>;

pub mod test_fixtures {
    use std::{cell::RefCell, rc::Rc};

    use super::{ColorSnapshot, Presenter};

    /// Records every snapshot it is asked to render. Clone the fixture before boxing
    /// it into the state; both handles share the same recording.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingPresenter {
        pub rendered: Rc<RefCell<Vec<ColorSnapshot>>>,
    }

    impl RecordingPresenter {
        #[must_use]
        pub fn render_count(&self) -> usize { self.rendered.borrow().len() }

        #[must_use]
        pub fn last_rendered(&self) -> Option<ColorSnapshot> {
            self.rendered.borrow().last().cloned()
        }
    }

    impl Presenter for RecordingPresenter {
        fn render(&mut self, snapshot: &ColorSnapshot) {
            self.rendered.borrow_mut().push(snapshot.clone());
        }
    }
}

//! View-local error list as a Yew hook.
//!
//! Updates go through a reducer, so `clear()` followed by several `add()`
//! calls in the same tick land in the order they were made.

use std::rc::Rc;

use cargame_core::{ErrorList, ErrorReporter};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorAction {
    Clear,
    Add(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    list: ErrorList,
}

impl Reducible for ErrorState {
    type Action = ErrorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.list.clone();
        match action {
            ErrorAction::Clear => {
                if list.is_empty() {
                    return self;
                }
                list.clear();
            }
            ErrorAction::Add(message) => list.add(message),
        }
        Rc::new(Self { list })
    }
}

/// Handle returned by [`use_errors`]; clone it into callbacks and futures.
#[derive(Clone, PartialEq)]
pub struct ErrorsHandle {
    state: UseReducerHandle<ErrorState>,
}

impl ErrorsHandle {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.state.list.messages()
    }
}

impl ErrorReporter for ErrorsHandle {
    fn clear(&mut self) {
        self.state.dispatch(ErrorAction::Clear);
    }

    fn add(&mut self, message: impl Into<String>) {
        self.state.dispatch(ErrorAction::Add(message.into()));
    }
}

#[hook]
pub fn use_errors() -> ErrorsHandle {
    ErrorsHandle {
        state: use_reducer(ErrorState::default),
    }
}

//! Host test context.
//!
//! Assertions report to a [`TestContext`]. The crate ships [`T`], a context
//! that records failures, stops its unit on request and spawns named
//! sub-tests. [`test`] runs a root unit and turns its failures into a panic
//! so the surrounding `#[test]` function fails.

use crate::config::Config;
use crate::errors::AssertionError;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

/// What an assertion needs from the test it runs in.
pub trait TestContext {
    /// Full name of the unit, `parent/child` for sub-tests.
    fn name(&self) -> &str;

    fn config(&self) -> &Config;

    /// Records a failure and marks the unit failed. Execution continues.
    fn error(&self, err: &AssertionError);

    fn failed(&self) -> bool;

    /// Marks the unit failed and stops it. Never returns: control resumes
    /// at the boundary of the unit.
    fn fail_now(&self) -> !;

    /// Runs `body` as a named sub-test, returning whether it passed. A failed
    /// sub-test fails its parent, but a stopped sub-test does not stop it.
    fn run<F: FnOnce(&Self)>(&self, name: &str, body: F) -> bool
    where
        Self: Sized;
}

/// Unwind payload of [`TestContext::fail_now`].
struct StopSignal;

pub(crate) fn is_stop_signal(payload: &(dyn Any + Send)) -> bool {
    payload.is::<StopSignal>()
}

/// Test context recording failures in memory.
#[derive(Debug)]
pub struct T {
    name: String,
    config: Config,
    failed: Cell<bool>,
    errors: RefCell<Vec<AssertionError>>,
    /// Failure lines of this unit and its failed sub-tests.
    report: RefCell<Vec<String>>,
    /// Sub-test names already used, with how often.
    children: RefCell<HashMap<String, usize>>,
}

impl T {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, Config::standard())
    }

    pub fn with_config(name: impl Into<String>, config: Config) -> Self {
        Self {
            name: name.into(),
            config,
            failed: Cell::new(false),
            errors: RefCell::new(Vec::new()),
            report: RefCell::new(Vec::new()),
            children: RefCell::new(HashMap::new()),
        }
    }

    /// Failures recorded by this unit, not including its sub-tests.
    pub fn errors(&self) -> Vec<AssertionError> {
        self.errors.borrow().clone()
    }

    /// Failure lines of this unit and every failed sub-test, as
    /// `name: message`.
    pub fn report(&self) -> Vec<String> {
        self.report.borrow().clone()
    }

    fn child_name(&self, name: &str) -> String {
        let base = format!("{}/{}", self.name, name.replace(' ', "_"));
        let mut children = self.children.borrow_mut();
        let seen = children.entry(base.clone()).or_insert(0);
        let unique = if *seen == 0 {
            base
        } else {
            format!("{}#{:02}", base, seen)
        };
        *seen += 1;
        unique
    }
}

impl TestContext for T {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn error(&self, err: &AssertionError) {
        self.failed.set(true);
        self.report
            .borrow_mut()
            .push(format!("{}: {}", self.name, err));
        self.errors.borrow_mut().push(err.clone());
    }

    fn failed(&self) -> bool {
        self.failed.get()
    }

    fn fail_now(&self) -> ! {
        self.failed.set(true);
        log::debug!("{}: stopped", self.name);
        panic::resume_unwind(Box::new(StopSignal))
    }

    fn run<F: FnOnce(&Self)>(&self, name: &str, body: F) -> bool {
        let child = T::with_config(self.child_name(name), self.config.clone());
        run_unit(&child, body);

        if child.failed() {
            self.failed.set(true);
            self.report.borrow_mut().extend(child.report.into_inner());
            false
        } else {
            true
        }
    }
}

/// Runs `body` as the unit `t`, absorbing a stop of `t`. Any other panic
/// passes through.
fn run_unit<F: FnOnce(&T)>(t: &T, body: F) {
    log::debug!("=== RUN {}", t.name);
    match panic::catch_unwind(AssertUnwindSafe(|| body(t))) {
        Ok(()) => {}
        Err(payload) if is_stop_signal(payload.as_ref()) => {}
        Err(payload) => panic::resume_unwind(payload),
    }
    let status = if t.failed() { "FAIL" } else { "PASS" };
    log::debug!("--- {}: {}", status, t.name);
}

/// Runs `body` as a root test unit named `name`, configured from
/// [`CONFIG_ENV`](crate::config::CONFIG_ENV).
///
/// Panics with every recorded failure if the unit failed.
pub fn test<F: FnOnce(&T)>(name: &str, body: F) {
    let config = Config::from_env().unwrap_or_else(|err| panic!("{}", err));
    let t = T::with_config(name, config);
    run_unit(&t, body);

    if t.failed() {
        panic!("{}", t.report().join("\n"));
    }
}

// src/optional_tests.rs
use crate::{EmptyAccess, Optional};
use std::cell::RefCell;
use std::rc::Rc;

// Records construction and drop events in order
struct Tracked {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Tracked {
    fn new(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> Self {
        log.borrow_mut().push(format!("new {}", name));
        Tracked {
            name,
            log: Rc::clone(log),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(&self.log, self.name)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

fn events(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

#[test]
fn test_set_drops_old_before_storing_new() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Optional::some(Tracked::new(&log, "a"));
    let next = Tracked::new(&log, "b");
    events(&log);

    slot.set(next);
    assert_eq!(events(&log), vec!["drop a"]);

    drop(slot);
    assert_eq!(events(&log), vec!["drop b"]);
}

#[test]
fn test_clear_is_idempotent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Optional::some(Tracked::new(&log, "a"));
    events(&log);

    slot.clear();
    slot.clear();
    assert!(slot.is_empty());
    drop(slot);
    assert_eq!(events(&log), vec!["drop a"]);
}

#[test]
fn test_take_leaves_source_empty_and_drops_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut source = Optional::some(Tracked::new(&log, "a"));
    events(&log);

    let target = source.take();
    assert!(source.is_empty());
    assert!(target.has_value());
    drop(source);
    assert!(events(&log).is_empty());

    drop(target);
    assert_eq!(events(&log), vec!["drop a"]);
}

#[test]
fn test_clone_from_clears_then_copies() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let source = Optional::some(Tracked::new(&log, "src"));
    let mut target = Optional::some(Tracked::new(&log, "dst"));
    events(&log);

    target.clone_from(&source);
    assert_eq!(events(&log), vec!["drop dst", "new src"]);

    target.clone_from(&Optional::none());
    assert!(target.is_empty());
    assert_eq!(events(&log), vec!["drop src"]);
}

#[test]
fn test_emplace_constructs_after_drop() {
    #[derive(Debug, PartialEq)]
    struct Pair(i32, i32);

    impl From<(i32, i32)> for Pair {
        fn from((a, b): (i32, i32)) -> Self {
            Pair(a, b)
        }
    }

    let mut slot = Optional::<Pair>::none();
    slot.emplace((1, 2)).0 = 10;
    assert_eq!(slot.get_value(), Ok(&Pair(10, 2)));
}

#[test]
fn test_unchecked_access() {
    let mut slot = Optional::some(5);
    // SAFETY: the slot was just filled.
    unsafe {
        *slot.get_unchecked_mut() += 1;
        assert_eq!(*slot.get_unchecked(), 6);
    }
}

#[test]
#[should_panic(expected = "optional has no value")]
fn test_deref_on_empty_panics() {
    let slot: Optional<i32> = Optional::none();
    let _value: i32 = *slot;
}

#[test]
fn test_checked_access_on_empty() {
    let mut slot: Optional<String> = Optional::new();
    assert_eq!(slot.get_value(), Err(EmptyAccess));
    assert_eq!(slot.get_value_mut(), Err(EmptyAccess));
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Optional::some(3)), "Optional(3)");
    assert_eq!(format!("{:?}", Optional::<i32>::none()), "Optional(<empty>)");
}

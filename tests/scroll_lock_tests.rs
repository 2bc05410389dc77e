mod common;

use common::FakeBody;
use george_portfolio::scroll_lock::{ScrollLock, LOCKED_OVERFLOW, UNLOCKED_OVERFLOW};

#[test]
fn test_acquire_locks_scrolling() {
    let body = FakeBody::default();
    let _lock = ScrollLock::acquire(body.clone());
    assert_eq!(body.overflow().as_deref(), Some(LOCKED_OVERFLOW));
}

#[test]
fn test_drop_restores_scrolling() {
    let body = FakeBody::default();
    {
        let _lock = ScrollLock::acquire(body.clone());
    }
    assert_eq!(body.overflow().as_deref(), Some(UNLOCKED_OVERFLOW));
}

#[test]
fn test_release_is_idempotent() {
    let body = FakeBody::default();
    let mut lock = ScrollLock::acquire(body.clone());
    lock.release();
    lock.release();
    drop(lock);

    assert_eq!(
        *body.writes.borrow(),
        vec![LOCKED_OVERFLOW.to_string(), UNLOCKED_OVERFLOW.to_string()]
    );
}

#[test]
fn test_repeated_cycles_leave_scrolling_enabled() {
    let body = FakeBody::default();
    for _ in 0..3 {
        let lock = ScrollLock::acquire(body.clone());
        drop(lock);
    }
    assert_eq!(body.overflow().as_deref(), Some(UNLOCKED_OVERFLOW));
    assert_eq!(body.writes.borrow().len(), 6);
}

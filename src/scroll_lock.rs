use web_sys::HtmlElement;

pub const LOCKED_OVERFLOW: &str = "hidden";
pub const UNLOCKED_OVERFLOW: &str = "unset";

/// Something whose CSS `overflow` can be switched.
pub trait OverflowStyle {
    fn set_overflow(&self, value: &str);
}

impl OverflowStyle for HtmlElement {
    fn set_overflow(&self, value: &str) {
        if self.style().set_property("overflow", value).is_err() {
            gloo::console::warn!("Could not update body overflow");
        }
    }
}

/// Suspends document scrolling while alive. Dropping restores it.
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    released: bool,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_overflow(LOCKED_OVERFLOW);
        Self {
            target,
            released: false,
        }
    }

    pub fn release(&mut self) {
        if !self.released {
            self.target.set_overflow(UNLOCKED_OVERFLOW);
            self.released = true;
        }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

pub fn lock_body() -> Option<ScrollLock<HtmlElement>> {
    let body = web_sys::window()?.document()?.body()?;
    Some(ScrollLock::acquire(body))
}

use std::cell::RefCell;
use std::rc::Rc;

use george_portfolio::error::SendError;
use george_portfolio::mailer::Mailer;
use george_portfolio::scroll_lock::OverflowStyle;
use george_portfolio::types::ContactFields;

#[allow(unused)]
/// Stand-in for `document.body` that records every overflow write.
#[derive(Clone, Default)]
pub struct FakeBody {
    pub writes: Rc<RefCell<Vec<String>>>,
}

#[allow(unused)]
impl FakeBody {
    pub fn overflow(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl OverflowStyle for FakeBody {
    fn set_overflow(&self, value: &str) {
        self.writes.borrow_mut().push(value.to_string());
    }
}

#[allow(unused)]
pub fn filled_fields() -> ContactFields {
    ContactFields {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "I need a new logo for my bakery.".to_string(),
    }
}

/// Mailer that records each call and answers with a fixed result.
#[allow(unused)]
pub struct CountingMailer {
    pub sent: RefCell<Vec<ContactFields>>,
    pub fail: bool,
}

#[allow(unused)]
impl CountingMailer {
    pub fn succeeding() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Mailer for CountingMailer {
    async fn send(&self, fields: &ContactFields) -> Result<(), SendError> {
        self.sent.borrow_mut().push(fields.clone());
        if self.fail {
            Err(SendError::Rejected {
                status: 400,
                body: "The template ID is invalid".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

//! Form output events and their delivery to the host

use crate::state::Employee;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Events emitted by a form to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field was edited; carries the full current snapshot, valid or not
    ValueChanged(Employee),
    /// The user submitted a valid form
    Submitted(Employee),
}

/// Sending half of a form's outputs. Holding it is the form's subscription;
/// dropping it disconnects the host.
#[derive(Debug, Clone)]
pub struct FormOutputs {
    tx: UnboundedSender<FormEvent>,
}

/// Create a connected outputs/receiver pair
pub fn channel() -> (FormOutputs, UnboundedReceiver<FormEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FormOutputs { tx }, rx)
}

impl FormOutputs {
    /// Deliver an event. Never blocks; a dropped receiver is not an error.
    pub fn emit(&self, event: FormEvent) {
        tracing::debug!(?event, "form event");
        if self.tx.send(event).is_err() {
            tracing::debug!("form event receiver dropped");
        }
    }
}

/// Host-side handling of form events
#[cfg_attr(test, mockall::automock)]
pub trait FormEventHandler {
    fn value_changed(&mut self, value: &Employee);
    fn submitted(&mut self, value: &Employee);
}

/// Drain every pending event into `handler`, in emission order.
///
/// Returns false once the form side has been dropped and no events remain.
pub fn dispatch_events<H: FormEventHandler + ?Sized>(
    rx: &mut UnboundedReceiver<FormEvent>,
    handler: &mut H,
) -> bool {
    loop {
        match rx.try_recv() {
            Ok(FormEvent::ValueChanged(value)) => handler.value_changed(&value),
            Ok(FormEvent::Submitted(value)) => handler.submitted(&value),
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Level;
    use mockall::{predicate::eq, Sequence};

    fn employee(name: &str) -> Employee {
        Employee {
            name: name.to_string(),
            position: "Engineer".to_string(),
            level: Level::Mid,
        }
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let (outputs, mut rx) = channel();
        outputs.emit(FormEvent::ValueChanged(employee("A")));
        outputs.emit(FormEvent::ValueChanged(employee("Al")));
        outputs.emit(FormEvent::Submitted(employee("Al")));

        let mut seq = Sequence::new();
        let mut handler = MockFormEventHandler::new();
        handler
            .expect_value_changed()
            .with(eq(employee("A")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        handler
            .expect_value_changed()
            .with(eq(employee("Al")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        handler
            .expect_submitted()
            .with(eq(employee("Al")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        assert!(dispatch_events(&mut rx, &mut handler));
    }

    #[test]
    fn test_dispatch_on_empty_channel_is_noop() {
        let (_outputs, mut rx) = channel();
        let mut handler = MockFormEventHandler::new();
        handler.expect_value_changed().never();
        handler.expect_submitted().never();
        assert!(dispatch_events(&mut rx, &mut handler));
    }

    #[test]
    fn test_dispatch_reports_disconnect_after_draining() {
        let (outputs, mut rx) = channel();
        outputs.emit(FormEvent::ValueChanged(employee("A")));
        drop(outputs);

        let mut handler = MockFormEventHandler::new();
        handler.expect_value_changed().times(1).return_const(());
        assert!(!dispatch_events(&mut rx, &mut handler));
    }

    #[test]
    fn test_emit_after_receiver_dropped_does_not_panic() {
        let (outputs, rx) = channel();
        drop(rx);
        outputs.emit(FormEvent::Submitted(employee("Alice")));
    }
}

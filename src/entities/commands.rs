use crate::{Command, Journal, JournalEntry, Receiver};
use std::rc::Rc;

/// A command that does its own small job with a literal payload.
#[derive(Debug, Clone)]
pub struct SimpleCommand {
    payload: String,
    journal: Option<Journal>,
}

impl SimpleCommand {
    pub fn new<S: Into<String>>(payload: S) -> Self {
        Self {
            payload: payload.into(),
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Command for SimpleCommand {
    fn execute(&self) {
        tracing::debug!(payload = %self.payload, "SimpleCommand: doing simple things");
        if let Some(journal) = &self.journal {
            journal.record(JournalEntry::SimpleAction {
                payload: self.payload.clone(),
            });
        }
    }

    fn name(&self) -> &str {
        "simple"
    }
}

/// A command that delegates its work to a shared [`Receiver`].
#[derive(Debug, Clone)]
pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new<A, B>(receiver: Rc<Receiver>, a: A, b: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) {
        tracing::debug!("ComplexCommand: delegating to receiver");
        self.receiver.journal().record(JournalEntry::Delegated {
            command: self.name().to_string(),
        });
        self.receiver.do_something(&self.a);
        self.receiver.do_something_else(&self.b);
    }

    fn name(&self) -> &str {
        "complex"
    }
}

use crate::{Journal, JournalEntry};

/// Performs the primitive operations complex commands delegate to.
#[derive(Debug, Clone, Default)]
pub struct Receiver {
    journal: Journal,
}

impl Receiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn do_something(&self, a: &str) {
        tracing::debug!(subject = a, "Receiver: Working on");
        self.journal.record(JournalEntry::ReceiverWorking {
            subject: a.to_string(),
        });
    }

    pub fn do_something_else(&self, b: &str) {
        tracing::debug!(subject = b, "Receiver: Also working on");
        self.journal.record(JournalEntry::ReceiverAlsoWorking {
            subject: b.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_are_recorded_in_call_order() {
        let receiver = Receiver::new();
        receiver.do_something_else("Save report");
        receiver.do_something("Send email");

        assert_eq!(
            receiver.journal().entries(),
            vec![
                JournalEntry::ReceiverAlsoWorking {
                    subject: "Save report".to_string()
                },
                JournalEntry::ReceiverWorking {
                    subject: "Send email".to_string()
                },
            ]
        );
    }
}

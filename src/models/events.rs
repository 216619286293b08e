/// Observable side effects recorded by commands and receivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    SimpleAction { payload: String },

    Delegated { command: String },

    ReceiverWorking { subject: String },

    ReceiverAlsoWorking { subject: String },
}

impl JournalEntry {
    pub fn subject(&self) -> &str {
        match self {
            Self::SimpleAction { payload } => payload,
            Self::Delegated { command } => command,
            Self::ReceiverWorking { subject } | Self::ReceiverAlsoWorking { subject } => subject,
        }
    }
}

use crate::Command;
use std::fmt;

/// Lifecycle points of [`Invoker::do_something_important`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    OnStart,
    Main,
    OnFinish,
}

/// Stages that ran during one invocation, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    stages: Vec<Stage>,
}

impl Invocation {
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn ran(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }
}

/// Holds commands in named slots and fires them around its main action.
///
/// Order is fixed: on-start, main action, on-finish. Empty slots are skipped.
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start<C: Command + 'static>(&mut self, command: C) {
        self.on_start = Some(Box::new(command));
    }

    pub fn set_on_finish<C: Command + 'static>(&mut self, command: C) {
        self.on_finish = Some(Box::new(command));
    }

    pub fn clear_on_start(&mut self) {
        self.on_start = None;
    }

    pub fn clear_on_finish(&mut self) {
        self.on_finish = None;
    }

    pub fn do_something_important(&self) -> Invocation {
        let mut invocation = Invocation::default();

        tracing::debug!("Invoker: anybody want something done before I begin?");
        if let Some(command) = &self.on_start {
            tracing::debug!(command = command.name(), "Invoker: running on-start command");
            command.execute();
            invocation.stages.push(Stage::OnStart);
        }

        tracing::debug!("Invoker: doing something really important");
        invocation.stages.push(Stage::Main);

        tracing::debug!("Invoker: anybody want something done after I finish?");
        if let Some(command) = &self.on_finish {
            tracing::debug!(command = command.name(), "Invoker: running on-finish command");
            command.execute();
            invocation.stages.push(Stage::OnFinish);
        }

        invocation
    }
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("on_start", &self.on_start.as_ref().map(|c| c.name()))
            .field("on_finish", &self.on_finish.as_ref().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComplexCommand, Journal, JournalEntry, Receiver, SimpleCommand};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_empty_invoker_runs_main_only() {
        let invoker = Invoker::new();
        assert_eq!(invoker.do_something_important().stages(), [Stage::Main]);
    }

    #[test]
    fn test_only_on_start_assigned() {
        let journal = Journal::new();
        let mut invoker = Invoker::new();
        invoker.set_on_start(SimpleCommand::new("Say Hi!").with_journal(journal.clone()));

        let invocation = invoker.do_something_important();

        assert_eq!(invocation.stages(), [Stage::OnStart, Stage::Main]);
        assert!(!invocation.ran(Stage::OnFinish));
        assert_eq!(
            journal.entries(),
            vec![JournalEntry::SimpleAction {
                payload: "Say Hi!".to_string()
            }]
        );
    }

    #[test]
    fn test_on_start_runs_before_on_finish() {
        let journal = Journal::new();
        let receiver = Rc::new(Receiver::with_journal(journal.clone()));

        let mut invoker = Invoker::new();
        invoker.set_on_finish(ComplexCommand::new(receiver, "Send email", "Save report"));
        invoker.set_on_start(SimpleCommand::new("Say Hi!").with_journal(journal.clone()));

        let invocation = invoker.do_something_important();

        assert_eq!(
            invocation.stages(),
            [Stage::OnStart, Stage::Main, Stage::OnFinish]
        );
        let subjects: Vec<String> = journal
            .entries()
            .iter()
            .map(|entry| entry.subject().to_string())
            .collect();
        assert_eq!(subjects, ["Say Hi!", "complex", "Send email", "Save report"]);
    }

    #[test]
    fn test_replacing_and_clearing_slots() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let mut invoker = Invoker::new();
        let counter = Rc::clone(&first);
        invoker.set_on_start(move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&second);
        invoker.set_on_start(move || counter.set(counter.get() + 1));

        invoker.do_something_important();
        assert_eq!((first.get(), second.get()), (0, 1));

        invoker.clear_on_start();
        invoker.do_something_important();
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_assigning_does_not_execute() {
        let journal = Journal::new();
        let mut invoker = Invoker::new();
        invoker.set_on_start(SimpleCommand::new("later").with_journal(journal.clone()));
        invoker.set_on_finish(SimpleCommand::new("later still").with_journal(journal.clone()));

        assert!(journal.is_empty());
        invoker.clear_on_finish();
        invoker.do_something_important();
        assert_eq!(journal.len(), 1);
    }
}

/// A deferred action. Building a command never runs it.
pub trait Command {
    fn execute(&self);

    fn name(&self) -> &str {
        "command"
    }
}

impl<F> Command for F
where
    F: Fn(),
{
    fn execute(&self) {
        self()
    }

    fn name(&self) -> &str {
        "closure"
    }
}

use super::{Message, Step, Suite, Test};

/// Callback surface fired while an execution result tree is walked.
///
/// Every method has a default empty body, so an implementor only picks the
/// events it cares about. `start_*` fires before the node's children,
/// `end_*` after all of them; messages fire while their owning step is
/// still open.
pub trait ResultVisitor {
    fn start_suite(&mut self, _suite: &Suite) {}

    fn end_suite(&mut self, _suite: &Suite) {}

    fn start_test(&mut self, _test: &Test) {}

    fn end_test(&mut self, _test: &Test) {}

    fn start_step(&mut self, _step: &Step) {}

    fn end_step(&mut self, _step: &Step) {}

    fn log_message(&mut self, _message: &Message) {}
}

impl Suite {
    /// Drives the visitor depth-first: suite setup, child suites, own tests,
    /// suite teardown, in that order.
    pub fn visit<V: ResultVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.start_suite(self);
        if let Some(setup) = &self.setup {
            setup.visit(visitor);
        }
        for suite in &self.suites {
            suite.visit(visitor);
        }
        for test in &self.tests {
            test.visit(visitor);
        }
        if let Some(teardown) = &self.teardown {
            teardown.visit(visitor);
        }
        visitor.end_suite(self);
    }
}

impl Test {
    pub fn visit<V: ResultVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.start_test(self);
        for step in &self.steps {
            step.visit(visitor);
        }
        visitor.end_test(self);
    }
}

impl Step {
    pub fn visit<V: ResultVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.start_step(self);
        for message in &self.messages {
            visitor.log_message(message);
        }
        for step in &self.steps {
            step.visit(visitor);
        }
        visitor.end_step(self);
    }
}

//! Command dispatcher.
//!
//! Handlers register the verbs they answer to; dispatch resolves the first
//! token of a line against the verb map and hands the rest of the line to
//! the owning handler. Exactly one handler sees a command.

use std::collections::HashMap;

use stagelink_scene::SceneContainer;

use crate::handlers::{
    AddObjectCommand, DeleteObjectCommand, DuplicateObjectCommand, ObjectNameCommand,
    ParentChildCommand, TransformObjectCommand,
};
use crate::line::LineCursor;
use crate::response::Response;

/// Dispatch error
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The line held no verb token. Not handled; no handler ran.
    #[error("empty command line")]
    EmptyCommand,

    /// No registered handler declares this verb. Not handled; no handler
    /// ran. Distinct from a handler running and failing.
    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    /// Registration-time collision: two handlers declared the same verb.
    #[error("verb '{0}' is already registered")]
    DuplicateVerb(&'static str),
}

/// A unit that recognizes one or more command verbs and executes the
/// corresponding scene mutation.
pub trait CommandHandler {
    /// The verbs this handler answers to. Must be globally unique across
    /// every handler registered with one dispatcher.
    fn verbs(&self) -> &'static [&'static str];

    /// Execute `verb`; `args` holds the text that followed it.
    fn execute(
        &self,
        verb: &str,
        args: &mut LineCursor<'_>,
        scene: &mut dyn SceneContainer,
    ) -> Response;
}

/// Routes command lines to registered handlers.
pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
    verbs: HashMap<&'static str, usize>,
}

impl Dispatcher {
    /// Create a dispatcher with no handlers registered.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            verbs: HashMap::new(),
        }
    }

    /// Create a dispatcher with the standard object command set.
    pub fn with_object_handlers() -> Self {
        let mut dispatcher = Self::new();
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(AddObjectCommand),
            Box::new(DuplicateObjectCommand),
            Box::new(DeleteObjectCommand),
            Box::new(ParentChildCommand),
            Box::new(TransformObjectCommand),
            Box::new(ObjectNameCommand),
        ];
        for handler in handlers {
            // The builtin verb sets are disjoint by construction.
            dispatcher
                .register(handler)
                .expect("builtin verb sets are disjoint");
        }
        dispatcher
    }

    /// Register a handler, indexing every verb it declares.
    ///
    /// A verb collision is a configuration error and is rejected here, not
    /// at dispatch time; on error nothing is registered.
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) -> Result<(), DispatchError> {
        for verb in handler.verbs() {
            if self.verbs.contains_key(verb) {
                return Err(DispatchError::DuplicateVerb(verb));
            }
        }
        let index = self.handlers.len();
        for verb in handler.verbs() {
            self.verbs.insert(verb, index);
        }
        self.handlers.push(handler);
        Ok(())
    }

    /// All registered verbs.
    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.verbs.keys().copied()
    }

    /// Dispatch one command line against `scene`.
    ///
    /// The verb is the first whitespace-delimited token, matched exactly and
    /// case-sensitively; leading whitespace is ignored. An `Err` means no
    /// handler ran.
    pub fn dispatch(
        &self,
        line: &str,
        scene: &mut dyn SceneContainer,
    ) -> Result<Response, DispatchError> {
        let mut cursor = LineCursor::new(line);
        let Some(verb) = cursor.next_token() else {
            return Err(DispatchError::EmptyCommand);
        };
        let index = *self
            .verbs
            .get(verb)
            .ok_or_else(|| DispatchError::UnknownVerb(verb.to_string()))?;
        log::debug!("dispatching '{verb}'");
        Ok(self.handlers[index].execute(verb, &mut cursor, scene))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagelink_scene::SceneWorld;

    struct StubHandler {
        verbs: &'static [&'static str],
    }

    impl CommandHandler for StubHandler {
        fn verbs(&self) -> &'static [&'static str] {
            self.verbs
        }

        fn execute(
            &self,
            _verb: &str,
            _args: &mut LineCursor<'_>,
            _scene: &mut dyn SceneContainer,
        ) -> Response {
            Response::Ok
        }
    }

    #[test]
    fn test_unknown_verb_is_not_handled() {
        let dispatcher = Dispatcher::with_object_handlers();
        let mut world = SceneWorld::new();
        let result = dispatcher.dispatch("NoSuchVerb arg", &mut world);
        assert!(matches!(result, Err(DispatchError::UnknownVerb(_))));
    }

    #[test]
    fn test_empty_line_is_not_handled() {
        let dispatcher = Dispatcher::with_object_handlers();
        let mut world = SceneWorld::new();
        assert!(matches!(
            dispatcher.dispatch("   ", &mut world),
            Err(DispatchError::EmptyCommand)
        ));
    }

    #[test]
    fn test_verb_match_is_case_sensitive() {
        let dispatcher = Dispatcher::with_object_handlers();
        let mut world = SceneWorld::new();
        assert!(matches!(
            dispatcher.dispatch("addobject /assets/x Y", &mut world),
            Err(DispatchError::UnknownVerb(_))
        ));
    }

    #[test]
    fn test_leading_whitespace_is_ignored() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(StubHandler { verbs: &["Ping"] })).unwrap();
        let mut world = SceneWorld::new();
        assert_eq!(dispatcher.dispatch("   Ping", &mut world).unwrap(), Response::Ok);
    }

    #[test]
    fn test_duplicate_verb_is_rejected_at_registration() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(StubHandler { verbs: &["A", "B"] })).unwrap();
        let err = dispatcher.register(Box::new(StubHandler { verbs: &["C", "B"] }));
        assert!(matches!(err, Err(DispatchError::DuplicateVerb("B"))));
        // the failed registration left nothing behind
        assert!(!dispatcher.verbs().any(|v| v == "C"));
    }
}

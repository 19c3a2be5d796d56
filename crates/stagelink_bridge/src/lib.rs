//! # Stagelink Bridge
//!
//! In-process command handler for remote-driving a 3D scene editor. An
//! external authoring tool sends line-oriented text commands; the bridge
//! routes each line to a handler, mutates the scene through the
//! [`SceneContainer`](stagelink_scene::SceneContainer) capabilities, and
//! answers with a short response string.
//!
//! ## Architecture
//!
//! ```text
//! Command line ──► Dispatcher ──► Handler ──► SceneContainer
//!                                    │
//!                                    ▼
//!                                Response ──► remote tool
//! ```
//!
//! ## Protocol
//!
//! One command per line: `<VERB> <arg> <arg> ... [trailing text]`. Verbs are
//! matched case-sensitively on the first token. Responses are short strings:
//! `"Ok"`/`"0"` for success, `"1"` not-found, `"3 <name>"` succeeded under a
//! different name, `"4"` duplication failed, or a bare identifier.
//!
//! ```text
//! link> AddObject /assets/primitives/cube Chair
//! Chair
//! link> DuplicateObject Chair Chair
//! 3 Chair_1
//! link> ParentChildTo Chair_1 Chair
//! 0
//! ```
//!
//! The one correctness-critical piece is [`reconcile`](reconcile::reconcile),
//! which keeps every object's display label in sync with its unique
//! identifier across create, rename, and duplicate.

pub mod dispatcher;
pub mod handlers;
pub mod line;
pub mod reconcile;
pub mod response;
pub mod transform;

pub use dispatcher::{CommandHandler, DispatchError, Dispatcher};
pub use line::LineCursor;
pub use reconcile::reconcile;
pub use response::Response;
pub use transform::{apply_transform_text, parse_transform_text};

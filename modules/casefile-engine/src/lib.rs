//! Case generation and interrogation core.
//!
//! The pipeline: entropy bytes → [`seed::derive`] → [`expander::Expander`] →
//! [`publisher::Publisher`] → (public case, guilt record). Independently,
//! a public case + suspect + transcript → [`dialogue::DialogueAgent`] → the
//! suspect's next utterance. External collaborators (model, content store)
//! sit behind the seams in [`traits`]; [`testing`] provides their mocks.

pub mod bridges;
pub mod dialogue;
pub mod expander;
pub mod fixtures;
pub mod pools;
pub mod prompts;
pub mod publisher;
pub mod seed;
pub mod session;
pub mod testing;
pub mod traits;

pub use dialogue::DialogueAgent;
pub use expander::Expander;
pub use publisher::{redact, Publisher};
pub use session::{DialogueSession, SessionState};
pub use traits::{ContentStore, TextGenerator};

/// Cap on model round-trips for one generation call, tool steps included.
pub const GENERATION_STEP_BUDGET: usize = 10;

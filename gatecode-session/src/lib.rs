//! GateCode playground session
//!
//! Everything between the judge client and a screen:
//! - `state`: the presentation state machine and its request tokens
//! - `view`: what the result panel renders for a given state
//! - `session`: the controller issuing runs and submissions
//! - `solved`: persistence of solved problems
//! - `identity`: who is signed in, and how to ask them to sign in
//! - `config`: session tunables

pub mod config;
pub mod error;
pub mod identity;
pub mod session;
pub mod solved;
pub mod state;
pub mod view;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use identity::{AuthPrompt, Identity, IdentityProvider, LogAuthPrompt, StaticIdentity};
pub use session::{PlaygroundSession, RunOutcome, SubmitOutcome};
pub use solved::{InMemorySolvedStore, JsonFileSolvedStore, SolvedStore, open_solved_store};
pub use state::{Phase, PresentationReducer, RequestToken, SubmissionUiState, Transition};
pub use view::{JudgeDetail, PanelView, derive_view};

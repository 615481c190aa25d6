//! Dispatch loop for the weather dashboard
//!
//! Unidirectional data flow for a terminal UI:
//!
//! - **Action**: describes something that happened (key press, fetch result)
//! - **EffectStore**: owns the state and runs the reducer
//! - **Effect**: declarative description of side effects returned by the reducer
//! - **Component**: renders from props, turns events into actions
//! - **EffectRuntime**: polls the terminal, routes actions, hands effects to the app
//!
//! # Async work
//!
//! Reducers never await. An intent action (`SearchSubmit`) makes the reducer
//! return an effect; the effect handler spawns a task on the [`TaskManager`];
//! the task resolves into a result action (`CurrentDidLoad`, `CurrentDidError`)
//! that goes back through the reducer.
//!
//! ```ignore
//! fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
//!     match effect {
//!         Effect::Fetch { id } => {
//!             ctx.tasks().spawn("fetch", async move {
//!                 match api::fetch(id).await {
//!                     Ok(data) => Action::DidLoad(data),
//!                     Err(e) => Action::DidError(e.to_string()),
//!                 }
//!             });
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod runtime;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use effect::{DispatchResult, EffectReducer, EffectStore};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome, RenderContext};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};

pub use testing::{
    buffer_to_string_plain, char_key, ctrl_key, key, ActionAssertions, RenderHarness,
};

//! Effect-aware store
//!
//! The reducer returns [`DispatchResult<E>`]: whether the state changed plus
//! the effects to run. Effects are data, not work. The runtime passes them to
//! an app-provided handler which spawns the actual async tasks.
//!
//! ```ignore
//! fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::Load => {
//!             state.loading = true;
//!             DispatchResult::changed_with(Effect::Fetch)
//!         }
//!         Action::DidLoad(data) => {
//!             state.loading = false;
//!             state.data = Some(data);
//!             DispatchResult::changed()
//!         }
//!     }
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action to an [`EffectStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (re-render needed).
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that can emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Store owning the state and an effect-emitting reducer.
///
/// Every dispatch is traced at debug level using [`Action::summary`], except
/// [high-frequency](Action::is_high_frequency) actions which go to trace.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    /// Create a new store with the given initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the state.
    ///
    /// Prefer dispatching actions; this exists for initialization and tests.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run the reducer for `action`.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        if action.is_high_frequency() {
            tracing::trace!(action = %action.name(), "dispatch");
        } else {
            tracing::debug!(action = %action.name(), summary = %action.summary(), "dispatch");
        }
        let result = (self.reducer)(&mut self.state, action);
        tracing::trace!(
            changed = result.changed,
            effects = result.effects.len(),
            "dispatch done"
        );
        result
    }
}

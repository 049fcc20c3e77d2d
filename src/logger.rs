//! A [Reducer] wrapper which logs every action it reduces through
//! the [log] facade.

use crate::Reducer;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn log<S: AsRef<str>>(&self, message: S) {
        log::log!(log::Level::from(*self), "{}", message.as_ref());
    }

    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::from(*self))
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
        }
    }
}

/// Wraps a [Reducer], logging the previous state, the action and the
/// next state each time it runs.
#[derive(Debug, Clone)]
pub struct LoggerReducer<R> {
    reducer: R,
    log_level: LogLevel,
}

impl<R> LoggerReducer<R> {
    pub fn new(reducer: R) -> Self {
        LoggerReducer {
            reducer,
            log_level: LogLevel::default(),
        }
    }

    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn into_inner(self) -> R {
        self.reducer
    }
}

impl<State, Action, R> Reducer<State, Action> for LoggerReducer<R>
where
    R: Reducer<State, Action>,
    State: Debug,
    Action: crate::Action + Debug,
{
    fn reduce(&self, prev_state: State, action: &Action) -> State {
        if !self.log_level.enabled() {
            return self.reducer.reduce(prev_state, action);
        }

        self.log_level.log(format!("prev state: {:?}", prev_state));
        self.log_level
            .log(format!("action {}: {:?}", action.action_type(), action));

        let next_state = self.reducer.reduce(prev_state, action);

        self.log_level.log(format!("next state: {:?}", next_state));
        next_state
    }
}

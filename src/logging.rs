use log::Level::Trace;
use log::{log_enabled, trace};

use crate::error::ParseError;
use crate::state::ParseState;
use crate::{util, LABEL, LOG_TARGET};
use std::fmt::Debug;

pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args);
    fn log_success<Args: Debug>(&self, msg: &str, args: Args);
    fn log_success_with_result<Args: Debug, Res: Debug>(&self, msg: &str, args: Args, res: &Res);
    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, error: &ParseError);
}

impl<'a, V: Clone> Loggable for ParseState<'a, V> {
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} @{pos}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self.remaining()),
                operation = format!("{msg}({args:?})"),
                pos = self.position(),
            );
        }
    }

    fn log_success<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> ok",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self.remaining()),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_success_with_result<Args: Debug, Res: Debug>(&self, msg: &str, args: Args, res: &Res) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {res:?}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self.remaining()),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, error: &ParseError) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {e}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self.remaining()),
                operation = format!("{msg}({args:?})"),
                e = error.message(),
            );
        }
    }
}

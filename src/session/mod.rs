//! The interactive question-answering session loop.

mod operator;
mod runner;
mod ui;

pub use operator::{LanguageChoice, Operator, TerminalOperator};
pub use runner::{DEFAULT_LANGUAGE, Session};

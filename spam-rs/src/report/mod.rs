//! Classification results
//!
//! Turns classification records into accuracy/precision statistics and
//! renders them as a text table or a JSON report.

pub mod evaluation;
pub mod render;

pub use evaluation::{Evaluation, EvaluationReport};
pub use render::{format_ratio, render_table, render_vocabulary};

//! The balance scale: resolving weighings and drawing the result.
//!
//! Both halves are pure functions. The resolver is the only code that looks
//! at the counterfeit; the renderer only sees the coins on each pan.

pub mod render;
pub mod resolver;

pub use render::{render, ScaleTemplate, BALANCED, LEFT_HEAVY, RIGHT_HEAVY};
pub use resolver::{resolve, Outcome, Pan, Weighing};

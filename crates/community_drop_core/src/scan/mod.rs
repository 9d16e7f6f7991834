//! Scan result classification and tracking-view navigation targets.
//!
//! The camera decoder is an external capability; this module only ever sees
//! the decoded string. Timers and router calls stay in the presentation
//! layer.

pub mod interpreter;

//! Serializers for step output graphs.
//!
//! Only Turtle is produced; it is the format the host exchanges with every
//! step.

pub mod turtle;

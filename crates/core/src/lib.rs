//! Domain model and form parsing for the academics records service.

pub mod domain;
pub mod forms;

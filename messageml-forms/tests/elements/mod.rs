//! Per element tests: accepted markup, rendered output and every rejection message.

mod checkbox;
mod form;
mod person_selector;

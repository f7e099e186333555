//! Simulators for the sequential structures: array, singly linked list,
//! stack and queue.

pub mod array;
mod container;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::ListPosition;

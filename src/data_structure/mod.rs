pub mod demo;
pub mod linked_list;
pub mod linked_stack;
pub mod min_stack;
pub mod stack;
pub mod stack_queue;

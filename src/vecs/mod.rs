pub mod deque;
pub mod deque_iter;
pub mod options;

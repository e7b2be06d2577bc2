pub mod heap_iter;
pub mod minmax_heap;

pub mod partition;
pub mod randomized_quickselect;
pub mod randomized_quicksort;

pub use partition::partition_by;
pub use randomized_quickselect::{
    randomized_quickselect, randomized_quickselect_by, randomized_quickselect_with_rng,
};
pub use randomized_quicksort::{
    is_sorted_by, randomized_quicksort, randomized_quicksort_by, randomized_quicksort_with_rng,
};

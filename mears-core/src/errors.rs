use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Event times are not sorted ascending: order breaks at index {index}")]
    UnsortedInput { index: usize },

    #[error("Event train is empty. At least one event time is required")]
    EmptyTrain,

    #[error("Neighbour window must be a positive, finite duration")]
    NonPositiveWindow,

    #[error("Kernel width must be a positive, finite value")]
    NonPositiveWidth,
}

pub mod train;

// re-export for cleaner imports
pub use self::train::EventSource;
pub use self::train::SpikeTrain;

#[cfg(feature = "core")]
#[doc(inline)]
pub use mears_core as core;

#[cfg(feature = "neighbours")]
#[doc(inline)]
pub use mears_neighbours as neighbours;

#[cfg(feature = "synchrony")]
#[doc(inline)]
pub use mears_synchrony as synchrony;

#[cfg(feature = "intensity")]
#[doc(inline)]
pub use mears_intensity as intensity;

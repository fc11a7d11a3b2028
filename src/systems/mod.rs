pub mod accrual;
pub mod purchase;
pub mod rotation;
#[cfg(feature = "system-frame_clock")] pub mod frame_clock;
#[cfg(feature = "system-autoplay")]    pub mod autoplay;

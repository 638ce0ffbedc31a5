pub mod arrival;

pub use arrival::ArrivalAudioPlugin;

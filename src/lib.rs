pub mod cards;
pub mod equity;
pub mod error;

pub use equity::estimate::Estimate;
pub use error::Error;

pub type Percent = f64;

/// Random instance generation for tests and interactive sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Terminal logger for downstream binaries and demos.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

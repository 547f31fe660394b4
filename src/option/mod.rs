mod combine;
mod into_opt;
mod opt;
#[cfg(feature = "serde")]
mod serde;

pub use into_opt::IntoOpt;
pub use opt::Opt;

#[macro_use]
mod finite;
pub(crate) mod clock;

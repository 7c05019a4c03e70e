mod driver;
mod shared;

pub(crate) use driver::Driver;
pub(crate) use shared::Shared;

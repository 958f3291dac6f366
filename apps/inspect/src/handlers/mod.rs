pub(crate) mod channels;
pub(crate) mod describe;

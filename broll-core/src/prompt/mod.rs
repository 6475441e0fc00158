pub(crate) mod mapper;
pub(crate) mod vocab;

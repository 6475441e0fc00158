pub(crate) mod body;
pub(crate) mod pose;

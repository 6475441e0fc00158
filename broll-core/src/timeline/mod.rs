pub(crate) mod bake;

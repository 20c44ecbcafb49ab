pub(crate) mod unicode;

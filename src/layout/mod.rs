pub(crate) mod arrange;

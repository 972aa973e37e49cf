pub(crate) mod controller;
pub(crate) mod observer;
pub(crate) mod viewport;

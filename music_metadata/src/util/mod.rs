pub(crate) mod alloc;
pub(crate) mod bytes;
pub(crate) mod text;

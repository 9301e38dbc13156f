pub(crate) mod blit;
pub(crate) mod filter;
pub(crate) mod plane;
pub(crate) mod subpix;

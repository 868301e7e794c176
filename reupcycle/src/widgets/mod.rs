pub(crate) mod capture;
pub(crate) mod navigation;
pub(crate) mod upcycle;

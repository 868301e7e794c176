pub(crate) mod header_bar;

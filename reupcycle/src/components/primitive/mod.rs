pub(crate) mod menu_button;

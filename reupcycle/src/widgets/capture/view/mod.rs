pub(crate) mod captured_image;

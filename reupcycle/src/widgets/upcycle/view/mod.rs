pub(crate) mod suggestion_form;

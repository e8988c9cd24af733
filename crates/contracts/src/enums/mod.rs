pub mod lightbox_command;

pub mod a001_tab_controller;
pub mod a002_gallery;
pub mod a003_lightbox;

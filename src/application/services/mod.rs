pub mod drum_scroll;
pub mod navigation;
pub mod page_injection;

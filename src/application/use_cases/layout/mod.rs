pub mod compute_layout;

pub mod render_page;

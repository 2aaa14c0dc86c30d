pub mod find_page;
pub mod next_page;
pub mod prev_page;
pub mod random_page;

#[derive(thiserror::Error, Debug)]
pub enum NavigationError {
    #[error("failed to list corpus")]
    Listing(#[source] anyhow::Error),
}

use thiserror::Error;

use crate::ui::state::Page;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches `{0}`")]
    Unmatched(String),
}

pub fn page_to_path(page: Page) -> Option<&'static str> {
    match page {
        Page::Home => Some("/"),
        Page::Queue => Some("/queue"),
        Page::About => Some("/about"),
        Page::NotFound => None,
    }
}

pub fn path_to_page(path: &str) -> Result<Page, RouteError> {
    match path.strip_prefix('/').unwrap_or(path) {
        "" => Ok(Page::Home),
        "queue" => Ok(Page::Queue),
        "about" => Ok(Page::About),
        _ => Err(RouteError::Unmatched(path.to_string())),
    }
}

/// Like [`path_to_page`], but an unknown path lands on [`Page::NotFound`].
pub fn resolve(path: &str) -> Page {
    path_to_page(path).unwrap_or(Page::NotFound)
}

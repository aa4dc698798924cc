//! UI layer: app shell, section panels, and theme.

pub mod app;
pub mod theme;

pub use app::PortfolioApp;

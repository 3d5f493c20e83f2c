mod config_cmd;
mod plan;
mod recipe;
mod shopping;
mod theme;

pub use config_cmd::ConfigCommand;
pub use plan::PlanCommand;
pub use recipe::RecipeCommand;
pub use shopping::ShoppingCommand;
pub use theme::ThemeCommand;

//! Page Components

mod about;
mod embedded;
mod home;
mod widget;

pub use about::AboutView;
pub use embedded::EmbeddedView;
pub use home::HomeView;
pub use widget::WidgetView;

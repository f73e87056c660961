//! Small presentational building blocks shared by the views.

mod badge;
mod button;
mod input;
mod modal;
mod tabs;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Label};
pub use modal::Modal;
pub use tabs::{TabPanel, TabTrigger, Tabs, TabsList};

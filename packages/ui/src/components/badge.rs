use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Success,
    Destructive,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "badge badge--secondary",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Destructive => "badge badge--destructive",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span {
            class: "{variant.class()}",
            {children}
        }
    }
}

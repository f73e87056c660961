//! Attendee credential: a QR code the organizer scans at the door.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::components::{Button, Modal};

/// JSON payload encoded into the QR code; the check-in scanner expects
/// exactly these two fields.
fn credential_payload(event_id: &str, user_id: &str) -> String {
    serde_json::json!({ "eventId": event_id, "userId": user_id }).to_string()
}

fn render_qr_svg(data: &str) -> Option<String> {
    let code = QrCode::new(data.as_bytes()).ok()?;
    Some(
        code.render::<svg::Color>()
            .min_dimensions(200, 200)
            .quiet_zone(true)
            .build(),
    )
}

#[component]
pub fn CredentialModal(
    event_id: String,
    event_title: String,
    user_id: String,
    user_name: String,
    #[props(default)] checked_in: bool,
    on_close: EventHandler<()>,
) -> Element {
    let svg_markup = render_qr_svg(&credential_payload(&event_id, &user_id));

    rsx! {
        Modal {
            title: event_title,
            class: "modal--narrow",
            on_close: move |_| on_close.call(()),

            div {
                class: "credential",
                p { class: "credential__role", "Attendee" }
                h2 { class: "credential__name", "{user_name}" }

                div {
                    class: "credential__qr",
                    if let Some(svg_markup) = svg_markup {
                        div { dangerous_inner_html: "{svg_markup}" }
                    } else {
                        p { "Credential unavailable." }
                    }
                }

                if checked_in {
                    span { class: "credential__status credential__status--confirmed", "Attendance confirmed" }
                } else {
                    span { class: "credential__status credential__status--pending", "Check-in pending" }
                }

                Button {
                    class: "w-full",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_payload_shape() {
        let payload = credential_payload("e1", "u2");
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["eventId"], "e1");
        assert_eq!(value["userId"], "u2");
    }

    #[test]
    fn test_qr_renders_svg() {
        let markup = render_qr_svg(&credential_payload("e1", "u2")).unwrap();
        assert!(markup.starts_with("<?xml") || markup.starts_with("<svg"));
    }
}

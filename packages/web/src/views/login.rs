//! Sign-in / registration page with tabbed forms.

use dioxus::prelude::*;

use api::validate::{FieldErrors, LoginForm, RegisterForm};
use ui::components::{Button, ButtonVariant, Input, TabPanel, TabTrigger, Tabs, TabsList};
use ui::{use_auth, use_client, use_toasts};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_client();
    let toasts = use_toasts();
    let nav = use_navigator();

    let active_tab = use_signal(|| "login".to_string());
    let mut busy = use_signal(|| false);
    let mut server_error = use_signal(|| Option::<String>::None);

    let mut login_form = use_signal(LoginForm::default);
    let mut login_errors = use_signal(FieldErrors::default);

    let mut register_form = use_signal(RegisterForm::default);
    let mut register_errors = use_signal(FieldErrors::default);

    // Already signed in: nothing to do here.
    if auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = {
        let auth = auth.clone();
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut auth = auth.clone();
            let client = client.clone();
            spawn(async move {
                server_error.set(None);
                let payload = match login_form.read().validate() {
                    Ok(payload) => {
                        login_errors.set(FieldErrors::default());
                        payload
                    }
                    Err(failed) => {
                        login_errors.set(failed);
                        return;
                    }
                };

                busy.set(true);
                match client.login(&payload.email, &payload.password).await {
                    Ok(response) => {
                        auth.login(response.token, response.user);
                        toasts.success("Signed in successfully!");
                        nav.replace(Route::Dashboard {});
                    }
                    Err(err) => {
                        tracing::warn!(%err, "login rejected");
                        server_error.set(Some(err.to_string()));
                        toasts.error("Sign-in failed. Check your credentials.");
                    }
                }
                busy.set(false);
            });
        }
    };

    let handle_register = {
        let client = client.clone();
        let mut active_tab = active_tab;
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                server_error.set(None);
                let payload = match register_form.read().validate() {
                    Ok(payload) => {
                        register_errors.set(FieldErrors::default());
                        payload
                    }
                    Err(failed) => {
                        register_errors.set(failed);
                        return;
                    }
                };

                busy.set(true);
                match client.register(&payload).await {
                    Ok(()) => {
                        toasts.success("Account created! Please sign in.");
                        register_form.set(RegisterForm::default());
                        active_tab.set("login".to_string());
                    }
                    Err(err) => {
                        tracing::warn!(%err, "registration rejected");
                        server_error.set(Some(err.to_string()));
                        toasts.error("Registration failed.");
                    }
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "login-page",
            Button {
                class: "login-page__back",
                variant: ButtonVariant::Ghost,
                onclick: move |_| { nav.push(Route::Home {}); },
                "← Back to home"
            }

            div {
                class: "auth-card",
                div {
                    class: "auth-card__header",
                    h1 { class: "brand", "EventSync" }
                    p { "Your gateway to great events" }
                }

                Tabs {
                    active: active_tab,
                    TabsList {
                        TabTrigger { value: "login", "Sign in" }
                        TabTrigger { value: "register", "Register" }
                    }

                    if let Some(message) = server_error() {
                        p { class: "auth-card__error", "{message}" }
                    }

                    TabPanel {
                        value: "login",
                        form {
                            class: "form",
                            onsubmit: handle_login,
                            Input {
                                id: "login-email",
                                label: "E-mail",
                                r#type: "email",
                                value: login_form.read().email.clone(),
                                error: login_errors.read().get("email").map(str::to_string),
                                oninput: move |evt: FormEvent| login_form.write().email = evt.value(),
                            }
                            Input {
                                id: "login-password",
                                label: "Password",
                                r#type: "password",
                                value: login_form.read().password.clone(),
                                error: login_errors.read().get("password").map(str::to_string),
                                oninput: move |evt: FormEvent| login_form.write().password = evt.value(),
                            }
                            Button {
                                r#type: "submit",
                                class: "w-full",
                                disabled: busy(),
                                if busy() { "Signing in..." } else { "Sign in" }
                            }
                        }
                    }

                    TabPanel {
                        value: "register",
                        form {
                            class: "form",
                            onsubmit: handle_register,
                            Input {
                                id: "register-name",
                                label: "Full name",
                                value: register_form.read().name.clone(),
                                error: register_errors.read().get("name").map(str::to_string),
                                oninput: move |evt: FormEvent| register_form.write().name = evt.value(),
                            }
                            Input {
                                id: "register-email",
                                label: "E-mail",
                                r#type: "email",
                                value: register_form.read().email.clone(),
                                error: register_errors.read().get("email").map(str::to_string),
                                oninput: move |evt: FormEvent| register_form.write().email = evt.value(),
                            }
                            Input {
                                id: "register-password",
                                label: "Password",
                                r#type: "password",
                                value: register_form.read().password.clone(),
                                error: register_errors.read().get("password").map(str::to_string),
                                oninput: move |evt: FormEvent| register_form.write().password = evt.value(),
                            }
                            Button {
                                r#type: "submit",
                                class: "w-full",
                                disabled: busy(),
                                if busy() { "Creating account..." } else { "Create account" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use api::RemoteRoster;
use dioxus::prelude::*;
use store::DEFAULT_CAPACITY;

use super::controller::Signup;
use super::state::FormState;
use crate::{Confetti, Spinner};

const SIGNUP_CSS: Asset = asset!("/assets/styling/signup.css");

/// Card with the initials and email inputs, backed by the server roster.
#[component]
pub fn SignupForm() -> Element {
    let mut form = use_signal(|| FormState::new(DEFAULT_CAPACITY));
    let signup = Signup::new(RemoteRoster::new());

    // Fetch the occupancy and capacity once on mount
    let _ = use_resource(move || async move {
        signup.init_db(form).await;
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            signup.submit(form).await;
        });
    };

    let state = form();

    rsx! {
        document::Stylesheet { href: SIGNUP_CSS }

        Confetti { run: state.success }

        div {
            class: "auth-card",

            h1 { "Add credentials to sync" }

            form {
                onsubmit: handle_submit,

                label { r#for: "initials", "Initials (Your initials from the spreadsheet)" }
                input {
                    id: "initials",
                    class: "sleek-input",
                    r#type: "text",
                    placeholder: "ARA",
                    value: "{state.initials}",
                    oninput: move |evt: FormEvent| form.write().set_initials(&evt.value()),
                }

                label { r#for: "email", "Email (Calendar invites will be sent to this email)" }
                input {
                    id: "email",
                    class: "sleek-input",
                    r#type: "email",
                    placeholder: "rick@roll.haha",
                    value: "{state.email}",
                    oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                }

                p {
                    id: "error",
                    if let Some(err) = &state.error {
                        "{err}"
                    }
                }

                if state.success {
                    p {
                        id: "success",
                        "Your credentials have been saved."
                        br {}
                        br {}
                        "{state.confirmation()}"
                    }
                } else {
                    button {
                        id: "submit",
                        r#type: "submit",
                        disabled: state.submit_disabled(),
                        "Continue"
                        if state.loading {
                            Spinner {}
                        }
                    }
                }
            }

            if !state.success {
                p {
                    id: "spots",
                    class: if state.is_full() { "reject" } else { "" },
                    "{state.remaining()} spots remaining."
                }
            }
        }
    }
}

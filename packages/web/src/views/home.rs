//! Landing page: the sign-up card on a decorated background.

use dioxus::prelude::*;
use ui::SignupForm;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "background",
            div { class: "stylish-rectangle blue" }
            div { class: "stylish-rectangle purple" }
            div { class: "stylish-rectangle purple purple-right" }
        }

        main {
            a {
                href: "https://abyte.ca",
                target: "_blank",
                rel: "noopener noreferrer",
                img { id: "logo", src: LOGO, alt: "aByte Logo" }
            }

            SignupForm {}

            p {
                id: "no-account",
                "This product is made by "
                a {
                    href: "https://abyte.ca",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aByte Inc."
                }
                " and not by Lighthouse Labs."
                br {}
                br {}
                span {
                    "THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE."
                }
                br {}
                br {}
                span { "Design inspired by Stripe." }
            }
        }
    }
}

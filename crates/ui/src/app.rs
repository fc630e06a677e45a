use dioxus::prelude::*;

use crate::views::QuizView;

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Accuracy Quest" }
        style { {STYLE} }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
        }
    }
}

use dioxus::prelude::*;

use quiz_core::ProgressBar;
use services::Direction;

use crate::context::AppContext;
use crate::vm::{Followup, QuizIntent, QuizScreen, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let rolling_title = format!("Last {} answers", ctx.display_settings().rolling_window);
    let vm = use_signal(|| None::<QuizVm>);
    let screen = use_signal(QuizScreen::default);

    let _bootstrap = use_resource(move || {
        let ctx = ctx.clone();
        let mut vm = vm;
        let mut screen = screen;
        async move {
            let mut quiz = QuizVm::new(ctx.new_controller());
            let outcome = quiz.bootstrap().await;
            tracing::debug!(?outcome, "quiz bootstrap finished");
            screen.set(quiz.screen().clone());
            vm.set(Some(quiz));
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut screen = screen;
        spawn(async move {
            // Only one operation at a time: the vm is out of the signal while busy.
            let taken = vm.write().take();
            let Some(mut quiz) = taken else {
                tracing::debug!(?intent, "quiz busy; ignoring input");
                return;
            };
            let followup = quiz.apply(intent).await;
            screen.set(quiz.screen().clone());
            if followup == Followup::Bootstrap {
                let outcome = quiz.bootstrap().await;
                tracing::debug!(?outcome, "quiz reloaded");
                screen.set(quiz.screen().clone());
            }
            vm.set(Some(quiz));
        });
    });

    let current = screen.read().clone();
    let question_class = if current.is_error {
        "question-text error"
    } else {
        "question-text"
    };
    let total = current.total_label();
    let buttons = current.buttons;
    let navigation = current.navigation;

    rsx! {
        div { class: "page",
            h2 { "Accuracy Quest" }

            p { id: "questionText", class: "{question_class}", "{current.question_text}" }

            div { class: "row",
                button {
                    id: "trueButton",
                    class: QuizScreen::button_class(buttons.true_style),
                    disabled: !buttons.enabled,
                    onclick: move |_| dispatch.call(QuizIntent::Answer(true)),
                    "True"
                }
                button {
                    id: "falseButton",
                    class: QuizScreen::button_class(buttons.false_style),
                    disabled: !buttons.enabled,
                    onclick: move |_| dispatch.call(QuizIntent::Answer(false)),
                    "False"
                }
            }

            div { class: "row",
                button {
                    id: "backButton",
                    class: "button",
                    disabled: !navigation.back_enabled,
                    onclick: move |_| dispatch.call(QuizIntent::Navigate(Direction::Back)),
                    "Back"
                }
                input {
                    id: "currentQuestion",
                    class: "question-number",
                    r#type: "number",
                    min: "1",
                    value: "{current.question_number}",
                    onchange: move |evt: FormEvent| dispatch.call(QuizIntent::JumpTo(evt.value())),
                }
                span { "of " }
                span { id: "totalQuestions", "{total}" }
                button {
                    id: "forwardButton",
                    class: "button",
                    disabled: !navigation.forward_enabled,
                    onclick: move |_| dispatch.call(QuizIntent::Navigate(Direction::Forward)),
                    "Forward"
                }
            }

            p {
                "Answered: "
                span { id: "answeredPercentage", "{current.answered_percentage}" }
                "%"
            }

            ProgressMeter {
                metric_id: "totalAccuracy",
                title: "Total accuracy".to_string(),
                bar: current.total_accuracy.clone(),
            }
            ProgressMeter {
                metric_id: "rollingAccuracy",
                title: rolling_title.clone(),
                bar: current.rolling_accuracy.clone(),
            }

            div { class: "row",
                button {
                    id: "resetWrongButton",
                    class: "button",
                    onclick: move |_| dispatch.call(QuizIntent::ResetWrong),
                    "Reset wrong answers"
                }
            }

            if let Some(message) = current.alert.clone() {
                div { class: "alert",
                    span { "{message}" }
                    button {
                        class: "button",
                        onclick: move |_| dispatch.call(QuizIntent::DismissAlert),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProgressMeter(
    metric_id: &'static str,
    title: String,
    #[props(!optional)] bar: Option<ProgressBar>,
) -> Element {
    let (style, label) = bar.map_or_else(
        || ("width: 0%;".to_string(), "-".to_string()),
        |bar| (bar.fill_style(), bar.label),
    );

    rsx! {
        div { class: "progress",
            div { class: "row",
                span { "{title}" }
                span { id: "{metric_id}Text", "{label}" }
            }
            div { class: "progress-track",
                div { id: "{metric_id}Fill", class: "progress-fill", style: "{style}" }
            }
        }
    }
}

mod quiz_vm;

pub use quiz_vm::{Followup, QuizIntent, QuizScreen, QuizVm};

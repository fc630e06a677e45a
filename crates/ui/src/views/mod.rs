mod quiz;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{ProgressMeter, QuizView};

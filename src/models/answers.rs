// ABOUTME: Answer store holding the customer's questionnaire responses for the current visit

use std::collections::HashMap;

/// Questions asked during the questionnaire, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    Style,
    Occasion,
    Budget,
}

impl Question {
    pub fn all() -> &'static [Question] {
        &[Self::Style, Self::Occasion, Self::Budget]
    }

    /// Key used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Occasion => "occasion",
            Self::Budget => "budget",
        }
    }
}

/// Collected answers. A question only has an entry once its screen has been
/// completed; answering again overwrites the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: HashMap<Question, String>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question: Question, value: impl Into<String>) {
        self.answers.insert(question, value.into());
    }

    pub fn get(&self, question: Question) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    /// Answer for `question`, or the empty string if it was never answered
    pub fn get_or_empty(&self, question: Question) -> &str {
        self.get(question).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

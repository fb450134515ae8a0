//! # Confirmation Prompts
//!
//! Destructive actions (completing or cancelling an order, deleting a record)
//! ask before they run. The question goes through [`Confirm`] so the CLI can
//! prompt on stdin and tests can answer in advance.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Confirm: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// Prompts on stdout and reads the answer from stdin.
///
/// Only `y` / `yes` (any case) confirm. EOF or a read error declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> bool {
        let mut stdout = io::stdout().lock();
        if write!(stdout, "{} [y/N] ", question)
            .and_then(|_| stdout.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

/// Confirms everything (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

/// Answers from a fixed list, in order, and records every question asked.
///
/// Declines once the answers run out.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, question: &str) -> bool {
        self.asked.lock().push(question.to_string());
        self.answers.lock().pop_front().unwrap_or(false)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

//! Console reporter with colored output

use crate::analyzer::scoring::ScoreCalculator;
use crate::{Comparison, Feedback, RuleMatch, Status, WordMistake};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print a feedback record
    pub fn report(&self, feedback: &Feedback) {
        print!("{}", self.render_feedback(feedback));
    }

    /// Print rule matches only
    pub fn report_rules(&self, matches: &[RuleMatch]) {
        print!("{}", self.render_rules(matches));
    }

    /// Print a comparison only
    pub fn report_comparison(&self, comparison: &Comparison) {
        print!("{}", self.render_comparison(comparison));
    }

    pub fn render_feedback(&self, feedback: &Feedback) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.paint_bold("📖 Recitation Feedback"));
        let _ = writeln!(
            out,
            "   Words: {} | Mistakes: {} | Rules found: {}",
            feedback.matches.len() + feedback.mistakes.len(),
            feedback.mistakes.len(),
            feedback.rule_matches.len()
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "   Accuracy: {} {}",
            self.create_score_bar(feedback.accuracy),
            self.colorize_status(feedback.status)
        );
        let description = ScoreCalculator::status_description(feedback.status);
        if self.use_colors {
            let _ = writeln!(out, "   {}", description.dimmed());
        } else {
            let _ = writeln!(out, "   {}", description);
        }
        let _ = writeln!(out);

        if !feedback.mistakes.is_empty() {
            let _ = writeln!(out, "   {}", self.paint_bold("Mistakes:"));
            for mistake in &feedback.mistakes {
                self.write_mistake(&mut out, mistake);
            }
            let _ = writeln!(out);
        }

        if self.verbose && !feedback.matches.is_empty() {
            let _ = writeln!(out, "   {}", self.paint_bold("Correct words:"));
            for m in &feedback.matches {
                let _ = writeln!(out, "   ✓ #{} {}", m.index, m.word);
            }
            let _ = writeln!(out);
        }

        out.push_str(&self.render_rules(&feedback.rule_matches));
        out
    }

    pub fn render_rules(&self, matches: &[RuleMatch]) -> String {
        let mut out = String::new();
        if matches.is_empty() {
            let _ = writeln!(out, "   No tajweed rules found");
            return out;
        }
        let _ = writeln!(out, "   {}", self.paint_bold("Tajweed Rules:"));
        for m in matches {
            let rule = format!("[{}]", m.rule);
            let rule = if self.use_colors {
                rule.cyan().to_string()
            } else {
                rule
            };
            let _ = writeln!(out, "   {} {} {}", rule, m.arabic_name, m.example);
            if self.verbose {
                let _ = writeln!(out, "       → {}", m.description);
            }
        }
        out
    }

    pub fn render_comparison(&self, comparison: &Comparison) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "   Positions: {} | Matches: {} | Mistakes: {}",
            comparison.len(),
            comparison.matches.len(),
            comparison.mistakes.len()
        );
        for mistake in &comparison.mistakes {
            self.write_mistake(&mut out, mistake);
        }
        out
    }

    fn write_mistake(&self, out: &mut String, mistake: &WordMistake) {
        let icon = if self.use_colors {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        let _ = writeln!(
            out,
            "   {} #{} expected '{}', got '{}'",
            icon, mistake.index, mistake.expected, mistake.got
        );
    }

    fn paint_bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn colorize_status(&self, status: Status) -> String {
        let s = status.label();
        if !self.use_colors {
            return s.to_string();
        }
        match status {
            Status::Success => s.green().bold().to_string(),
            Status::Retry => s.yellow().bold().to_string(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score > 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::history::{format_delta, HistoryFile};
use crate::keywords::KeywordReport;
use crate::{CategoryScore, Rating, ScoreBand, ScoredDocument};
use colored::{ColoredString, Colorize};

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

    /// Report a single scored resume, with the trend against the last recorded score
    pub fn report(&self, doc: &ScoredDocument, previous: Option<u8>) {
        self.print_header(doc);

        if doc.analysis.is_empty() {
            for suggestion in &doc.analysis.suggestions {
                println!("   {} {}", "→".cyan(), suggestion);
            }
            println!();
            return;
        }

        self.print_score(doc, previous);
        self.print_breakdown(&doc.analysis.categories);
        if self.verbose {
            self.print_weakest(doc);
        }
        self.print_suggestions(&doc.analysis.suggestions);
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, docs: &[ScoredDocument], stats: &AggregateStats) {
        for doc in docs {
            self.report(doc, None);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, doc: &ScoredDocument) {
        println!(
            "{}: {} ({})",
            doc.path.display(),
            doc.analysis.total_score,
            self.colorize_rating(doc.analysis.rating())
        );
    }

    /// Report keyword coverage against a job description
    pub fn report_keywords(&self, report: &KeywordReport) {
        println!("   {}", "ATS Keyword Match:".bold());
        let summary = format!(
            "{}/{} keywords ({}%)",
            report.matched, report.total, report.match_percent
        );
        println!("   {}", self.colorize_band(summary, report.band));

        if report.total == 0 {
            println!(
                "   {}",
                "No repeated keywords found in the job description.".dimmed()
            );
        }

        for keyword in &report.keywords {
            if keyword.found {
                println!("   {} {}", "✓".green(), keyword.keyword);
            } else {
                println!("   {} {}", "✗".red(), keyword.keyword.dimmed());
            }
        }

        if let Some(ref tip) = report.tip {
            println!("   {} {}", "→".cyan(), tip.italic());
        }
        println!();
    }

    /// Print recorded scores, newest first
    pub fn report_history(&self, history: &HistoryFile) {
        println!();
        println!("{}", "Score History".bold());
        if history.entries.is_empty() {
            println!("   {}", "No history yet. Analyze a resume to start tracking.".dimmed());
            println!();
            return;
        }

        for entry in &history.entries {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|d| d.format("%b %-d, %H:%M").to_string())
                .unwrap_or_else(|_| entry.date.clone());
            let score = format!("{:>3}", entry.score);
            println!(
                "   {}  {}  {}",
                self.colorize_band(score, ScoreBand::from_percent(entry.score)),
                date,
                format!("{} words", entry.word_count).dimmed()
            );
        }
        println!();
    }

    fn print_header(&self, doc: &ScoredDocument) {
        println!();
        println!(
            "{}",
            format!("Resume Analysis: {}", doc.path.display()).bold()
        );
        if !doc.analysis.is_empty() {
            println!("   Words: {}", doc.analysis.word_count);
        }
        println!();
    }

    fn print_score(&self, doc: &ScoredDocument, previous: Option<u8>) {
        let result = &doc.analysis;
        let rating = result.rating();
        let score_bar = self.create_score_bar(result.total_score);

        println!(
            "   Score: {} {}{}",
            score_bar,
            self.colorize_rating(rating).bold(),
            format_delta(previous, result.total_score).dimmed()
        );
        println!(
            "   {}",
            ScoreCalculator::rating_description(rating).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, categories: &[CategoryScore]) {
        println!("   {}", "Score Breakdown:".bold());
        for cat in categories {
            let bar = self.create_mini_bar(cat.score, cat.max_score);
            let score_str = format!("{:>2}/{:<2}", cat.score, cat.max_score);
            let percent = (cat.ratio() * 100.0).round() as u8;
            let colored_score = self.colorize_band(score_str, ScoreBand::from_percent(percent));
            if self.verbose {
                println!(
                    "   {} {} {} {}",
                    bar,
                    colored_score,
                    cat.name,
                    format!("({})", cat.description).dimmed()
                );
            } else {
                println!("   {} {} {}", bar, colored_score, cat.name);
            }
        }
        println!();
    }

    fn print_weakest(&self, doc: &ScoredDocument) {
        let weakest = ScoreCalculator::weakest_categories(&doc.analysis, 3);
        if weakest.is_empty() {
            return;
        }
        println!("   {}", "Focus Areas (weakest first):".bold());
        for cat in weakest {
            println!(
                "   {} {} {}",
                "↳".dimmed(),
                cat.name,
                format!("{} points available", cat.max_score - cat.score).dimmed()
            );
        }
        println!();
    }

    fn print_suggestions(&self, suggestions: &[String]) {
        if suggestions.is_empty() {
            println!("   {} {}", "✓".green(), "No suggestions. Great resume!".green());
            return;
        }
        println!("   {}", "Suggestions:".bold());
        for suggestion in suggestions {
            println!("   {} {}", "→".cyan(), suggestion);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Resumes analyzed: {}",
            stats.documents_analyzed.to_string().bold()
        );
        println!(
            "   Average score:    {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_rating(stats.average_rating)
        );
        if let Some(ref best) = stats.best {
            println!("   Highest scoring:  {}", best.display());
        }
        println!("   Total words:      {}", stats.total_words);
        println!("   Suggestions:      {}", stats.total_suggestions);
        println!();
    }

    fn colorize_rating(&self, rating: Rating) -> ColoredString {
        let s = rating.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match rating {
            Rating::Excellent => s.green().bold(),
            Rating::Good => s.green(),
            Rating::Fair => s.yellow(),
            Rating::NeedsWork => s.red(),
            Rating::Poor => s.red().bold(),
        }
    }

    fn colorize_band(&self, s: String, band: ScoreBand) -> ColoredString {
        if !self.use_colors {
            return s.normal();
        }
        match band {
            ScoreBand::Strong => s.green(),
            ScoreBand::Moderate => s.yellow(),
            ScoreBand::Weak => s.red(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}/100", "█".repeat(filled), "░".repeat(empty), score);
        self.colorize_band(bar, ScoreBand::from_percent(score))
            .to_string()
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = if max == 0 {
            0
        } else {
            (score as usize * 10) / max as usize
        };
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

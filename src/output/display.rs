//! Display functions for command results

use super::formatters::{colored_code, create_progress_bar, entropy_bar, feedback_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Alphabet;
use crate::game::GameConfig;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, config: &GameConfig, verbose: bool) {
    let alphabet = config.alphabet();
    let code_length = config.code_length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        colored_code(&result.secret, alphabet),
        result.strategy.name().bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {:>2}: {}  {}  {}",
            turn,
            colored_code(&step.guess, alphabet),
            feedback_pegs(step.feedback, code_length).bright_white(),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!("  Worst case: {} candidates", metrics.max_partition);

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    let count = result.guesses.len();
    if result.success {
        println!(
            "{}",
            format!("Solved in {count} {}!", plural(count, "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {count} {}", plural(count, "guess", "guesses"))
                .red()
                .bold()
        );
    }
}

/// Print the result of probe analysis
pub fn print_analysis_result(result: &AnalysisResult, alphabet: &Alphabet, code_length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.probe, alphabet)
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_candidates as f64).log2();
    let bar = entropy_bar(result.metrics.entropy, max_entropy, 30);

    println!("\nAgainst {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );
    println!(
        "   Best opener: {} ({:.3} bits, this probe {:.1}%)",
        colored_code(&result.best_probe, alphabet),
        result.best_entropy,
        result.efficiency() * 100.0
    );

    println!("\n{}", "Feedback buckets:".bright_cyan().bold());
    let largest = result.buckets.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for &(feedback, count) in &result.buckets {
        let pct = count as f64 / result.total_candidates as f64 * 100.0;
        println!(
            "   {} {:>6} {} ({pct:5.1}%)",
            feedback_pegs(feedback, code_length),
            feedback.to_string(),
            create_progress_bar(count as f64, largest as f64, 30).green(),
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed() > 0 {
        println!(
            "   Out of turns:     {}",
            format!("{}", result.failed()).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guess_count:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print a side-by-side summary of several benchmark runs
pub fn print_comparison(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   {:<10} {:>8} {:>8} {:>6} {:>6} {:>9}",
        "strategy", "average", "solved", "best", "worst", "time"
    );

    let best_average = results
        .iter()
        .map(|r| r.average_guesses)
        .fold(f64::INFINITY, f64::min);

    for r in results {
        let average = format!("{:.3}", r.average_guesses);
        let average = if (r.average_guesses - best_average).abs() < f64::EPSILON {
            average.green().bold()
        } else {
            average.normal()
        };
        println!(
            "   {:<10} {:>8} {:>8} {:>6} {:>6} {:>8.2}s",
            r.strategy.name(),
            average,
            format!("{}/{}", r.solved, r.total_games),
            r.min_guesses,
            r.max_guesses,
            r.duration.as_secs_f64()
        );
    }
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

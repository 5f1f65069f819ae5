//! Display functions for command results

use super::formatters::{entropy_bar, format_duration};
use crate::commands::{BenchmarkReport, CompareReport, EvaluateResult, SearchResult, TierTiming};
use colored::Colorize;

/// Print the result of evaluating an opening
pub fn print_evaluate_result(result: &EvaluateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING:".bright_cyan().bold(),
        result.words.join("-").bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.score.expected_bits, 30);

    println!("\n📊 Against {} pool words:", result.pool_size);
    println!(
        "   Expected bits:      [{}] {}",
        bar.green(),
        format!("{:.3}", result.score.expected_bits).bright_yellow()
    );
    println!(
        "   Expected remaining: {:.2} of {}",
        result.score.expected_remaining, result.pool_size
    );
    println!(
        "   Matrix build:       {}",
        format_duration(result.build_time)
    );
    println!(
        "   Evaluation:         {}",
        format_duration(result.eval_time)
    );
}

/// Print the result of an opening search
pub fn print_search_result(result: &SearchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING FOUND".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🏆 {}",
        result.best_words.join("-").bright_yellow().bold()
    );
    println!(
        "   Expected bits:      {:.3}",
        result.best_score.expected_bits
    );
    println!(
        "   Expected remaining: {:.2}",
        result.best_score.expected_remaining
    );
    println!(
        "\n   Candidates: {}  Evaluated: {}  Pruned: {}",
        result.candidates_considered, result.evaluated, result.pruned
    );
    println!("   Time:       {}", format_duration(result.duration));
}

fn print_tier_timings(timings: &[TierTiming]) {
    for timing in timings {
        match timing.verified {
            None => println!("   {:<12} {}", timing.tier, "skipped".bright_black()),
            Some(true) => println!(
                "   {:<12} {:>10}  {}",
                timing.tier,
                format_duration(timing.duration),
                "✓".green()
            ),
            Some(false) => println!(
                "   {:<12} {:>10}  {}",
                timing.tier,
                format_duration(timing.duration),
                "MISMATCH".red().bold()
            ),
        }
    }
}

/// Print a tier benchmark report
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} words of length {}) ",
        "TIER BENCHMARK".bright_cyan().bold(),
        report.pool_size,
        report.word_len
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📐 {}", "Matrix builders:".bright_cyan().bold());
    print_tier_timings(&report.builder_timings);

    println!(
        "\n🎯 {} (opening of {}):",
        "Evaluators".bright_cyan().bold(),
        report.opening_size
    );
    print_tier_timings(&report.evaluator_timings);

    println!();
    if report.all_verified {
        println!("{}", "✅ All tiers agree".green().bold());
    } else {
        println!("{}", "❌ Tier mismatch detected".red().bold());
    }
}

/// Print a tier comparison report
pub fn print_compare_report(report: &CompareReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} words, {} openings) ",
        "TIER EQUIVALENCE".bright_cyan().bold(),
        report.pool_size,
        report.openings_checked
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📐 {}", "Matrix builders:".bright_cyan().bold());
    for agreement in &report.builder_agreement {
        let mark = if agreement.agrees {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("   {:<12} {mark}", agreement.tier);
    }

    println!("\n🎯 {}", "Evaluators:".bright_cyan().bold());
    for agreement in &report.evaluator_agreement {
        let mark = if agreement.agrees {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("   {:<12} {mark}", agreement.tier);
    }

    println!();
    if report.all_agree {
        println!("{}", "✅ All tiers equivalent".green().bold());
    } else {
        println!("{}", "❌ Tier mismatch detected".red().bold());
    }
}

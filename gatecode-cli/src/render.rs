//! Terminal rendering of panel views and history

use colored::*;
use gatecode_core::domain::outcome::OutcomeKind;
use gatecode_core::domain::result::ResultOrigin;
use gatecode_core::domain::submission::SubmissionRecord;
use gatecode_session::JudgeDetail;
use gatecode_session::PanelView;
use gatecode_session::view::{JudgeOutputView, RunOutputView};

/// Print the result panel
pub fn print_panel(view: &PanelView) {
    match view {
        PanelView::Placeholder => {
            println!("{}", "Run or submit your code to see results.".dimmed());
        }
        PanelView::Busy { submitting: true } => println!("{}", "Judging...".yellow()),
        PanelView::Busy { submitting: false } => println!("{}", "Running...".yellow()),
        PanelView::RunOutput(run) => print_run(run),
        PanelView::JudgeOutput(judge) => print_judge(judge),
    }
}

fn print_run(run: &RunOutputView) {
    print_status_line(run.status, run.label, run.origin);
    if let Some(runtime) = run.runtime_ms {
        println!("  Runtime: {} ms", runtime);
    }

    if let Some(stdout) = &run.stdout {
        println!("\n{}", "Output:".bold());
        print_block(stdout);
    }
    if let Some(stderr) = &run.stderr {
        println!("\n{}", "Error:".bold());
        for line in stderr.lines() {
            println!("  {}", line.red());
        }
    }
}

fn print_judge(judge: &JudgeOutputView) {
    print_status_line(judge.status, judge.label, judge.origin);

    if judge.origin == ResultOrigin::Server {
        println!("  {}/{} testcases passed", judge.passed, judge.total);
    }
    if let Some(runtime) = judge.runtime_ms {
        println!("  Runtime: {} ms", runtime);
    }
    if let Some(memory) = judge.memory_kb {
        println!("  Memory:  {:.1} MB", memory as f64 / 1024.0);
    }
    if let Some(percentiles) = &judge.percentiles {
        println!(
            "  Beats {}% of submissions on runtime",
            percentiles.runtime.to_string().green()
        );
        if let Some(memory) = percentiles.memory {
            println!(
                "  Beats {}% of submissions on memory",
                memory.to_string().green()
            );
        }
    }

    match &judge.detail {
        JudgeDetail::None => {}
        JudgeDetail::Diff {
            case_number,
            input,
            lines,
        } => {
            println!("\n{}", format!("Testcase {}", case_number).bold());
            if let Some(input) = input {
                println!("{}", "Input:".dimmed());
                print_block(input);
            }
            println!("{}", "Expected / Your output:".dimmed());
            for line in lines {
                if line.differs {
                    println!("  {} {}", "-".green(), line.expected_line.green());
                    println!("  {} {}", "+".red(), line.actual_line.red());
                } else {
                    println!("    {}", line.expected_line);
                }
            }
        }
        JudgeDetail::FailingCase {
            case_number,
            input,
            expected,
            output_label,
            output,
        } => {
            println!("\n{}", format!("Testcase {}", case_number).bold());
            if let Some(input) = input {
                println!("{}", "Input:".dimmed());
                print_block(input);
            }
            if let Some(expected) = expected {
                println!("{}", "Expected:".dimmed());
                print_block(expected);
            }
            if let Some(output) = output {
                println!("{}", format!("{}:", output_label).dimmed());
                print_block(output);
            }
        }
        JudgeDetail::CompilerOutput(output) => {
            println!("\n{}", "Compiler output:".bold());
            for line in output.lines() {
                println!("  {}", line.red());
            }
        }
        JudgeDetail::Message(message) => println!("  {}", message.red()),
    }

    if let Some(cases) = &judge.cases {
        println!("\n{}", "All testcases:".bold());
        for case in cases {
            println!(
                "  {:>3}. {}",
                case.index + 1,
                colorize_status(case.status, case.status.label())
            );
        }
    }
}

fn print_status_line(status: OutcomeKind, label: &str, origin: ResultOrigin) {
    let suffix = match origin {
        ResultOrigin::Server => String::new(),
        ResultOrigin::Client => " (client)".dimmed().to_string(),
    };
    println!("{}{}", colorize_status(status, label).bold(), suffix);
}

fn print_block(text: &str) {
    for line in text.lines() {
        println!("  {}", line);
    }
}

/// Print a history entry
pub fn print_submission(record: &SubmissionRecord) {
    println!(
        "  {} {}  {}",
        "▸".cyan(),
        colorize_status(record.status, record.status.label()),
        record.id.dimmed()
    );
    println!("    Language: {}", record.language);
    println!("    Runtime:  {} ms", record.runtime_ms);
    if let Some(memory) = record.memory_kb {
        println!("    Memory:   {:.1} MB", memory as f64 / 1024.0);
    }
    println!(
        "    Created:  {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    if let Some(message) = &record.error_message {
        println!("    Error:    {}", message.red());
    }
    println!();
}

/// Colorize an outcome label
fn colorize_status(status: OutcomeKind, label: &str) -> ColoredString {
    match status {
        OutcomeKind::Accepted => label.green(),
        OutcomeKind::WrongAnswer | OutcomeKind::RuntimeError | OutcomeKind::CompileError => {
            label.red()
        }
        OutcomeKind::TimeLimitExceeded | OutcomeKind::MemoryLimitExceeded => label.yellow(),
        OutcomeKind::SystemError => label.magenta(),
    }
}

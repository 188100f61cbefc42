//! Report rendering.
//!
//! Pure `Report` -> `String` formatting. The color policy is injected as
//! a [`Palette`] value; there is no process-wide presentation state.

use attest_domain::{Report, Suite};

/// ANSI styling policy for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Prefix for fully passing lines.
    pub green: &'static str,
    /// Prefix for failing lines.
    pub red: &'static str,
    /// Suffix restoring the default style.
    pub reset: &'static str,
}

impl Palette {
    /// ANSI color codes for terminals.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            green: "\x1b[32m",
            red: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }

    /// No styling, for pipes and files.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            green: "",
            red: "",
            reset: "",
        }
    }
}

/// Renders one suite report: a summary line, green on full pass and red
/// otherwise, followed by the error listing per failing test case.
///
/// The suite is passed alongside the report so failing test cases can be
/// listed by name rather than by bare index.
#[must_use]
pub fn render(suite: &Suite, report: &Report, palette: &Palette) -> String {
    let color = if report.all_passed() {
        palette.green
    } else {
        palette.red
    };
    let mut out = format!(
        "{color}{}: {}/{} passed{}\n",
        report.suite_name, report.passed, report.total, palette.reset
    );

    for (index, errors) in &report.failures {
        let label = suite
            .tests
            .get(*index)
            .map_or_else(|| format!("case {index}"), attest_domain::TestCase::label);
        out.push_str(&format!("{}  FAIL {label}{}\n", palette.red, palette.reset));
        for error in errors {
            out.push_str(&format!("       {error}\n"));
        }
    }

    out
}

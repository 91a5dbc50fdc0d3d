//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use crate::tools::{ComplexityOutput, KindsOutput, ModulesOutput, SearchOutput};
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── search ──────────────────────────────────────────────────────────────────

pub fn fmt_search(w: &mut impl Write, out: &SearchOutput, color: bool) -> io::Result<()> {
    let sections = [
        ("modules", &out.modules),
        ("teams", &out.teams),
        ("applications", &out.applications),
    ];

    for (label, values) in sections {
        if values.is_empty() {
            continue;
        }
        if color {
            writeln!(w, "{}", label.bold())?;
        } else {
            writeln!(w, "{label}")?;
        }
        for value in values {
            writeln!(w, "  {value}")?;
        }
    }

    if out.total_returned == 0 {
        if color {
            writeln!(w, "{}", "no matches".dimmed())?;
        } else {
            writeln!(w, "no matches")?;
        }
    }

    Ok(())
}

// ── modules ─────────────────────────────────────────────────────────────────

pub fn fmt_modules(w: &mut impl Write, out: &ModulesOutput, color: bool) -> io::Result<()> {
    for module in &out.modules {
        if color {
            writeln!(w, "{}  {}", module.module_id.bold(), module.name)?;
        } else {
            writeln!(w, "{}  {}", module.module_id, module.name)?;
        }
        if !module.description.is_empty() {
            if color {
                writeln!(w, "  {}", module.description.dimmed())?;
            } else {
                writeln!(w, "  {}", module.description)?;
            }
        }
    }

    writeln!(w, "{} modules", out.total_returned)?;
    Ok(())
}

// ── kinds ───────────────────────────────────────────────────────────────────

pub fn fmt_kinds(w: &mut impl Write, out: &KindsOutput) -> io::Result<()> {
    for kind in &out.kinds {
        writeln!(w, "{kind}")?;
    }
    Ok(())
}

// ── complexity ──────────────────────────────────────────────────────────────

pub fn fmt_complexity(w: &mut impl Write, out: &ComplexityOutput, color: bool) -> io::Result<()> {
    for module in &out.modules {
        if color {
            writeln!(
                w,
                "{:>6.1}  {}",
                module.complexity_score,
                module.module_id.bold()
            )?;
        } else {
            writeln!(w, "{:>6.1}  {}", module.complexity_score, module.module_id)?;
        }
    }

    writeln!(w, "{} modules", out.total_returned)?;
    Ok(())
}

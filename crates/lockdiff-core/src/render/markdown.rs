//! Markdown report rendering.

use crate::diff::classify::{gitmoji, VersionChangeLevel};
use crate::diff::model::{LockfileChanges, RequiresPythonChange, UpdatedPackage};
use crate::model::PackageRecord;
use crate::render::format::OutputFormat;
use crate::version::PackageVersion;

/// First line of every report
pub const REPORT_TITLE: &str = "# uv Lockfile Report";

const PYTHON_HEADING: &str = "## Python Version";
const ADDED_HEADING: &str = "## Added Packages";
const CHANGED_HEADING: &str = "## Changed Packages";
const REMOVED_HEADING: &str = "## Removed Packages";

const SEMVER_LINK: &str = "[Learn more about semantic versioning](https://semver.org)";

/// Placeholder for an absent version or Python constraint
const MISSING: &str = "-";

/// Render changes as a markdown document
///
/// The title is always present. Each non-empty section follows in the
/// order Python constraint, Added, Changed, Removed. The learn-more block
/// only applies to [`OutputFormat::Simple`] and is appended once, after
/// all sections, when at least one section was rendered.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render_markdown(
    changes: &LockfileChanges,
    format: OutputFormat,
    show_learn_more_link: bool,
) -> String {
    let mut lines = vec![REPORT_TITLE.to_string()];

    match format {
        OutputFormat::Table => render_table(changes, &mut lines),
        OutputFormat::Simple => render_simple(changes, &mut lines),
    }

    if format == OutputFormat::Simple && show_learn_more_link && lines.len() > 1 {
        push_learn_more(&mut lines);
    }

    lines.join("\n")
}

fn render_table(changes: &LockfileChanges, lines: &mut Vec<String>) {
    let python = changes.requires_python();
    if python.is_changed() {
        lines.push(PYTHON_HEADING.to_string());
        lines.push("| Old | New |".to_string());
        lines.push("|--|--|".to_string());
        lines.push(format!("| {} | {} |", old_python(python), new_python(python)));
    }

    push_table_section(lines, ADDED_HEADING, changes.added());

    if !changes.updated().is_empty() {
        lines.push(CHANGED_HEADING.to_string());
        lines.push("| Package | Old Version | New Version |".to_string());
        lines.push("|--|--|--|".to_string());
        for update in changes.updated() {
            lines.push(format!(
                "| {} | {} | {} |",
                update.name, update.old_version, update.new_version
            ));
        }
    }

    push_table_section(lines, REMOVED_HEADING, changes.removed());
}

fn push_table_section(lines: &mut Vec<String>, heading: &str, packages: &[PackageRecord]) {
    if packages.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    lines.push("| Package | Version |".to_string());
    lines.push("|--|--|".to_string());
    for package in packages {
        lines.push(format!(
            "| {} | {} |",
            package.name,
            version_text(package.version.as_ref())
        ));
    }
}

fn render_simple(changes: &LockfileChanges, lines: &mut Vec<String>) {
    let python = changes.requires_python();
    if python.is_changed() {
        lines.push(PYTHON_HEADING.to_string());
        lines.push(format!("`{}` -> `{}`", old_python(python), new_python(python)));
    }

    push_simple_section(lines, ADDED_HEADING, changes.added());

    if !changes.updated().is_empty() {
        lines.push(CHANGED_HEADING.to_string());
        lines.extend(changes.updated().iter().map(simple_update_line));
    }

    push_simple_section(lines, REMOVED_HEADING, changes.removed());
}

fn push_simple_section(lines: &mut Vec<String>, heading: &str, packages: &[PackageRecord]) {
    if packages.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    for package in packages {
        lines.push(format!(
            "`{}`: `{}`",
            package.name,
            version_text(package.version.as_ref())
        ));
    }
}

fn simple_update_line(update: &UpdatedPackage) -> String {
    format!(
        "{} `{}`: `{}` -> `{}`",
        gitmoji(update.change_level()),
        update.name,
        update.old_version,
        update.new_version
    )
}

fn push_learn_more(lines: &mut Vec<String>) {
    lines.push("---".to_string());
    for level in VersionChangeLevel::ALL {
        lines.push(format!("- {} {}", gitmoji(level), level.as_str()));
    }
    lines.push(SEMVER_LINK.to_string());
}

fn version_text(version: Option<&PackageVersion>) -> String {
    version.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

fn old_python(change: &RequiresPythonChange) -> &str {
    change.old.as_deref().unwrap_or(MISSING)
}

fn new_python(change: &RequiresPythonChange) -> &str {
    change.new.as_deref().unwrap_or(MISSING)
}

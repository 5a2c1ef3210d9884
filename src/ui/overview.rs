//! Course overview rendering

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::widgets::{continuation_line, format_duration, lesson_line, progress_bar};
use crate::config::Config;
use crate::progression::CourseOutline;
use crate::theme::Theme;

/// Render the course overview: course header, then every scope with its lessons
///
/// Lesson badges use the course-wide states; scope bars use scope-local counts.
pub fn overview_lines(
    outline: &CourseOutline,
    config: &Config,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(
        format!("Course {}  ", outline.course_id),
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    )];
    header.extend(progress_bar(outline.progress.percent, config.bar_width, theme));
    header.push(Span::styled(
        format!("  {}/{} lessons", outline.progress.done, outline.progress.total),
        Style::default().fg(theme.fg_muted),
    ));
    if config.show_durations && outline.progress.total_duration_minutes > 0 {
        header.push(Span::styled(
            format!("  {}", format_duration(outline.progress.total_duration_minutes)),
            Style::default().fg(theme.fg_muted),
        ));
    }
    lines.push(Line::from(header));
    lines.push(continuation_line(&outline.continuation, theme));

    if outline.scopes.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "No lessons published yet",
            Style::default().fg(theme.fg_muted),
        )));
        return lines;
    }

    for summary in &outline.scopes {
        lines.push(Line::default());

        let mut scope_header = vec![Span::styled(
            format!("{}  ", summary.scope.title),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )];
        scope_header.extend(progress_bar(summary.percent, config.bar_width, theme));
        scope_header.push(Span::styled(
            format!("  {}/{}", summary.done, summary.total),
            Style::default().fg(theme.fg_muted),
        ));
        lines.push(Line::from(scope_header));

        for (index, item) in outline.items_in(summary.scope.id).enumerate() {
            lines.push(lesson_line(index + 1, item, config, theme));
        }
    }

    lines
}

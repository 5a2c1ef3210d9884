//! Section page rendering

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::widgets::{continuation_line, format_duration, lesson_line, progress_bar};
use crate::config::Config;
use crate::progression::SectionOutline;
use crate::theme::Theme;

/// Render one section with its scope-local states
pub fn section_lines(
    outline: &SectionOutline,
    config: &Config,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let progress = &outline.progress;

    let mut header = vec![Span::styled(
        format!("{}  ", outline.scope.title),
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    )];
    header.extend(progress_bar(progress.percent, config.bar_width, theme));
    header.push(Span::styled(
        format!("  {}/{} lessons", progress.done, progress.total),
        Style::default().fg(theme.fg_muted),
    ));
    if config.show_durations && progress.total_duration_minutes > 0 {
        header.push(Span::styled(
            format!("  {}", format_duration(progress.total_duration_minutes)),
            Style::default().fg(theme.fg_muted),
        ));
    }

    let mut lines = vec![Line::from(header), continuation_line(&outline.continuation, theme)];
    lines.push(Line::default());

    if progress.is_empty() {
        lines.push(Line::from(Span::styled(
            "This section has no lessons yet",
            Style::default().fg(theme.fg_muted),
        )));
        return lines;
    }

    lines.extend(
        progress
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| lesson_line(index + 1, item, config, theme)),
    );
    lines
}

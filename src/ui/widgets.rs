//! Small building blocks: status badges, progress bars, lesson rows

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::Config;
use crate::course::{DecoratedLesson, LessonState};
use crate::progression::Continuation;
use crate::theme::Theme;

/// Status indicators for lessons
pub const STATUS_LOCKED: &str = "○";
pub const STATUS_NEXT: &str = "●";
pub const STATUS_DONE: &str = "✓";

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Status badge for a lesson state
pub fn status_glyph(state: LessonState) -> &'static str {
    match state {
        LessonState::Done => STATUS_DONE,
        LessonState::Next => STATUS_NEXT,
        LessonState::Locked => STATUS_LOCKED,
    }
}

/// Split a bar of `width` cells into filled and empty cells
pub fn bar_cells(percent: u8, width: u16) -> (usize, usize) {
    let width = width as usize;
    let filled = (width * percent.min(100) as usize + 50) / 100;
    (filled, width - filled)
}

/// Progress bar spans followed by the percentage label
pub fn progress_bar(percent: u8, width: u16, theme: &Theme) -> Vec<Span<'static>> {
    let (filled, empty) = bar_cells(percent, width);
    vec![
        Span::styled(BAR_FILLED.repeat(filled), Style::default().fg(theme.bar_filled)),
        Span::styled(BAR_EMPTY.repeat(empty), Style::default().fg(theme.bar_empty)),
        Span::styled(format!(" {percent:>3}%"), Style::default().fg(theme.fg_primary)),
    ]
}

/// Human-readable duration, e.g. `45 min` or `1 h 05 min`
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}

/// One lesson row: badge, position, title, then optional duration and score
pub fn lesson_line(
    position: usize,
    item: &DecoratedLesson,
    config: &Config,
    theme: &Theme,
) -> Line<'static> {
    let mut style = theme.lesson_style(item.state);
    if item.state == LessonState::Next {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![Span::styled(
        format!("   {} {}. {}", status_glyph(item.state), position, item.lesson.title),
        style,
    )];

    if config.show_durations {
        if let Some(minutes) = item.lesson.duration_minutes {
            spans.push(Span::styled(
                format!("  {}", format_duration(minutes)),
                Style::default().fg(theme.fg_muted),
            ));
        }
    }

    if config.show_scores {
        if let Some(score) = item.lesson.result_percent {
            spans.push(Span::styled(
                format!("  [{score:.0}%]"),
                Style::default().fg(theme.warning),
            ));
        }
    }

    Line::from(spans)
}

/// Call-to-action row, e.g. `Continue → /student/courses/1/lessons/4`
pub fn continuation_line(continuation: &Continuation, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} \u{2192} ", continuation.mode.label()),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(continuation.href.clone(), Style::default().fg(theme.info)),
    ])
}

/// Flatten styled lines into plain text, one line per row
pub fn to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Animated loading panel widget
//!
//! Draws one [`PanelSnapshot`]: header bar, title banner, step label with
//! percentage, segmented progress bar, memory/thread stats, the log pane and
//! the footer bar. All state lives in the snapshot; the widget only decides
//! where things go.

use archer_core::PanelSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::banner::{banner_lines, banner_width, BANNER_HEIGHT, COMPACT_TITLE};
use crate::tui::themes::Theme;
use crate::tui::utils::{clip_to_width, display_width, truncate_ellipsis};

pub const HEADER_TITLE: &str = "ARCHER EXCHANGE";
pub const FOOTER_STATUS: &str = "SECURE CONNECTION:";
pub const FOOTER_PENDING: &str = "PENDING...";
pub const FOOTER_VERSION: &str = "V.2.4.0";
pub const FOOTER_PORT: &str = "PORT: 8080";

/// Below this the panel collapses to a single status line
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 12;

/// Rule plus the eight log lines
const LOG_PANE_HEIGHT: u16 = 9;
const BAR_HEIGHT: u16 = 3;

/// One terminal column of the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentCell {
    Filled,
    Empty,
    Gap,
}

/// Map `segment_count` segments onto `width` columns.
///
/// When there are at least two columns per segment, the first column of
/// every segment but the first is a gap so the bar reads as blocks.
pub fn segment_cells(width: u16, segment_count: usize, filled: usize) -> Vec<SegmentCell> {
    let width = width as usize;
    if width == 0 || segment_count == 0 {
        return Vec::new();
    }
    let gapped = width >= segment_count * 2;

    (0..width)
        .map(|x| {
            let segment = x * segment_count / width;
            let starts_segment = x > 0 && segment != (x - 1) * segment_count / width;
            if gapped && starts_segment {
                SegmentCell::Gap
            } else if segment < filled {
                SegmentCell::Filled
            } else {
                SegmentCell::Empty
            }
        })
        .collect()
}

/// Split off `right_width` columns at the right edge of `area`
fn split_right(area: Rect, right_width: u16) -> [Rect; 2] {
    Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area)
}

pub struct AnimatedPanel<'a> {
    snapshot: &'a PanelSnapshot,
    theme: &'a Theme,
    pulse_on: bool,
}

impl<'a> AnimatedPanel<'a> {
    pub fn new(snapshot: &'a PanelSnapshot, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            theme,
            pulse_on: true,
        }
    }

    /// Phase of the blinking cursor and the footer's pending text
    pub fn pulse(mut self, on: bool) -> Self {
        self.pulse_on = on;
        self
    }

    fn accent(&self) -> Style {
        Style::default()
            .fg(self.theme.accent_color)
            .add_modifier(Modifier::BOLD)
    }

    fn pulse_style(&self) -> Style {
        let color = if self.pulse_on {
            self.theme.accent_color
        } else {
            self.theme.pulse_dim_color
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn render_compact(&self, area: Rect, buf: &mut Buffer) {
        let line = format!(
            "ARCHER {}% {}",
            self.snapshot.percent(),
            self.snapshot.step_label.to_uppercase()
        );
        buf.set_string(
            area.x,
            area.y,
            clip_to_width(&line, area.width as usize),
            self.accent().bg(self.theme.panel_bg_color),
        );
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bar_bg_color));
        let inner = area.inner(Margin::new(1, 0));
        buf.set_string(inner.x, inner.y, "▀▀ ▀▀ ▀▀", self.accent());
        Paragraph::new(Line::styled(HEADER_TITLE, self.accent()))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bar_bg_color));
        let inner = area.inner(Margin::new(2, 0));
        let right = format!("{FOOTER_VERSION}   {FOOTER_PORT}");
        let left_width = display_width(FOOTER_STATUS) + 1 + display_width(FOOTER_PENDING);
        let right_width = if display_width(&right) + left_width + 2 <= inner.width as usize {
            display_width(&right) as u16
        } else {
            0
        };
        let [left_area, right_area] = split_right(inner, right_width);

        Paragraph::new(Line::from(vec![
            Span::styled(FOOTER_STATUS, self.accent()),
            Span::raw(" "),
            Span::styled(FOOTER_PENDING, self.pulse_style()),
        ]))
        .render(left_area, buf);
        Paragraph::new(Line::styled(right, self.accent()))
            .alignment(Alignment::Right)
            .render(right_area, buf);
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let style = self.accent();
        if area.height >= BANNER_HEIGHT && area.width as usize >= banner_width() {
            let lines: Vec<Line> = banner_lines()
                .into_iter()
                .map(|l| Line::styled(l, style))
                .collect();
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(area, buf);
        } else if area.height > 0 {
            Paragraph::new(Line::styled(COMPACT_TITLE, style))
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }

    fn render_step_line(&self, area: Rect, buf: &mut Buffer) {
        let percent = format!("{}%", self.snapshot.percent());
        let [left, right] = split_right(area, display_width(&percent) as u16);
        let label_room = (left.width as usize).saturating_sub(3);
        let label = truncate_ellipsis(&self.snapshot.step_label, label_room).to_uppercase();

        Paragraph::new(Line::from(vec![
            Span::styled("█", self.pulse_style()),
            Span::raw(" "),
            Span::styled(label, self.accent()),
        ]))
        .render(left, buf);
        Paragraph::new(Line::styled(percent, self.accent()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }

    fn render_bar(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let cells = segment_cells(
            inner.width,
            self.snapshot.segment_count,
            self.snapshot.filled_segments,
        );
        for y in inner.top()..inner.bottom() {
            for (offset, kind) in cells.iter().enumerate() {
                let x = inner.x + offset as u16;
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                match kind {
                    SegmentCell::Filled => {
                        cell.set_char('█').set_fg(self.theme.accent_color);
                    }
                    SegmentCell::Empty => {
                        cell.set_char('█').set_fg(self.theme.segment_empty_color);
                    }
                    SegmentCell::Gap => {
                        cell.set_char(' ');
                    }
                }
            }
        }
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let threads = format!("THREADS: {}", self.snapshot.thread_count);
        let [left, right] = split_right(area, display_width(&threads) as u16);
        Paragraph::new(Line::styled(
            format!("MEM: {}", self.snapshot.mem_addr),
            self.accent(),
        ))
        .render(left, buf);
        Paragraph::new(Line::styled(threads, self.accent()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }

    /// Newest line at the bottom; older lines scroll off the top
    fn render_logs(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.separator_color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let visible = inner.height as usize;
        let logs = &self.snapshot.logs;
        let shown = &logs[logs.len().saturating_sub(visible)..];
        let top = inner.bottom() - shown.len() as u16;
        let style = Style::default()
            .fg(self.theme.text_color)
            .add_modifier(Modifier::BOLD);

        for (i, line) in shown.iter().enumerate() {
            buf.set_string(
                inner.x,
                top + i as u16,
                clip_to_width(line, inner.width as usize),
                style,
            );
        }
    }
}

impl Widget for AnimatedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.panel_bg_color));
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            self.render_compact(area, buf);
            return;
        }

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.theme.accent_color));
        let inner = frame.inner(area);
        frame.render(area, buf);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_header(header, buf);
        self.render_footer(footer, buf);

        let margin = if body.height >= 20 { 1 } else { 0 };
        let body = body.inner(Margin::new(2, margin));

        // banner + gap + step + bar + stats + gap
        let fixed_without_banner = 1 + 1 + BAR_HEIGHT + 1 + 1;
        let banner_height = if body.height >= BANNER_HEIGHT + fixed_without_banner + 4 {
            BANNER_HEIGHT
        } else {
            1
        };
        let log_height = body
            .height
            .saturating_sub(banner_height + fixed_without_banner)
            .min(LOG_PANE_HEIGHT);

        let [banner, _, step, bar, stats, _, logs] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(log_height),
        ])
        .areas(body);

        self.render_banner(banner, buf);
        self.render_step_line(step, buf);
        self.render_bar(bar, buf);
        self.render_stats(stats, buf);
        self.render_logs(logs, buf);
    }
}

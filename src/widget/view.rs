//! Rendering for the countdown widget.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

use super::digits;
use super::Model;
use crate::host::Host;
use crate::key::KeyMap as _;

const MUTED: &str = "#6b7280";
const SUBTLE: &str = "#9ca3af";
const CHIP_FG: &str = "#4b5563";
const CHIP_BG: &str = "#f3f4f6";
const SUCCESS: &str = "#16a34a";
const BUTTON_TEXT: &str = "#ffffff";

// Pixel sizes per terminal cell, for mapping the padding setting
const PX_PER_ROW: f64 = 16.0;
const PX_PER_COL: f64 = 8.0;

pub(super) fn render<H: Host>(model: &Model<H>) -> String {
    let params = model.parameters();

    let mut blocks = vec![
        Style::new()
            .foreground(Color::from(MUTED))
            .bold(true)
            .render(&params.title),
        clock(model),
        buttons(model),
    ];
    if model.finished() {
        blocks.push(
            Style::new()
                .foreground(Color::from(SUCCESS))
                .bold(true)
                .render(params.completion_message()),
        );
    }
    if model.focus {
        blocks.push(help(model));
    }

    let badge = Style::new()
        .foreground(Color::from(CHIP_FG))
        .background(Color::from(CHIP_BG))
        .padding(0, 1, 0, 1)
        .render(params.mode.as_str());

    let content = stack(&badge, &blocks.join("\n\n"));

    let padding = &params.appearance.layout.padding;
    let rows = cells(*padding, PX_PER_ROW);
    let cols = cells(*padding, PX_PER_COL);
    let framed = Style::new()
        .background(Color::from(params.appearance.colors.background_color.as_str()))
        .padding(rows, cols, rows, cols)
        .render(&content);

    indent_to_center(&framed, model.width)
}

fn clock<H: Host>(model: &Model<H>) -> String {
    let params = model.parameters();
    let style = Style::new()
        .foreground(Color::from(params.appearance.colors.timer_color.as_str()))
        .bold(true);
    let text = model.formatted_time();

    if digits::is_large(params.appearance.layout.font_size) {
        digits::render(&text)
            .iter()
            .map(|row| style.render(row))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        style.render(&text)
    }
}

fn buttons<H: Host>(model: &Model<H>) -> String {
    let finished = model.finished();
    let label = if model.running() { "Pause" } else { "Start" };
    let fill = if finished {
        SUBTLE
    } else {
        model.parameters().appearance.colors.button_color.as_str()
    };

    let primary = Style::new()
        .foreground(Color::from(BUTTON_TEXT))
        .background(Color::from(fill))
        .bold(true)
        .padding(0, 2, 0, 2)
        .render(label);
    let reset = Style::new()
        .foreground(Color::from(CHIP_FG))
        .background(Color::from(CHIP_BG))
        .padding(0, 2, 0, 2)
        .render("Reset");

    lipgloss::join_horizontal(lipgloss::TOP, &[primary.as_str(), "  ", reset.as_str()])
}

fn help<H: Host>(model: &Model<H>) -> String {
    let parts: Vec<String> = model
        .keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect();
    Style::new()
        .foreground(Color::from(SUBTLE))
        .render(&parts.join(" • "))
}

/// Centers every line of `body` under a right-aligned `badge`, padding all
/// lines to the same width.
fn stack(badge: &str, body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let badge_width = lipgloss::width_visible(badge);
    let width = lines
        .iter()
        .map(|l| lipgloss::width_visible(l))
        .chain(std::iter::once(badge_width))
        .max()
        .unwrap_or(0);

    let mut out = Vec::with_capacity(lines.len() + 1);
    out.push(format!("{}{}", " ".repeat(width - badge_width), badge));
    for line in lines {
        let w = lipgloss::width_visible(line);
        let left = (width - w) / 2;
        let right = width - w - left;
        out.push(format!("{}{}{}", " ".repeat(left), line, " ".repeat(right)));
    }
    out.join("\n")
}

fn indent_to_center(block: &str, available: usize) -> String {
    let width = block
        .lines()
        .map(lipgloss::width_visible)
        .max()
        .unwrap_or(0);
    if available <= width {
        return block.to_string();
    }
    let indent = " ".repeat((available - width) / 2);
    block
        .lines()
        .map(|l| format!("{}{}", indent, l))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cells(px: f64, px_per_cell: f64) -> i32 {
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    (px / px_per_cell).round() as i32
}

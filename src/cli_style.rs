use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use genius_artists::{ArtistRecord, ArtistTable};

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 100,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

pub mod box_chars {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";

    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";

    pub const T_LEFT: &str = "├";
    pub const T_RIGHT: &str = "┤";
    pub const T_TOP: &str = "┬";
    pub const T_BOTTOM: &str = "┴";
    pub const CROSS: &str = "┼";

    pub const DIAMOND: &str = "◆";
    pub const BULLET: &str = "●";
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_not_found(subject: &str) {
    println!(
        " {} {}",
        "⚠".with(colors::ORANGE).bold(),
        format!("No artist found for {}", subject).with(colors::ORANGE)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Single Artist
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_artist(artist: &ArtistRecord) {
    println!(
        "  {} {} {}",
        box_chars::DIAMOND.with(colors::YELLOW),
        "artist_name:".with(colors::YELLOW).bold(),
        artist.name().unwrap_or("-").with(colors::GREEN).bold()
    );
    print_field("artist_id", artist.id().map(|id| id.to_string()));
    print_field(
        "followers_count",
        artist.followers_count().map(|count| count.to_string()),
    );
}

fn print_field(key: &str, value: Option<String>) {
    let value = match value {
        Some(value) => value.with(colors::WHITE),
        None => "-".to_string().with(colors::DIM),
    };
    println!(
        "  {} {} {}",
        box_chars::BULLET.with(colors::DIM),
        format!("{}:", key).with(colors::DIM),
        value
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Result Table
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_table(table: &ArtistTable) {
    let rows: Vec<[String; 4]> = table.rows().iter().map(|row| row.display_cells()).collect();

    let mut col_widths: Vec<usize> = ArtistTable::COLUMNS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in col_widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    print_border(
        &col_widths,
        box_chars::TOP_LEFT,
        box_chars::T_TOP,
        box_chars::TOP_RIGHT,
    );

    print!("{}", box_chars::VERTICAL.with(colors::YELLOW));
    for (header, width) in ArtistTable::COLUMNS.iter().zip(&col_widths) {
        let padding = width - header.width();
        print!(
            " {}{} ",
            header.with(colors::YELLOW).bold(),
            " ".repeat(padding)
        );
        print!("{}", box_chars::VERTICAL.with(colors::YELLOW));
    }
    println!();

    print_border(
        &col_widths,
        box_chars::T_LEFT,
        box_chars::CROSS,
        box_chars::T_RIGHT,
    );

    for row in &rows {
        print!("{}", box_chars::VERTICAL.with(colors::YELLOW));
        for (cell, width) in row.iter().zip(&col_widths) {
            let padding = width.saturating_sub(cell.width());
            // Absent values are dimmed so they don't read like data
            let styled = if cell == "-" {
                cell.clone().with(colors::DIM)
            } else {
                cell.clone().with(colors::WHITE)
            };
            print!(" {}{} ", styled, " ".repeat(padding));
            print!("{}", box_chars::VERTICAL.with(colors::YELLOW));
        }
        println!();
    }

    print_border(
        &col_widths,
        box_chars::BOTTOM_LEFT,
        box_chars::T_BOTTOM,
        box_chars::BOTTOM_RIGHT,
    );

    println!(
        " {}",
        format!(
            "{} of {} terms resolved",
            table.resolved_count(),
            table.len()
        )
        .with(colors::DIM)
    );
}

fn print_border(col_widths: &[usize], left: &str, junction: &str, right: &str) {
    print!("{}", left.with(colors::YELLOW));
    for (i, width) in col_widths.iter().enumerate() {
        print!(
            "{}",
            box_chars::HORIZONTAL.repeat(width + 2).with(colors::YELLOW)
        );
        if i < col_widths.len() - 1 {
            print!("{}", junction.with(colors::YELLOW));
        }
    }
    println!("{}", right.with(colors::YELLOW));
}

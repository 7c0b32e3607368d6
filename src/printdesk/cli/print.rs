use colored::Colorize;
use printdesk::api::{CmdMessage, MessageLevel};
use printdesk::config::{PrintdeskConfig, CONFIG_KEYS};
use printdesk::model::{PrinterRecord, PrinterStatus};
use printdesk::paginate::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LABEL_WIDTH: usize = 10;
const NAME_WIDTH: usize = 32;
const POSITION_WIDTH: usize = 8;
const PAPER_WIDTH: usize = 7;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_page(page: &Page<PrinterRecord>) {
    if page.items.is_empty() {
        return;
    }

    let id_width = page
        .items
        .iter()
        .map(|p| p.id.width())
        .max()
        .unwrap_or(0)
        .max(2);

    println!(
        "{}  {}  {}  {}  {}",
        pad("ID", id_width).bold(),
        pad("Brand / Model", NAME_WIDTH).bold(),
        pad("Position", POSITION_WIDTH).bold(),
        pad_left("Paper", PAPER_WIDTH).bold(),
        "Status".bold()
    );

    for printer in &page.items {
        let fields = &printer.fields;
        let name = format!("{} {}", fields.brand, fields.model);
        println!(
            "{}  {}  {}  {}  {}",
            pad(&printer.id, id_width).dimmed(),
            pad(&truncate_to_width(&name, NAME_WIDTH), NAME_WIDTH),
            pad(&printer.position_key(), POSITION_WIDTH),
            pad_left(&fields.paper_quantity.to_string(), PAPER_WIDTH),
            status_badge(fields.status)
        );
    }

    let (first, last) = page.display_range();
    let mut footer = format!(
        "Showing {}-{} of {} printers · page {}/{}",
        first, last, page.total_records, page.page, page.total_pages
    );
    if page.filtered_records != page.total_records {
        footer.push_str(&format!(" ({} match the filter)", page.filtered_records));
    }
    println!();
    println!("{}", footer.dimmed());
}

pub(super) fn print_printer(printer: &PrinterRecord) {
    let fields = &printer.fields;
    println!("{} {}", fields.brand.bold(), fields.model.bold());
    println!("--------------------------------");
    let rows = [
        ("ID", printer.id.clone()),
        ("Position", printer.position_key()),
        ("Paper", format!("{} sheets", fields.paper_quantity)),
        ("Type", fields.printer_type.to_string()),
        ("Added", fields.date_added.format("%Y-%m-%d").to_string()),
    ];
    for (label, value) in rows {
        println!("{}{}", pad(label, LABEL_WIDTH).dimmed(), value);
    }
    println!(
        "{}{}",
        pad("Status", LABEL_WIDTH).dimmed(),
        status_badge(fields.status)
    );
    if !fields.note.trim().is_empty() {
        println!("{}{}", pad("Note", LABEL_WIDTH).dimmed(), fields.note);
    }
}

pub(super) fn print_config(config: &PrintdeskConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn status_badge(status: PrinterStatus) -> String {
    let label = status.label();
    match status {
        PrinterStatus::Active => label.green().to_string(),
        PrinterStatus::Maintenance => label.yellow().to_string(),
        PrinterStatus::Inactive => label.red().to_string(),
    }
}

/// Pads `s` with spaces up to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

use std::time::Duration;

use console::Style;
use imgpress_core::export::ExportedLevel;
use imgpress_core::format::{format_kb, format_kb_value, format_percentage, format_ratio, pluralize};
use imgpress_core::method::CompressionMethod;
use imgpress_core::result::CompressionResult;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    selected: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            selected: Style::new().green().bold(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_methods() {
    let s = Styles::new();
    print_title(&s, "Compression Methods");

    for &method in CompressionMethod::ALL {
        let config = method.config();
        println!("  {}", s.header.apply_to(config.label));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Name"),
            s.method.apply_to(method)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Range"),
            s.value.apply_to(format!("1-{}", config.max_components))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Default"),
            s.value.apply_to(config.default_components)
        );
        println!("    {}", s.label.apply_to(config.description));
        println!();
    }
}

pub fn print_idle() {
    let s = Styles::new();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Session"),
        s.disabled.apply_to("no result (run `imgpress compress <image>`)")
    );
}

/// Result overview followed by the metrics of level `selected`.
pub fn print_result_summary(result: &CompressionResult, selected: usize, elapsed: Option<Duration>) {
    let s = Styles::new();
    print_title(&s, "Compression Result");

    let count = result.len() as u32;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(result.method().config().label)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Original"),
        s.value.apply_to(format!("{} KB", format_kb(result.original_size())))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Levels"),
        s.value.apply_to(format!(
            "{} {}",
            count,
            pluralize(count, "level", "levels")
        ))
    );
    if let Some(elapsed) = elapsed {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Time"),
            s.value.apply_to(format!("{:.2}s", elapsed.as_secs_f64()))
        );
    }
    println!();

    print_level_section(&s, result, selected);
}

pub fn print_level(result: &CompressionResult, index: usize) {
    let s = Styles::new();
    println!();
    print_level_section(&s, result, index);
}

fn print_level_section(s: &Styles, result: &CompressionResult, index: usize) {
    let Some(m) = result.metrics(index) else {
        return;
    };
    let n = m.num_components;

    println!(
        "  {} {}",
        s.header.apply_to(format!("Level {}/{}", index + 1, result.len())),
        s.selected.apply_to(format!(
            "{} {}",
            n,
            pluralize(n, "component", "components")
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{} KB", format_kb_value(m.size_kb)))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Of original"),
        s.value.apply_to(format!("{}%", format_percentage(m.size_percentage)))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Ratio"),
        s.value.apply_to(format!("{}:1", format_ratio(m.compression_ratio)))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Per comp."),
        s.value
            .apply_to(format!("{} KB", format_kb_value(m.size_per_component_kb)))
    );
    println!();
}

/// One row per level, the selected one marked.
pub fn print_levels_table(result: &CompressionResult, selected: usize) {
    let s = Styles::new();
    print_title(&s, &format!("{} Levels", result.method()));

    println!(
        "    {:>5}  {:>10}  {:>12}  {:>8}  {:>10}  {:>12}",
        s.label.apply_to("#"),
        s.label.apply_to("Components"),
        s.label.apply_to("Size (KB)"),
        s.label.apply_to("% Orig"),
        s.label.apply_to("Ratio"),
        s.label.apply_to("KB/Comp")
    );
    for index in 0..result.len() {
        let Some(m) = result.metrics(index) else {
            continue;
        };
        let marker = if index == selected { "\u{25b6}" } else { " " };
        let row = format!(
            "{:>5}  {:>10}  {:>12}  {:>8}  {:>10}  {:>12}",
            index,
            m.num_components,
            format_kb_value(m.size_kb),
            format_percentage(m.size_percentage),
            format_ratio(m.compression_ratio),
            format_kb_value(m.size_per_component_kb)
        );
        if index == selected {
            println!("  {} {}", s.selected.apply_to(marker), s.selected.apply_to(row));
        } else {
            println!("  {} {}", marker, s.value.apply_to(row));
        }
    }
    println!();
}

pub fn print_exported(exported: &[ExportedLevel]) {
    let s = Styles::new();
    for e in exported {
        println!(
            "  {:<10}{}  {}",
            s.method.apply_to(format!("n={}", e.num_components)),
            s.path.apply_to(e.path.display()),
            s.label.apply_to(format!(
                "{}x{}, {} KB",
                e.width,
                e.height,
                format_kb(e.bytes as u64)
            ))
        );
    }
}

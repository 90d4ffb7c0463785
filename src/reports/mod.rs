// ===== aimforge/src/reports/mod.rs =====
use aimforge::calculator::{CalculationBreakdown, SightKind};
use aimforge::device::{classify_device, device_score, performance_tier, DeviceInfo};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

pub fn print_settings_report(detail: &CalculationBreakdown) {
    println!(
        "\n🎯 === {} | {} tier | {} ratios ===",
        detail.device_name, detail.tier, detail.ratio_table
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Slider").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("General").add_attribute(Attribute::Bold),
        Cell::new(detail.settings.general).fg(Color::Cyan),
    ]);
    for kind in SightKind::iter() {
        table.add_row(vec![
            Cell::new(kind.to_string()),
            Cell::new(detail.settings.sight(kind)),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_breakdown_report(detail: &CalculationBreakdown) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Factor").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("Bucket"),
        Cell::new(detail.bucket.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("High-end"),
        Cell::new(if detail.high_end { "yes" } else { "no" }),
    ]);
    table.add_row(vec![
        Cell::new("Base Value").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", detail.base_value)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(format!("Play Style ({})", detail.play_style)),
        Cell::new(format!("x{:.2}", detail.play_style_modifier)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Experience ({})", detail.experience)),
        Cell::new(format!("x{:.2}", detail.experience_modifier)),
    ]);
    table.add_row(vec![
        Cell::new("Optimization"),
        Cell::new(format!("x{:.4}", detail.optimization_factor)),
    ]);
    table.add_row(vec![
        Cell::new("Device Boost"),
        Cell::new(format!("x{:.4}", detail.device_boost)),
    ]);
    table.add_row(vec![
        Cell::new("Raw General").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", detail.general_raw)),
    ]);

    println!("\n{}", table);
}

pub fn print_device_report(devices: &[&DeviceInfo]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Device").add_attribute(Attribute::Bold),
        Cell::new("Bucket"),
        Cell::new("Tier"),
        Cell::new("Screen"),
        Cell::new("Hz"),
        Cell::new("CPU"),
        Cell::new("GPU"),
        Cell::new("RAM"),
        Cell::new("Year"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in 3..=9 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for device in devices {
        table.add_row(vec![
            Cell::new(&device.name).add_attribute(Attribute::Bold),
            Cell::new(classify_device(device).to_string()),
            Cell::new(performance_tier(device).to_string()),
            Cell::new(format!("{:.1}\"", device.screen_size)),
            Cell::new(device.refresh_rate),
            Cell::new(format!("{:.0}", device.processor_score)),
            Cell::new(format!("{:.0}", device.gpu_score)),
            Cell::new(device.ram.map_or("-".to_string(), |r| format!("{:.0}G", r))),
            Cell::new(device.release_year.map_or("-".to_string(), |y| y.to_string())),
            Cell::new(device_score(device)).fg(Color::Cyan),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_audit_report(details: &[CalculationBreakdown]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Device").add_attribute(Attribute::Bold),
        Cell::new("Bucket"),
        Cell::new("Ratios"),
        Cell::new("Base"),
        Cell::new("General").fg(Color::Cyan),
        Cell::new("Red Dot"),
        Cell::new("2x"),
        Cell::new("4x"),
        Cell::new("Sniper"),
        Cell::new("Free Look"),
    ]);

    for i in 3..=9 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for d in details {
        table.add_row(vec![
            Cell::new(&d.device_name).add_attribute(Attribute::Bold),
            Cell::new(d.bucket.to_string()),
            Cell::new(d.ratio_table.to_string()),
            Cell::new(format!("{:.0}", d.base_value)),
            Cell::new(d.settings.general).fg(Color::Cyan),
            Cell::new(d.settings.red_dot),
            Cell::new(d.settings.scope_2x),
            Cell::new(d.settings.scope_4x),
            Cell::new(d.settings.sniper_scope),
            Cell::new(d.settings.free_look),
        ]);
    }

    println!("\n{}", table);
}

//! Build script for ardubomb-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates bomb.toml at compile time
//! - Generates the `BOMB_CONFIG` constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest GPIO number + 1 on the RP2040
const GPIO_COUNT: i64 = 30;

fn main() {
    setup_linker();
    let config = load_config();
    let bomb = validate_config(&config);
    generate_config(&bomb);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse bomb.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=bomb.toml");

    let config_path = Path::new("bomb.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: bomb.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a bomb.toml configuration file.           ║\n\
            ║  Please create one in the ardubomb-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read bomb.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in bomb.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a boxed list of problems
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validated configuration, ready for code generation
struct Bomb {
    flash_ms: i64,
    countdown_ms: i64,
    long_press_ms: i64,
    return_to_flash: bool,
    tone_hz: i64,
    columns: i64,
    rows: i64,
    brightness: i64,
    splash: String,
    pins: Pins,
    beep: Vec<(i64, i64, i64)>,
    beep_final: (i64, i64),
}

struct Pins {
    lcd_rs: i64,
    lcd_en: i64,
    lcd_data: Vec<i64>,
    segment_clk: i64,
    segment_dio: i64,
    keypad_rows: Vec<i64>,
    keypad_cols: Vec<i64>,
    trigger: i64,
    beeper: i64,
    led: i64,
}

impl Pins {
    fn all(&self) -> Vec<(String, i64)> {
        let mut all = vec![
            ("lcd_rs".to_string(), self.lcd_rs),
            ("lcd_en".to_string(), self.lcd_en),
            ("segment_clk".to_string(), self.segment_clk),
            ("segment_dio".to_string(), self.segment_dio),
            ("trigger".to_string(), self.trigger),
            ("beeper".to_string(), self.beeper),
            ("led".to_string(), self.led),
        ];
        for (name, list) in [
            ("lcd_data", &self.lcd_data),
            ("keypad_rows", &self.keypad_rows),
            ("keypad_cols", &self.keypad_cols),
        ] {
            for (i, pin) in list.iter().enumerate() {
                all.push((format!("{}[{}]", name, i), *pin));
            }
        }
        all
    }
}

/// Integer field lookup that records what is wrong
fn int(section: &toml::Value, name: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match section.get(key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", name, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", name, key));
            0
        }
    }
}

/// Fixed-length integer array lookup
fn int_array(
    section: &toml::Value,
    name: &str,
    key: &str,
    len: usize,
    errors: &mut Vec<String>,
) -> Vec<i64> {
    let values: Vec<i64> = match section.get(key).and_then(|v| v.as_array()) {
        Some(items) => items.iter().filter_map(|v| v.as_integer()).collect(),
        None => {
            errors.push(format!("[{}] '{}' must be an array", name, key));
            return vec![0; len];
        }
    };
    if values.len() != len {
        errors.push(format!("[{}] '{}' needs {} integers", name, key, len));
        return vec![0; len];
    }
    values
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let errors: Vec<String> = ["timing", "tone", "display", "pins", "beep", "beep_final"]
        .iter()
        .filter(|section| config.get(**section).is_none())
        .map(|section| format!("Missing [{}] section", section))
        .collect();

    report("Missing required sections in bomb.toml", &errors);
}

fn validate_config(config: &toml::Value) -> Bomb {
    validate_required_sections(config);

    let timing = &config["timing"];
    let tone = &config["tone"];
    let display = &config["display"];
    let pins = &config["pins"];

    let mut errors = Vec::new();

    let flash_ms = int(timing, "timing", "flash_ms", &mut errors);
    let countdown_ms = int(timing, "timing", "countdown_ms", &mut errors);
    let long_press_ms = int(timing, "timing", "long_press_ms", &mut errors);
    for (key, value) in [
        ("flash_ms", flash_ms),
        ("countdown_ms", countdown_ms),
        ("long_press_ms", long_press_ms),
    ] {
        if value <= 0 || value > i64::from(i32::MAX) {
            errors.push(format!("[timing] {} must be 1-{}", key, i32::MAX));
        }
    }
    let return_to_flash = match timing.get("show_code_exit").and_then(|v| v.as_str()) {
        Some("stay") | None => false,
        Some("flash") => true,
        Some(other) => {
            errors.push(format!(
                "[timing] show_code_exit must be 'stay' or 'flash', not '{}'",
                other
            ));
            false
        }
    };

    let tone_hz = int(tone, "tone", "frequency_hz", &mut errors);
    if !(30..=20_000).contains(&tone_hz) {
        errors.push("[tone] frequency_hz must be 30-20000".to_string());
    }

    let columns = int(display, "display", "columns", &mut errors);
    let rows = int(display, "display", "rows", &mut errors);
    let brightness = int(display, "display", "brightness", &mut errors);
    if !(8..=40).contains(&columns) {
        errors.push("[display] columns must be 8-40".to_string());
    }
    if !(1..=4).contains(&rows) {
        errors.push("[display] rows must be 1-4".to_string());
    }
    if !(0..=7).contains(&brightness) {
        errors.push("[display] brightness must be 0-7".to_string());
    }
    let splash = match display.get("splash") {
        Some(toml::Value::String(s)) => s.clone(),
        _ => {
            errors.push("[display] missing 'splash' string".to_string());
            String::new()
        }
    };
    if !splash.is_ascii() {
        errors.push("[display] splash must be ASCII".to_string());
    }
    if splash.len() as i64 > columns {
        errors.push(format!("[display] splash longer than {} columns", columns));
    }

    report("Invalid settings in bomb.toml", &errors);

    let pins = validate_pins(pins);
    let (beep, beep_final) = validate_beep_curve(config);

    println!("cargo:warning=bomb.toml validated successfully");

    Bomb {
        flash_ms,
        countdown_ms,
        long_press_ms,
        return_to_flash,
        tone_hz,
        columns,
        rows,
        brightness,
        splash,
        pins,
        beep,
        beep_final,
    }
}

/// Validate pin numbers: in range and each used once
fn validate_pins(section: &toml::Value) -> Pins {
    let mut errors = Vec::new();

    let pins = Pins {
        lcd_rs: int(section, "pins", "lcd_rs", &mut errors),
        lcd_en: int(section, "pins", "lcd_en", &mut errors),
        lcd_data: int_array(section, "pins", "lcd_data", 4, &mut errors),
        segment_clk: int(section, "pins", "segment_clk", &mut errors),
        segment_dio: int(section, "pins", "segment_dio", &mut errors),
        keypad_rows: int_array(section, "pins", "keypad_rows", 4, &mut errors),
        keypad_cols: int_array(section, "pins", "keypad_cols", 4, &mut errors),
        trigger: int(section, "pins", "trigger", &mut errors),
        beeper: int(section, "pins", "beeper", &mut errors),
        led: int(section, "pins", "led", &mut errors),
    };

    if errors.is_empty() {
        let all = pins.all();
        for (i, (name, pin)) in all.iter().enumerate() {
            if *pin < 0 || *pin >= GPIO_COUNT {
                errors.push(format!("{} = {} is not a GPIO (0-29)", name, pin));
            }
            if let Some((other, _)) = all[..i].iter().find(|(_, p)| p == pin) {
                errors.push(format!("{} and {} both use GPIO {}", other, name, pin));
            }
        }
    }

    report("Invalid pin assignment in bomb.toml", &errors);
    pins
}

/// Validate the beep curve
///
/// Thresholds strictly decreasing; toward expiry the period may only
/// shrink and the duty only grow.
fn validate_beep_curve(config: &toml::Value) -> (Vec<(i64, i64, i64)>, (i64, i64)) {
    let mut errors = Vec::new();

    let mut steps = Vec::new();
    match config.get("beep") {
        Some(toml::Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                let name = format!("beep.{}", i);
                let above = int(entry, &name, "above_ms", &mut errors);
                let period = int(entry, &name, "period_ms", &mut errors);
                let duty = int(entry, &name, "duty_permille", &mut errors);
                steps.push((above, period, duty));
            }
        }
        _ => errors.push("[[beep]] must be an array of tables".to_string()),
    }

    let final_section = &config["beep_final"];
    let beep_final = (
        int(final_section, "beep_final", "period_ms", &mut errors),
        int(final_section, "beep_final", "duty_permille", &mut errors),
    );

    report("Invalid beep curve in bomb.toml", &errors);

    let patterns: Vec<(String, i64, i64)> = steps
        .iter()
        .enumerate()
        .map(|(i, &(_, period, duty))| (format!("beep.{}", i), period, duty))
        .chain(std::iter::once((
            "beep_final".to_string(),
            beep_final.0,
            beep_final.1,
        )))
        .collect();

    for (i, &(above, _, _)) in steps.iter().enumerate() {
        if above < 0 || above > i64::from(u32::MAX) {
            errors.push(format!("[beep.{}] above_ms out of range", i));
        }
        if i > 0 && above >= steps[i - 1].0 {
            errors.push(format!("[beep.{}] above_ms must be below the previous", i));
        }
    }

    for (i, (name, period, duty)) in patterns.iter().enumerate() {
        if *period <= 0 || *period > i64::from(u32::MAX) {
            errors.push(format!("[{}] period_ms must be positive", name));
        }
        if !(1..=1000).contains(duty) {
            errors.push(format!("[{}] duty_permille must be 1-1000", name));
        }
        if i > 0 {
            let (_, prev_period, prev_duty) = &patterns[i - 1];
            if period > prev_period {
                errors.push(format!("[{}] period_ms longer than before", name));
            }
            if duty < prev_duty {
                errors.push(format!("[{}] duty_permille lower than before", name));
            }
        }
    }

    report("Non-monotonic beep curve in bomb.toml", &errors);
    (steps, beep_final)
}

/// Write `bomb_config.rs` into OUT_DIR
fn generate_config(bomb: &Bomb) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("bomb_config.rs")).unwrap();

    let p = &bomb.pins;
    let list = |v: &[i64]| {
        v.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let steps = bomb
        .beep
        .iter()
        .map(|(above, period, duty)| format!("    BeepStep::new({}, {}, {}),", above, period, duty))
        .collect::<Vec<_>>()
        .join("\n");
    let exit = if bomb.return_to_flash {
        "ReturnToFlash"
    } else {
        "Stay"
    };

    write!(
        f,
        "// Generated from bomb.toml by build.rs

const BEEP_STEPS: &[BeepStep] = &[
{steps}
];

pub const BOMB_CONFIG: BombConfig = BombConfig {{
    flash_duration_ms: {flash},
    countdown_duration_ms: {countdown},
    beep_tone_hz: {tone},
    long_press_ms: {long_press},
    display: DisplayGeometry {{
        columns: {columns},
        rows: {rows},
    }},
    brightness: {brightness},
    splash_text: {splash:?},
    show_code_exit: ShowCodeExit::{exit},
    pins: PinAssignments {{
        lcd: LcdPins {{
            rs: {rs},
            en: {en},
            data: [{data}],
        }},
        segments: SegmentPins {{ clk: {clk}, dio: {dio} }},
        keypad: KeypadPins {{
            rows: [{rows_pins}],
            cols: [{cols_pins}],
        }},
        trigger: {trigger},
        beeper: {beeper},
        led: {led},
    }},
    beep_curve: BeepCurve {{
        steps: BEEP_STEPS,
        final_param: BeepParam::new({final_period}, {final_duty}),
    }},
}};
",
        steps = steps,
        flash = bomb.flash_ms,
        countdown = bomb.countdown_ms,
        tone = bomb.tone_hz,
        long_press = bomb.long_press_ms,
        columns = bomb.columns,
        rows = bomb.rows,
        brightness = bomb.brightness,
        splash = bomb.splash,
        exit = exit,
        rs = p.lcd_rs,
        en = p.lcd_en,
        data = list(&p.lcd_data),
        clk = p.segment_clk,
        dio = p.segment_dio,
        rows_pins = list(&p.keypad_rows),
        cols_pins = list(&p.keypad_cols),
        trigger = p.trigger,
        beeper = p.beeper,
        led = p.led,
        final_period = bomb.beep_final.0,
        final_duty = bomb.beep_final.1,
    )
    .unwrap();
}

//! Display formatting for report values.

/// Format with `decimals` fraction digits and comma-grouped thousands.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Compact number: `2` for 2.0, `0.75` for 0.75.
pub fn compact(value: f64) -> String {
    format!("{value}")
}

pub fn power_line(hp: f64, hp_rounded: f64, kw: f64) -> String {
    format!("{hp:.1} HP → Use {} HP ({kw:.1} kW)", compact(hp_rounded))
}

pub fn flow_line(flow_lph: f64, flow_lps: f64) -> String {
    format!("{} LPH ({flow_lps:.2} L/s)", group_thousands(flow_lph, 0))
}

pub fn metres(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$} m")
}

pub fn range(min: f64, max: f64, unit: &str) -> String {
    format!("{} - {} {unit}", compact(min), compact(max))
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

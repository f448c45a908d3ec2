//! Named layout/timing presets.
//!
//! Every magnitude the display animates with lives here. Lengths are in
//! abstract units (CSS pixels of the page layout) and are converted to
//! terminal cells with `units_per_col` / `units_per_row` at render time.

#[derive(Clone, Debug, PartialEq)]
pub struct MotionPreset {
    pub name: &'static str,

    /// Letter slide distance: `-(letter_base + index * letter_step)`.
    pub letter_base: f32,
    pub letter_step: f32,
    pub letter_duration_ms: f64,
    /// Per-letter delay step for the staggered reveal.
    pub stagger_ms: f64,
    /// Duration for letters and boxes returning to rest.
    pub return_duration_ms: f64,

    /// Vertical distance an overlay panel travels on enter/exit.
    pub panel_travel: f32,
    pub panel_enter_ms: f64,
    pub panel_exit_ms: f64,

    /// Debounce before a pointer-leave clears the hovered job.
    pub clear_delay_ms: f64,

    pub label_nudge: f32,
    pub nudge_ms: f64,
    pub underline_ms: f64,

    /// Share of the content width given to the heading column (percent).
    pub heading_percent: u16,
    pub units_per_col: f32,
    pub units_per_row: f32,
}

pub const STANDARD: MotionPreset = MotionPreset {
    name: "standard",
    letter_base: 500.0,
    letter_step: 50.0,
    letter_duration_ms: 800.0,
    stagger_ms: 80.0,
    return_duration_ms: 300.0,
    panel_travel: 200.0,
    panel_enter_ms: 400.0,
    panel_exit_ms: 300.0,
    clear_delay_ms: 100.0,
    label_nudge: 10.0,
    nudge_ms: 200.0,
    underline_ms: 300.0,
    heading_percent: 60,
    units_per_col: 10.0,
    units_per_row: 16.0,
};

/// Tighter variant: shorter travel and snappier timings for small screens.
pub const COMPACT: MotionPreset = MotionPreset {
    name: "compact",
    letter_base: 300.0,
    letter_step: 30.0,
    letter_duration_ms: 600.0,
    stagger_ms: 60.0,
    return_duration_ms: 250.0,
    panel_travel: 120.0,
    panel_enter_ms: 300.0,
    panel_exit_ms: 200.0,
    clear_delay_ms: 100.0,
    label_nudge: 10.0,
    nudge_ms: 150.0,
    underline_ms: 200.0,
    heading_percent: 55,
    units_per_col: 10.0,
    units_per_row: 16.0,
};

pub const ALL_PRESETS: [&MotionPreset; 2] = [&STANDARD, &COMPACT];

impl MotionPreset {
    /// Look up a preset by name, ignoring case and surrounding whitespace.
    pub fn by_name(name: &str) -> Option<&'static MotionPreset> {
        let name = name.trim();
        ALL_PRESETS
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Convert a horizontal length in units to whole columns (rounded).
    pub fn units_to_cols(&self, units: f32) -> i32 {
        (units / self.units_per_col).round() as i32
    }

    /// Convert a vertical length in units to whole rows (rounded).
    pub fn units_to_rows(&self, units: f32) -> i32 {
        (units / self.units_per_row).round() as i32
    }
}

impl Default for MotionPreset {
    fn default() -> Self {
        STANDARD
    }
}

/// Extract the `preset` parameter from a URL query string such as
/// `?preset=compact&x=1`.
pub fn preset_param(query: &str) -> Option<&str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "preset")
        .map(|(_, value)| value)
}

/// Resolve the preset for a query string, falling back to [`STANDARD`].
pub fn resolve(query: &str) -> &'static MotionPreset {
    match preset_param(query) {
        None => &STANDARD,
        Some(name) => match MotionPreset::by_name(name) {
            Some(p) => p,
            None => {
                crate::console::warn(&format!(
                    "unknown preset '{}', using '{}'",
                    name, STANDARD.name
                ));
                &STANDARD
            }
        },
    }
}

/// Preset requested by the page URL.
pub fn from_location() -> &'static MotionPreset {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    resolve(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(MotionPreset::by_name("standard"), Some(&STANDARD));
        assert_eq!(MotionPreset::by_name(" Compact "), Some(&COMPACT));
        assert_eq!(MotionPreset::by_name("huge"), None);
    }

    #[test]
    fn query_param_extraction() {
        assert_eq!(preset_param("?preset=compact"), Some("compact"));
        assert_eq!(preset_param("?a=1&preset=standard&b=2"), Some("standard"));
        assert_eq!(preset_param("?a=1"), None);
        assert_eq!(preset_param(""), None);
    }

    #[test]
    fn resolve_falls_back_to_standard() {
        assert_eq!(resolve("").name, "standard");
        assert_eq!(resolve("?preset=nope").name, "standard");
        assert_eq!(resolve("?preset=compact").name, "compact");
    }

    #[test]
    fn unit_conversion_rounds() {
        assert_eq!(STANDARD.units_to_cols(-500.0), -50);
        assert_eq!(STANDARD.units_to_cols(14.0), 1);
        assert_eq!(STANDARD.units_to_rows(200.0), 13); // 12.5 rounds away from zero
        assert_eq!(STANDARD.units_to_rows(-200.0), -13);
    }

    #[test]
    fn compact_travels_less_than_standard() {
        assert!(COMPACT.letter_base < STANDARD.letter_base);
        assert!(COMPACT.panel_travel < STANDARD.panel_travel);
        assert_eq!(COMPACT.clear_delay_ms, STANDARD.clear_delay_ms);
    }
}

//! Text for the playground's event log and options editor.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use gestures::recognizer::GesturePhase;
use gestures::{GestureData, GestureError, GestureKind, OptionsBag, Point};

/// Most recent entries kept per pad.
pub const LOG_LIMIT: usize = 8;

#[must_use]
pub fn format_point(p: Point) -> String {
    format!("({:.0}, {:.0})", p.x, p.y)
}

#[must_use]
pub fn phase_label(phase: GesturePhase) -> &'static str {
    match phase {
        GesturePhase::Start => "start",
        GesturePhase::Move => "move",
        GesturePhase::End => "end",
    }
}

/// One-line summary of an activation.
#[must_use]
pub fn describe(data: &GestureData) -> String {
    match data {
        GestureData::Tap(p) => format!("tap at {}", format_point(*p)),
        GestureData::DoubleTap(p) => format!("doubletap at {}", format_point(*p)),
        GestureData::Press(p) => format!("press at {}", format_point(*p)),
        GestureData::Swipe(s) => format!("swipe {} at {:.2} px/ms", s.motion.as_str(), s.velocity),
        GestureData::Drag(d) => format!("drag {} by ({:.0}, {:.0})", phase_label(d.phase), d.dx, d.dy),
        GestureData::Pinch(p) => format!("pinch {} x{:.2}", phase_label(p.phase), p.scale),
    }
}

/// Starting contents of a pad's options editor.
#[must_use]
pub fn default_options(kind: GestureKind) -> &'static str {
    match kind {
        GestureKind::Tap | GestureKind::DoubleTap => r#"{ "delay": 300, "threshold": 8 }"#,
        GestureKind::Press => r#"{ "delay": 500 }"#,
        GestureKind::Swipe => r#"{ "direction": "both", "threshold": 50, "velocity": 0.3 }"#,
        GestureKind::Drag => r#"{ "threshold": 0 }"#,
        GestureKind::Pinch => "{}",
    }
}

/// Parse the options editor contents. Blank text means no options.
///
/// # Errors
///
/// Returns [`GestureError::InvalidOptions`] unless the text is a JSON object.
pub fn parse_options(text: &str) -> Result<OptionsBag, GestureError> {
    if text.trim().is_empty() {
        return Ok(OptionsBag::new());
    }
    Ok(serde_json::from_str(text)?)
}

/// Prepend `entry`, keeping at most [`LOG_LIMIT`] entries.
pub fn push_log(log: &mut Vec<String>, entry: String) {
    log.insert(0, entry);
    log.truncate(LOG_LIMIT);
}

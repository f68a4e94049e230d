//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::{CanvasMode, CropBoxMode, Instructions};
use crate::layout::Extent;
use crate::rect::RectPatch;

const BOOL_REASON: &str = "expected true|false|1|0|yes|no|on|off";
const RECT_REASON: &str = "expected left,top,width,height with empty parts allowed";
const LOCK_REASON: &str = "expected a non-negative number";

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    let mut invalid = |reason: &'static str| {
        warnings.push(ParseWarning::ValueInvalid {
            key: canonical_key(key),
            value: String::from(value),
            reason,
        })
    };
    match key {
        // Container
        "w" | "width" | "h" | "height" => match parse_extent(value) {
            Some(e) => {
                let field = if key.starts_with('w') {
                    &mut inst.width
                } else {
                    &mut inst.height
                };
                set_or_warn(field, Some(e), key, value, warnings);
            }
            None => invalid("expected a number or auto"),
        },
        "ratio" => match parse_f64(value).filter(|&v| v > 0.0) {
            Some(r) => set_or_warn(&mut inst.ratio, Some(r), key, value, warnings),
            None => invalid("expected a positive number"),
        },

        // Canvas
        "canvas" => match parse_canvas_mode(value) {
            Some(m) => set_or_warn(&mut inst.canvas, Some(m), key, value, warnings),
            None => invalid("expected fit|originfit|origin"),
        },
        "canvas.rect" => match parse_rect(value) {
            Some(r) => set_or_warn(&mut inst.canvas_rect, Some(r), key, value, warnings),
            None => invalid(RECT_REASON),
        },
        "canvas.center" => match parse_bool(value) {
            Some(b) => set_or_warn(&mut inst.canvas_center, Some(b), key, value, warnings),
            None => invalid(BOOL_REASON),
        },
        "canvas.ratio" => match parse_lock_ratio(value) {
            Some(r) => set_or_warn(&mut inst.canvas_ratio, Some(r), key, value, warnings),
            None => invalid(LOCK_REASON),
        },

        // Crop box
        "cropbox" => match parse_crop_box_mode(value) {
            Some(m) => set_or_warn(&mut inst.crop_box, Some(m), key, value, warnings),
            None => invalid("expected fit|fitincanvas"),
        },
        "cropbox.rect" => match parse_rect(value) {
            Some(r) => set_or_warn(&mut inst.crop_box_rect, Some(r), key, value, warnings),
            None => invalid(RECT_REASON),
        },
        "cropbox.center" => match parse_bool(value) {
            Some(b) => set_or_warn(&mut inst.crop_box_center, Some(b), key, value, warnings),
            None => invalid(BOOL_REASON),
        },
        "cropbox.ratio" => match parse_lock_ratio(value) {
            Some(r) => set_or_warn(&mut inst.crop_box_ratio, Some(r), key, value, warnings),
            None => invalid(LOCK_REASON),
        },

        // Behavior
        "overflow" => match parse_bool(value) {
            Some(b) => set_or_warn(&mut inst.overflow, Some(b), key, value, warnings),
            None => invalid(BOOL_REASON),
        },
        "disabled" => match parse_bool(value) {
            Some(b) => set_or_warn(&mut inst.disabled, Some(b), key, value, warnings),
            None => invalid(BOOL_REASON),
        },

        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `auto`, or a number where negative also means auto.
fn parse_extent(s: &str) -> Option<Extent> {
    if s.trim().eq_ignore_ascii_case("auto") {
        return Some(Extent::Auto);
    }
    parse_f64(s).map(Extent::from_raw)
}

fn parse_lock_ratio(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v >= 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_canvas_mode(s: &str) -> Option<CanvasMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "fit" => Some(CanvasMode::Fit),
        "originfit" => Some(CanvasMode::OriginFit),
        "origin" => Some(CanvasMode::Origin),
        _ => None,
    }
}

fn parse_crop_box_mode(s: &str) -> Option<CropBoxMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "fit" => Some(CropBoxMode::Fit),
        "fitincanvas" => Some(CropBoxMode::FitInCanvas),
        _ => None,
    }
}

/// `left,top,width,height`, optionally parenthesized. Empty parts are left
/// unset; anything else must be a finite number, and sizes non-negative.
fn parse_rect(s: &str) -> Option<RectPatch> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = s.split(',').collect();
    let [left, top, width, height] = parts.as_slice() else {
        return None;
    };
    let part = |p: &str| -> Option<Option<f64>> {
        if p.trim().is_empty() {
            Some(None)
        } else {
            parse_f64(p).map(Some)
        }
    };
    let size = |p: &str| part(p).filter(|v| v.is_none_or(|v| v >= 0.0));
    Some(RectPatch {
        left: part(*left)?,
        top: part(*top)?,
        width: size(*width)?,
        height: size(*height)?,
    })
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space. Invalid UTF-8
/// in the decoded bytes is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                        continue;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Canonical `&'static str` name for a recognized key, used in warnings.
fn canonical_key(key: &str) -> &'static str {
    match key {
        "w" | "width" => "width",
        "h" | "height" => "height",
        "ratio" => "ratio",
        "canvas" => "canvas",
        "canvas.rect" => "canvas.rect",
        "canvas.center" => "canvas.center",
        "canvas.ratio" => "canvas.ratio",
        "cropbox" => "cropbox",
        "cropbox.rect" => "cropbox.rect",
        "cropbox.center" => "cropbox.center",
        "cropbox.ratio" => "cropbox.ratio",
        "overflow" => "overflow",
        "disabled" => "disabled",
        _ => "unknown",
    }
}

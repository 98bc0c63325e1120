//! Reply decoder: turns a complete CSI/DCS/OSC payload into a typed [`Reply`],
//! trying each known reply shape in order and falling through to the generic
//! sequence type on any parse failure.

use vtseq::decpm;

/// A decoded terminal reply to one of the `vtseq::requests` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Primary DA: `class` plus the mapped VT level (`None` if the class maps
    /// to no known level).
    Da { class: u32, level: Option<u32> },
    /// Extended cursor position report: `row;column;page`.
    CpExtended { row: u32, column: u32, page: u32 },
    /// Cursor position report: `row;column`.
    Cp { row: u32, column: u32 },
    /// DECRQM reply: mode and its reported value (0 = not recognized, 1 =
    /// set, 2 = reset, 3 = permanently set, 4 = permanently reset).
    DecPm { mode: u16, value: u16 },
    /// Secondary DA (terminal id / firmware version / keyboard).
    Tic { firmware: u32, keyboard: u32 },
    /// XTWINOPS geometry reply.
    Window { mode: u32, x: u32, y: u32 },
    /// Tertiary DA terminal id, as the raw three hex bytes.
    Tid([u8; 3]),
    /// DECCKSR checksum reply.
    Cks { id: Option<u32>, checksum: u32 },
    /// OSC palette/environment/cursor/highlight/pointer color reply.
    /// `target` mirrors the OSC numeric tag, negated for indexed palette
    /// slots to disambiguate from the positive environment/cursor targets.
    OsColor { target: i32, r: u8, g: u8, b: u8 },
}

fn map_da_class(class: u32, attrs: &[u32]) -> Option<u32> {
    match (class, attrs.first().copied()) {
        (1, Some(0)) => Some(101),
        (1, _) => Some(100),
        (4, _) => Some(132),
        (6, _) => Some(102),
        (7, _) => Some(131),
        (12, _) => Some(125),
        (62, _) => Some(220),
        (63, _) => Some(320),
        (64, _) => Some(420),
        (c, _) if c > 64 => Some(c),
        _ => None,
    }
}

fn split_params(params: &str) -> Vec<&str> {
    if params.is_empty() { Vec::new() } else { params.split(';').collect() }
}

fn parse_u32(s: &str) -> Option<u32> {
    atoi_simd::parse(s.as_bytes()).ok()
}

/// Decode a completed CSI payload: `prefix` is any leading `?`/`>`/`=`
/// marker, `params` the semicolon-separated parameter string, and `finalizer`
/// the CSI final byte.
#[must_use]
pub fn decode_csi(prefix: &str, params: &str, finalizer: char) -> Option<Reply> {
    let parts = split_params(params);
    let nums: Vec<u32> = parts.iter().filter_map(|p| parse_u32(p)).collect();
    match (prefix, finalizer) {
        ("?", 'c') => {
            let class = *nums.first()?;
            Some(Reply::Da { class, level: map_da_class(class, &nums[1..]) })
        }
        ("?", 'R') => Some(Reply::CpExtended { row: *nums.first()?, column: *nums.get(1)?, page: *nums.get(2).unwrap_or(&1) }),
        ("", 'R') => Some(Reply::Cp { row: *nums.first()?, column: *nums.get(1)? }),
        ("?", 'y') => {
            // `CSI ? n ; v $ y` -- the `$` lands inside `params` as the last char.
            let trimmed = params.strip_suffix('$')?;
            let mut it = trimmed.split(';');
            let mode: u16 = it.next().and_then(|s| parse_u32(s)).map(|v| v as u16)?;
            let value: u16 = it.next().and_then(|s| parse_u32(s)).map(|v| v as u16)?;
            decpm::record_reply(mode, value);
            Some(Reply::DecPm { mode, value })
        }
        (">", 'c') => Some(Reply::Tic { firmware: *nums.get(1)?, keyboard: *nums.get(2)? }),
        ("", 't') => Some(Reply::Window { mode: *nums.first()?, x: *nums.get(2)?, y: *nums.get(1)? }),
        _ => None,
    }
}

/// Decode a completed DCS payload.
#[must_use]
pub fn decode_dcs(params: &str, payload: &str) -> Option<Reply> {
    if let Some(hex) = params.strip_prefix("!|") {
        let hex = hex.trim();
        if hex.len() == 6 && hex.is_ascii() {
            let mut bytes = [0u8; 3];
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            return Some(Reply::Tid(bytes));
        }
    }
    if let Some(rest) = payload.strip_suffix('~') {
        // `DCS [id] ! ~ hex`
        let mut it = rest.splitn(2, "!~");
        let head = it.next().unwrap_or("");
        let id = if head.is_empty() { None } else { parse_u32(head) };
        let hex_part = it.next().unwrap_or(head);
        let checksum = u32::from_str_radix(hex_part.trim(), 16).ok()?;
        return Some(Reply::Cks { id, checksum });
    }
    None
}

fn parse_xcolor_rgb(spec: &str) -> Option<(u8, u8, u8)> {
    let rest = spec.strip_prefix("rgb:")?;
    let mut parts = rest.split('/');
    let r = u8::from_str_radix(parts.next()?.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(parts.next()?.get(0..2)?, 16).ok()?;
    let b = u8::from_str_radix(parts.next()?.get(0..2)?, 16).ok()?;
    Some((r, g, b))
}

/// Decode a completed OSC payload (`params` is everything before the first
/// `;` inside the OSC body, `payload` the rest).
#[must_use]
pub fn decode_osc(params: &str, payload: &str) -> Option<Reply> {
    if params == "4" {
        let mut it = payload.splitn(2, ';');
        let slot: i32 = parse_u32(it.next()?)? as i32;
        let (r, g, b) = parse_xcolor_rgb(it.next()?)?;
        return Some(Reply::OsColor { target: -slot, r, g, b });
    }
    let n: i32 = parse_u32(params)? as i32;
    if matches!(n, 10..=19) {
        let (r, g, b) = parse_xcolor_rgb(payload)?;
        return Some(Reply::OsColor { target: n, r, g, b });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_primary_da_class_one_as_level_100() {
        assert_eq!(decode_csi("?", "1;2", 'c'), Some(Reply::Da { class: 1, level: Some(100) }));
    }

    #[test]
    fn decodes_cursor_position_report() {
        assert_eq!(decode_csi("", "24;80", 'R'), Some(Reply::Cp { row: 24, column: 80 }));
    }

    #[test]
    fn decodes_decrqm_reply_and_caches_it() {
        let reply = decode_csi("?", "1006;1$", 'y');
        assert_eq!(reply, Some(Reply::DecPm { mode: 1006, value: 1 }));
        assert_eq!(decpm::reply_cache(1006), Some(1));
    }

    #[test]
    fn decodes_osc_palette_reply_with_negated_target() {
        assert_eq!(decode_osc("4", "1;rgb:ff/00/00"), Some(Reply::OsColor { target: -1, r: 0xff, g: 0, b: 0 }));
    }

    #[test]
    fn decodes_osc_environment_reply() {
        assert_eq!(decode_osc("10", "rgb:00/ff/00"), Some(Reply::OsColor { target: 10, r: 0, g: 0xff, b: 0 }));
    }

    #[test]
    fn invalid_da_params_fall_through_to_none() {
        assert_eq!(decode_csi("?", "", 'c'), None);
    }
}

//! Lookup tables the CSI/SS3/HP-VT52 sub-parsers use to turn a final byte
//! (or a `~`/`z`-terminated numeric parameter) into a [`Key`].

use crate::event::{Key, del_ins_key, nav_key};

/// Table-driven `CSI <final>` -> key mapping shared by the CSI and SCO
/// finalization paths (PC/SCO cursor and editing keys).
#[must_use]
pub fn csi_final_key(final_byte: u8, modifier: i32) -> Option<Key> {
    nav_or_del_for_final(final_byte, modifier)
}

/// Table-driven `SS3 <final>` -> key mapping (PC/DEC/SUN application-cursor
/// keys plus the F1-F4 PC convention).
#[must_use]
pub fn ss3_final_key(final_byte: u8, modifier: i32) -> Option<Key> {
    match final_byte {
        0x50 => Some(fkey(1, modifier)),
        0x51 => Some(fkey(2, modifier)),
        0x52 => Some(fkey(3, modifier)),
        0x53 => Some(fkey(4, modifier)),
        _ => nav_or_del_for_final(final_byte, modifier),
    }
}

fn nav_or_del_for_final(final_byte: u8, modifier: i32) -> Option<Key> {
    use crate::event::{DelIns, NavKey};
    let nav = |k: i32| Key::Nav(NavKey::new(Some(k), Some(modifier)));
    match final_byte {
        0x41 => Some(nav(nav_key::A_UP)),
        0x42 => Some(nav(nav_key::A_DOWN)),
        0x43 => Some(nav(nav_key::A_RIGHT)),
        0x44 => Some(nav(nav_key::A_LEFT)),
        0x48 => Some(nav(nav_key::C_HOME)),
        0x46 => Some(nav(nav_key::C_END)),
        0x45 => Some(nav(nav_key::C_BEGIN)),
        0x47 => Some(nav(nav_key::P_DOWN)),
        0x49 => Some(nav(nav_key::P_UP)),
        0x4c => Some(Key::DelIns(DelIns { key: Some(del_ins_key::INSERT), modifier: Some(modifier) })),
        0x5a => Some(nav(nav_key::SHIFT_TAB)),
        _ => None,
    }
}

fn fkey(n: i32, modifier: i32) -> Key {
    Key::FKey(crate::event::FKey { key: Some(n), modifier: Some(modifier) })
}

fn nav(k: i32, modifier: i32) -> Key {
    Key::Nav(crate::event::NavKey { key: Some(k), modifier: Some(modifier) })
}

fn del_ins(k: i32, modifier: i32) -> Key {
    Key::DelIns(crate::event::DelIns { key: Some(k), modifier: Some(modifier) })
}

/// `CSI <param> ~` and (SUN) `z`-terminated numeric parameter -> key, for the
/// PC/VT220/SUN single-parameter function/navigation key convention.
#[must_use]
pub fn tilde_param_key(param: u32, modifier: i32) -> Option<Key> {
    Some(match param {
        11 => fkey(1, modifier),
        12 => fkey(2, modifier),
        13 => fkey(3, modifier),
        14 => fkey(4, modifier),
        15 => fkey(5, modifier),
        17 => fkey(6, modifier),
        18 => fkey(7, modifier),
        19 => fkey(8, modifier),
        20 => fkey(9, modifier),
        21 => fkey(10, modifier),
        23 => fkey(11, modifier),
        24 => fkey(12, modifier),
        25 => fkey(13, modifier),
        26 => fkey(14, modifier),
        28 => fkey(15, modifier),
        29 => fkey(16, modifier),
        31 => fkey(17, modifier),
        32 => fkey(18, modifier),
        33 => fkey(19, modifier),
        34 => fkey(20, modifier),
        6 => nav(nav_key::P_DOWN, modifier),
        5 => nav(nav_key::P_UP, modifier),
        3 => del_ins(del_ins_key::DELETE, modifier),
        2 => del_ins(del_ins_key::INSERT, modifier),
        1 => nav(nav_key::C_HOME, modifier),
        4 => nav(nav_key::C_END, modifier),
        214 => nav(nav_key::C_HOME, modifier),
        220 => nav(nav_key::C_END, modifier),
        218 => nav(nav_key::C_BEGIN, modifier),
        222 => nav(nav_key::P_DOWN, modifier),
        216 => nav(nav_key::P_UP, modifier),
        196 => fkey(15, modifier),
        197 => fkey(16, modifier),
        _ => return None,
    })
}

/// HP/VT52 single-byte emulation introducers, consulted only after the
/// Fe/Fs/Fp/nF/CSI/SS2/SS3/DCS/OSC/APC checks fail.
#[must_use]
pub fn hp_vt52_single_byte_key(byte: u8) -> Option<Key> {
    use crate::event::{DelIns, KeyPad, NavKey};
    Some(match byte {
        b'A' => nav(nav_key::A_UP, 0),
        b'B' => nav(nav_key::A_DOWN, 0),
        b'C' => nav(nav_key::A_RIGHT, 0),
        b'D' => nav(nav_key::A_LEFT, 0),
        b'F' => nav(nav_key::C_END, 0),
        b'J' => Key::DelIns(DelIns { key: Some(del_ins_key::HP_CLEAR), modifier: Some(0) }),
        b'Q' => Key::DelIns(DelIns { key: Some(del_ins_key::INSERT), modifier: Some(0) }),
        b'R' => Key::Pad(KeyPad { key: Some(crate::event::keypad_key::PF3) }),
        b'S' => nav(nav_key::P_DOWN, 0),
        b'T' => nav(nav_key::P_UP, 0),
        b'h' => nav(nav_key::C_HOME, 0),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csi_final_maps_arrow_keys() {
        let Some(Key::Nav(n)) = csi_final_key(0x41, 0) else { panic!("expected NavKey") };
        assert_eq!(n.key, Some(nav_key::A_UP));
    }

    #[test]
    fn tilde_param_maps_delete_key() {
        let Some(Key::DelIns(d)) = tilde_param_key(3, 0) else { panic!("expected DelIns") };
        assert_eq!(d.key, Some(del_ins_key::DELETE));
    }

    #[test]
    fn ss3_final_maps_f1_to_f4() {
        let Some(Key::FKey(f)) = ss3_final_key(0x50, 0) else { panic!("expected FKey") };
        assert_eq!(f.key, Some(1));
    }
}

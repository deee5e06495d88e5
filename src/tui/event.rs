//! Raw terminal input decoding.
//!
//! The reader thread hands over whatever bytes one `read()` returned. A buffer
//! is classified by its leading bytes:
//!
//! ```text
//! 0x03                      Ctrl+C        → Quit
//! 0x20                      Space         → TogglePause
//! ESC [ C                   Right arrow   → NextSeed
//! ESC [ D                   Left arrow    → PrevSeed
//! ESC [ < b ; col ; row M   SGR press     → MouseClick
//! ```
//!
//! Everything else, including SGR release reports (`m`), decodes to nothing.

use log::debug;

/// Bytes requested per `read()` by the input reader.
pub const INPUT_BUFFER_CAPACITY: usize = 32;

const CTRL_C: u8 = 3;
const SPACE: u8 = b' ';
const ESC: u8 = 0x1b;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    TogglePause,
    NextSeed,
    PrevSeed,
    /// 1-based terminal position as reported by the terminal.
    MouseClick { button: u16, col: u16, row: u16 },
}

/// Decode one input buffer. Never blocks.
pub fn decode(buf: &[u8]) -> Option<TuiEvent> {
    let event = match buf {
        [CTRL_C, ..] => Some(TuiEvent::Quit),
        [SPACE, ..] => Some(TuiEvent::TogglePause),
        [ESC, b'[', b'<', rest @ ..] => decode_sgr_press(rest),
        [ESC, b'[', b'C', ..] => Some(TuiEvent::NextSeed),
        [ESC, b'[', b'D', ..] => Some(TuiEvent::PrevSeed),
        _ => None,
    };
    debug!("Decoded {:?} from {:?}", event, buf);
    event
}

/// Parses `b;col;rowM` (the part after `ESC [ <`).
fn decode_sgr_press(bytes: &[u8]) -> Option<TuiEvent> {
    let end = bytes.iter().position(|&b| b == b'M' || b == b'm')?;
    if bytes[end] != b'M' {
        return None;
    }
    let body = std::str::from_utf8(&bytes[..end]).ok()?;
    let mut fields = body.split(';').map(|field| field.parse::<u16>().ok());
    let button = fields.next()??;
    let col = fields.next()??;
    let row = fields.next()??;
    if fields.next().is_some() {
        return None;
    }
    Some(TuiEvent::MouseClick { button, col, row })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_keys() {
        assert_eq!(decode(&[3]), Some(TuiEvent::Quit));
        assert_eq!(decode(b" "), Some(TuiEvent::TogglePause));
        assert_eq!(decode(b"q"), None);
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(decode(b"\x1b[C"), Some(TuiEvent::NextSeed));
        assert_eq!(decode(b"\x1b[D"), Some(TuiEvent::PrevSeed));
        assert_eq!(decode(b"\x1b[A"), None);
        assert_eq!(decode(b"\x1b["), None);
        assert_eq!(decode(b"\x1b"), None);
    }

    #[test]
    fn test_sgr_mouse_press() {
        assert_eq!(
            decode(b"\x1b[<0;5;3M"),
            Some(TuiEvent::MouseClick { button: 0, col: 5, row: 3 })
        );
        assert_eq!(
            decode(b"\x1b[<2;120;48M"),
            Some(TuiEvent::MouseClick { button: 2, col: 120, row: 48 })
        );
    }

    #[test]
    fn test_sgr_release_is_ignored() {
        assert_eq!(decode(b"\x1b[<0;5;3m"), None);
    }

    #[test]
    fn test_press_followed_by_release_in_one_buffer() {
        assert_eq!(
            decode(b"\x1b[<0;7;9M\x1b[<0;7;9m"),
            Some(TuiEvent::MouseClick { button: 0, col: 7, row: 9 })
        );
    }

    #[test]
    fn test_malformed_mouse_reports_are_discarded() {
        assert_eq!(decode(b"\x1b[<0;5M"), None);
        assert_eq!(decode(b"\x1b[<0;x;3M"), None);
        assert_eq!(decode(b"\x1b[<0;5;3"), None);
        assert_eq!(decode(b"\x1b[<;5;3M"), None);
        assert_eq!(decode(b"\x1b[<0;5;3;9M"), None);
        assert_eq!(decode(b"\x1b[<0;99999999;3M"), None);
    }

    #[test]
    fn test_buffer_capacity_fits_largest_report() {
        assert!(b"\x1b[<35;65535;65535M".len() <= INPUT_BUFFER_CAPACITY);
    }
}

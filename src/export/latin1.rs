//! Single-byte transcoding: ISO-8859-1 for CSV, WinAnsi for PDF text

/// Encode text as ISO-8859-1
///
/// Characters above U+00FF have no Latin-1 byte and become `?`. Returns the
/// encoded bytes and the number of characters replaced.
pub fn encode_lossy(s: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = s
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) => b,
            Err(_) => {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    (bytes, replaced)
}

/// Encode text as WinAnsi (Windows-1252), the encoding of the PDF base fonts
///
/// Agrees with ISO-8859-1 except at 0x80-0x9F, which WinAnsi spends on
/// typographic characters such as `€` and curly quotes instead of C1 controls.
/// C1 controls and characters with no WinAnsi byte become `?`.
pub fn encode_win_ansi_lossy(s: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = s
        .chars()
        .map(|c| match win_ansi_byte(c) {
            Some(b) => b,
            None => {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    (bytes, replaced)
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{0}'..='\u{7f}' | '\u{a0}'..='\u{ff}' => return u8::try_from(u32::from(c)).ok(),
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

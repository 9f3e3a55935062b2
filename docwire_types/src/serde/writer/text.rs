use crate::serde::Writer;
use std::fmt;

fn json_escape(b: u8) -> Option<&'static [u8]> {
    let esc: &'static [u8] = match b {
        b'\x08' => b"\\b",
        b'\x0C' => b"\\f",
        b'\n' => b"\\n",
        b'\r' => b"\\r",
        b'\t' => b"\\t",
        b'\\' => b"\\\\",
        b'"' => b"\\\"",
        /* Keeps the output inert when it is later embedded in HTML. */
        b'&' => b"\\u0026",
        _ => return None,
    };
    Some(esc)
}

impl Writer {
    /// Appends `s` as a quoted JSON string.
    ///
    /// Only `\b \f \n \r \t \\ "` and `&` are escaped. Every other byte, including
    /// other control bytes and multi-byte UTF-8 sequences, is copied as is.
    pub fn write_json_string(&mut self, s: impl AsRef<[u8]>) {
        let s = s.as_ref();
        let w_len = s
            .iter()
            .map(|b| json_escape(*b).map_or(1, <[u8]>::len))
            .sum::<usize>();
        self.reserve(w_len + 2);

        self.write_u8(b'"');
        let mut plain_from = 0;
        for (i, b) in s.iter().enumerate() {
            if let Some(esc) = json_escape(*b) {
                self.write_bytes(&s[plain_from..i]);
                self.write_bytes(esc);
                plain_from = i + 1;
            }
        }
        self.write_bytes(&s[plain_from..]);
        self.write_u8(b'"');
    }

    /// Appends the decimal ASCII rendering of `i`: no leading zeros, `-` for negatives.
    pub fn write_decimal<I: itoa::Integer>(&mut self, i: I) {
        let mut buf = itoa::Buffer::new();
        self.write_bytes(buf.format(i).as_bytes());
    }
}

/// Lets `write!` append formatted text.
impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

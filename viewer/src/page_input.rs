use std::num::IntErrorKind;

/// Clamp a requested page into `[1, total_pages]`.
///
/// A `total_pages` of zero is treated as one page.
pub fn clamp_page(requested: i64, total_pages: u32) -> u32 {
    let last = i64::from(total_pages.max(1));
    requested.clamp(1, last) as u32
}

/// Interpret the page-number field's text.
///
/// Numbers are clamped, overflowing numbers clamp to the nearest bound and
/// anything unparseable keeps `current`.
pub fn parse_page(text: &str, current: u32, total_pages: u32) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(n) => clamp_page(n, total_pages),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => clamp_page(i64::MAX, total_pages),
            IntErrorKind::NegOverflow => 1,
            _ => clamp_page(i64::from(current), total_pages),
        },
    }
}

/// Editable text behind the footer's "Page [n] of N" field.
#[derive(Debug, Default)]
pub struct PageInput {
    text: String,
    focused: bool,
}

impl PageInput {
    pub fn new(current: u32) -> Self {
        Self { text: current.to_string(), focused: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '-' && self.text.is_empty()) {
            self.text.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Leave the field, returning the validated page number.
    pub fn commit(&mut self, current: u32, total_pages: u32) -> u32 {
        self.focused = false;
        let page = parse_page(&self.text, current, total_pages);
        self.text = page.to_string();
        page
    }

    /// Leave the field without applying what was typed.
    pub fn cancel(&mut self, current: u32) {
        self.focused = false;
        self.text = current.to_string();
    }

    /// Mirror the controller's page number while the field is not being edited.
    pub fn sync(&mut self, current: u32) {
        if !self.focused {
            self.text = current.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-7, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("2", 1, 3), 2);
        assert_eq!(parse_page(" 3 ", 1, 3), 3);
        assert_eq!(parse_page("40", 1, 3), 3);
        assert_eq!(parse_page("-1", 2, 3), 1);
        assert_eq!(parse_page("", 2, 3), 2);
        assert_eq!(parse_page("abc", 2, 3), 2);
        assert_eq!(parse_page("99999999999999999999999", 1, 3), 3);
        assert_eq!(parse_page("-99999999999999999999999", 2, 3), 1);
    }

    #[test]
    fn test_parse_page_always_in_range() {
        for text in ["", "0", "1", "-5", "7", "x1", "12abc", "4294967296", "-"] {
            for total in [0u32, 1, 3, 10] {
                let page = parse_page(text, 1, total);
                assert!(page >= 1 && page <= total.max(1), "{text:?} / {total} -> {page}");
            }
        }
    }

    #[test]
    fn test_input_editing_and_commit() {
        let mut input = PageInput::new(1);
        input.focus();
        input.clear();
        input.push('1');
        input.push('x');
        input.push('2');
        assert_eq!(input.text(), "12");
        assert_eq!(input.commit(1, 5), 5);
        assert_eq!(input.text(), "5");
        assert!(!input.is_focused());
    }

    #[test]
    fn test_cancel_discards_text() {
        let mut input = PageInput::new(2);
        input.focus();
        input.clear();
        input.push('9');
        input.cancel(2);
        assert!(!input.is_focused());
        assert_eq!(input.text(), "2");
    }

    #[test]
    fn test_sync_ignored_while_focused() {
        let mut input = PageInput::new(1);
        input.focus();
        input.clear();
        input.push('4');
        input.sync(2);
        assert_eq!(input.text(), "4");
        input.commit(2, 5);
        input.sync(3);
        assert_eq!(input.text(), "3");
    }
}

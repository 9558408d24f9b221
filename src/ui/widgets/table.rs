use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Column-aligned table sized by display width
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty, extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let widths = self.widths();
        let (sep, rule) = if supports_unicode {
            (theme::borders::VERTICAL, theme::borders::HORIZONTAL)
        } else {
            (theme::borders_ascii::VERTICAL, theme::borders_ascii::HORIZONTAL)
        };
        let sep = format!(" {} ", sep);

        let mut out = String::new();
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| ColoredText::plain(pad(h, *w)).bold().render(supports_color))
            .collect();
        out.push_str(header.join(&sep).trim_end());
        out.push('\n');

        let total = widths.iter().sum::<usize>() + sep.width() * widths.len().saturating_sub(1);
        out.push_str(&ColoredText::dim(rule.repeat(total)).render(supports_color));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
            out.push_str(cells.join(&sep).trim_end());
            out.push('\n');
        }
        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

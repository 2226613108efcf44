#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows. Numeric and currency cells are
/// right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate_text(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let right = looks_numeric(&truncated);
                if options.color {
                    let (colored, extra) = colorize_state(&truncated);
                    pad_cell(&colored, *width, right, extra)
                } else {
                    pad_cell(&truncated, *width, right, 0)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Digits with pt-BR separators, optionally prefixed by `R$` or suffixed by a unit.
fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    let body = trimmed
        .trim_start_matches('-')
        .trim_start_matches("R$ ")
        .trim_end_matches(" kg/dia")
        .trim_end_matches(" kg")
        .trim_end_matches(" @")
        .trim_end_matches('%');
    !body.is_empty()
        && body.chars().next().is_some_and(|c| c.is_ascii_digit())
        && body
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ','))
}

/// `extra` is the number of invisible escape characters in `value`.
fn pad_cell(value: &str, width: usize, right: bool, extra: usize) -> String {
    let visible = value.chars().count().saturating_sub(extra);
    let pad = " ".repeat(width.saturating_sub(visible));
    if right {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

fn colorize_state(value: &str) -> (String, usize) {
    let code = match value {
        "active" | "completed" | "yes" => Some("32"),
        "pending" | "closed" => Some("33"),
        "archived" | "no" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => (format!("\u{1b}[{code}m{value}\u{1b}[0m"), 9),
        None => (value.to_string(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_text_left_and_money_right() {
        let headers = ["lot", "revenue"];
        let rows = vec![
            vec!["Lote A".to_string(), "R$ 9,50".to_string()],
            vec!["Lote Bezerros".to_string(), "R$ 14.240,00".to_string()],
        ];
        let table = render_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Lote A "));
        assert!(lines[2].ends_with("     R$ 9,50"));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn numeric_detection() {
        assert!(looks_numeric("1.234,5 kg"));
        assert!(looks_numeric("-R$ 10,00"));
        assert!(looks_numeric("12,3%"));
        assert!(looks_numeric("0,850 kg/dia"));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("BR-01"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "title"];
        let rows = vec![vec![
            "tar-1".to_string(),
            "Vacinar o lote inteiro contra aftosa".to_string(),
        ]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 20);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn colored_cells_keep_alignment() {
        let headers = ["status", "name"];
        let rows = vec![
            vec!["active".to_string(), "A".to_string()],
            vec!["archived".to_string(), "B".to_string()],
        ];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[32mactive\u{1b}[0m"));
        let strip = |s: &str| s.replace("\u{1b}[32m", "").replace("\u{1b}[31m", "").replace("\u{1b}[0m", "");
        assert_eq!(strip(lines[2]).find('A'), strip(lines[3]).find('B'));
    }
}

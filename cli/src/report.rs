use salary_scraper::StatsTable;

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render the stats as an ascii table with `title` embedded in the top border
pub fn render_table(title: &str, table: &StatsTable) -> String {
    let rows = table
        .iter()
        .map(|(keyword, stats)| {
            [
                keyword.to_owned(),
                stats.found.to_string(),
                stats.processed.to_string(),
                stats.average_salary.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = separator(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(top_border(&separator, title));
    lines.push(row_line(&HEADER[..], &widths));
    lines.push(separator.clone());
    lines.extend(rows.iter().map(|row| row_line(&row[..], &widths)));
    lines.push(separator);
    lines.join("\n")
}

fn separator(widths: &[usize]) -> String {
    let cells = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    format!("+{}+", cells)
}

fn row_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", cells)
}

/// A title too long for the border goes on its own line
fn top_border(separator: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title_len + 2 > separator.len() {
        return format!("{}\n{}", title, separator);
    }
    // the separator is ascii, so char counts are byte offsets
    format!("+{}{}", title, &separator[1 + title_len..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_scraper::KeywordStats;

    fn stats(found: u64, processed: u64, average_salary: u64) -> KeywordStats {
        KeywordStats {
            found,
            processed,
            average_salary,
        }
    }

    #[test]
    fn test_render_table() {
        let mut table = StatsTable::new();
        table.insert("Python", stats(2, 1, 150000));
        table.insert("C#", stats(0, 0, 0));
        let expected = "\
+HeadHunter Moscow-----------+---------------------+----------------+
| Language | Vacancies found | Vacancies processed | Average salary |
+----------+-----------------+---------------------+----------------+
| Python   | 2               | 1                   | 150000         |
| C#       | 0               | 0                   | 0              |
+----------+-----------------+---------------------+----------------+";
        assert_eq!(render_table("HeadHunter Moscow", &table), expected);
    }

    #[test]
    fn test_columns_grow_with_content() {
        let mut table = StatsTable::new();
        table.insert("Программист 1С", stats(12345678901234567890, 0, 0));
        let rendered = render_table("SuperJob", &table);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        let widths = lines.iter().map(|l| l.chars().count()).collect::<Vec<_>>();
        assert!(widths.iter().all(|w| *w == widths[0]), "{}", rendered);
        assert!(lines[3].starts_with("| Программист 1С | 12345678901234567890 |"));
    }

    #[test]
    fn test_long_title_on_its_own_line() {
        let title = "x".repeat(200);
        let rendered = render_table(&title, &StatsTable::new());
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], title);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("+---"));
    }
}
